//! Snapshot tests for diagram rendering output
//!
//! These tests compare rendered output against golden files in tests/fixtures/.
//! To update fixtures after changing rendering, run the tests with UPDATE_FIXTURES=1

use asciigraph::plugins::ascii::DiagramRenderer;
use asciigraph::{render, sample_graph, CharacterSet, Renderer};
use std::fs;
use std::path::Path;

/// Compare output to a fixture file
fn assert_fixture(name: &str, output: &str) {
    let fixture_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(format!("{}.txt", name));

    if std::env::var("UPDATE_FIXTURES").is_ok() {
        fs::write(&fixture_path, output).expect("failed to write fixture");
        println!("Updated fixture: {}", fixture_path.display());
        return;
    }

    let expected = fs::read_to_string(&fixture_path).unwrap_or_else(|_| {
        panic!(
            "Fixture not found: {}\nRun with UPDATE_FIXTURES=1 to create it.\n\nActual output:\n{}",
            fixture_path.display(),
            output
        )
    });

    if output != expected {
        panic!(
            "Snapshot mismatch for '{}'!\n\n=== Expected ===\n{}\n=== Actual ===\n{}\n=== Diff ===\nRun with UPDATE_FIXTURES=1 to update.",
            name, expected, output
        );
    }
}

fn assert_dot_fixture(name: &str, input: &str) {
    let output = render(input).expect("render should succeed");
    assert_fixture(name, &output);
}

fn render_sample(style: CharacterSet) -> String {
    DiagramRenderer::with_style(style)
        .render(&sample_graph())
        .expect("sample graph renders")
        .join("\n")
}

#[test]
fn test_sample_graph() {
    assert_fixture("sample_graph", &render_sample(CharacterSet::Ascii));
}

#[test]
fn test_sample_graph_unicode() {
    assert_fixture("sample_graph_unicode", &render_sample(CharacterSet::Unicode));
}

#[test]
fn test_triangle() {
    assert_dot_fixture("triangle", "graph tri {\n  a -- b -- c;\n  a -- c;\n}\n");
}

#[test]
fn test_star() {
    assert_dot_fixture(
        "star",
        "// hub with four spokes\ngraph star {\n  h -- a;\n  h -- b; h -- c;\n  h -- d;\n}\n",
    );
}

#[test]
fn test_crossing_spans() {
    assert_dot_fixture(
        "crossing",
        r#"graph crossing {
            p; q; r; s; t;
            p -- r;
            q -- t;
            r -- t;
            p -- s;
        }"#,
    );
}

#[test]
fn test_neighbour_chain() {
    assert_dot_fixture("chain", "graph {\n  w -- x -- y -- z;\n}");
}
