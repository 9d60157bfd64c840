//! Tests for public API functions in lib.rs

use asciigraph::prelude::*;
use asciigraph::{parse, render, render_matrix, render_with_style, sample_graph, shortest_path};

const SQUARE: &str = "graph square {\n  a -- b -- c -- d;\n  a -- d;\n}\n";

#[test]
fn test_render_square() {
    let output = render(SQUARE).unwrap();
    assert_eq!(
        output,
        "a----b----c----d\n|              |\nO--------------O"
    );
}

#[test]
fn test_render_with_style_keeps_geometry() {
    let ascii = render_with_style(SQUARE, CharacterSet::Ascii).unwrap();
    let unicode = render_with_style(SQUARE, CharacterSet::Unicode).unwrap();

    let widths = |text: &str| text.lines().map(|l| l.chars().count()).collect::<Vec<_>>();
    assert_eq!(widths(&ascii), widths(&unicode));
    assert!(unicode.contains('●'));
    assert!(!unicode.contains('O'));
}

#[test]
fn test_render_matrix() {
    let output = render_matrix(SQUARE).unwrap();
    assert_eq!(
        output,
        "  | a b c d\n--|---------\na | 0 1 0 1\nb | 1 0 1 0\nc | 0 1 0 1\nd | 1 0 1 0"
    );
}

#[test]
fn test_parse_then_render_with_components() {
    let graph = parse(SQUARE).unwrap();
    let plan = EdgeLayoutPlanner::new().plan(&graph);
    assert_eq!(plan.lane_count(), 1);

    let lines = DiagramRenderer::new().render_with_plan(&graph, &plan).unwrap();
    assert_eq!(lines.join("\n"), render(SQUARE).unwrap());
}

#[test]
fn test_shortest_path_outcomes() {
    let found = shortest_path(SQUARE, 'a', 'c').unwrap();
    assert_eq!(found, PathOutcome::Found(vec!['a', 'b', 'c']));
    assert_eq!(found.hops(), Some(2));

    let unknown = shortest_path(SQUARE, 'a', 'q').unwrap();
    assert_eq!(unknown, PathOutcome::UnknownVertex('q'));

    let same = shortest_path(SQUARE, 'd', 'd').unwrap();
    assert_eq!(same.to_string(), "d");
}

#[test]
fn test_sample_graph_paths() {
    let graph = sample_graph();
    assert_eq!(graph.shortest_path('A', 'F').to_string(), "A->D->H->F");
    assert_eq!(graph.shortest_path('E', 'G').to_string(), "E->D->H->G");
    assert_eq!(
        graph.shortest_path('I', 'J'),
        PathOutcome::Unreachable { from: 'I', to: 'J' }
    );
}

#[test]
fn test_build_graph_by_hand() {
    let mut graph = Graph::new();
    let a = graph.create_vertex('A');
    let b = graph.create_vertex('B');
    let c = graph.create_vertex('C');
    graph.link(a, b).unwrap();
    graph.link(b, c).unwrap();

    assert_eq!(graph.adjacent(b), vec![a, c]);
    assert_eq!(graph.shortest_path('A', 'C').to_string(), "A->B->C");
    assert_eq!(DiagramRenderer::new().render(&graph).unwrap(), vec!["A----B----C"]);

    graph.clear();
    assert!(graph.is_empty());
    assert!(DiagramRenderer::new().render(&graph).unwrap().is_empty());
}

#[test]
fn test_invalid_documents() {
    assert!(render("").is_err());
    assert!(render("graph g {\n}\n").is_err());
    assert!(parse("digraph g {\n  a -- b;\n}").is_err());
    assert!(render_matrix("graph g {\n  a -- b --;\n}").is_err());
}
