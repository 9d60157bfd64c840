//! Tests for logging functionality
//!
//! These tests verify that logging initialization works correctly
//! with different configurations.

use asciigraph::core::logging::{init_logging, LogFormat};
use std::str::FromStr;

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str("compact").unwrap(), LogFormat::Compact);
    assert_eq!(LogFormat::from_str("pretty").unwrap(), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str("json").unwrap(), LogFormat::Json);
    assert_eq!(LogFormat::from_str("JSON").unwrap(), LogFormat::Json);
    assert!(LogFormat::from_str("invalid").is_err());
}

#[test]
fn test_log_format_variants() {
    assert_eq!(LogFormat::variants(), &["compact", "pretty", "json"]);
}

#[test]
fn test_init_logging_with_levels_and_formats() {
    // Only the first call installs a subscriber; the rest must fail gracefully
    let _ = init_logging(Some("trace"), Some("compact"));
    let _ = init_logging(Some("debug"), Some("pretty"));
    let _ = init_logging(Some("warn"), Some("json"));
    let _ = init_logging(Some("off"), None);
    let _ = init_logging(None, None);
}

#[test]
fn test_init_logging_invalid_format() {
    let result = init_logging(Some("info"), Some("invalid_format"));
    assert!(result.is_err());
}

#[test]
fn test_pipeline_runs_under_trace_logging() {
    let _ = init_logging(Some("trace"), Some("compact"));

    let output = asciigraph::render("graph g {\n  a -- b -- c;\n  a -- c;\n}").unwrap();
    assert_eq!(output, "a----b----c\n|         |\nO---------O");

    let outcome = asciigraph::sample_graph().shortest_path('A', 'H');
    assert_eq!(outcome.to_string(), "A->D->H");
}
