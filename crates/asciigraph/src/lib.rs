//! asciigraph - Undirected graphs drawn as ASCII lane diagrams
//!
//! A library for building small undirected graphs, finding shortest paths
//! between their vertices and drawing them as text.
//!
//! # Quick Start
//!
//! ```rust
//! use asciigraph::render;
//!
//! let input = "graph demo {\n  a -- b -- c;\n  a -- c;\n}";
//! let diagram = render(input).unwrap();
//! assert_eq!(diagram, "a----b----c\n|         |\nO---------O");
//! ```
//!
//! # Advanced Usage
//!
//! For more control, use the individual components:
//!
//! ```rust
//! use asciigraph::prelude::*;
//!
//! let mut graph = Graph::new();
//! let a = graph.create_vertex('A');
//! let b = graph.create_vertex('B');
//! let c = graph.create_vertex('C');
//! graph.link(a, c).unwrap();
//! graph.link(b, c).unwrap();
//!
//! // Shortest path by vertex value
//! let path = graph.shortest_path('A', 'B');
//! assert_eq!(path.to_string(), "A->C->B");
//!
//! // Lane plan and diagram
//! let plan = EdgeLayoutPlanner::new().plan(&graph);
//! assert_eq!(plan.rows(), 2);
//! let lines = DiagramRenderer::new().render(&graph).unwrap();
//! assert_eq!(lines[0], "A    B----C");
//! ```

pub mod core;
pub mod plugins;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        CharacterSet, Detector, Glyph, Graph, GraphError, LayoutAlgorithm, Parser, PathFinder,
        PathOutcome, RenderConfig, Renderer, VertexIndex,
    };
    pub use crate::plugins::ascii::{DiagramRenderer, EdgeLayoutPlanner, LanePlan, MatrixRenderer};
    pub use crate::plugins::dot::{DotDetector, DotParser};
}

/// Render a DOT graph as a lane diagram
///
/// Uses the ASCII character set.
///
/// # Example
/// ```rust
/// use asciigraph::render;
///
/// let diagram = render("graph {\n  x -- y;\n}").unwrap();
/// assert_eq!(diagram, "x----y");
/// ```
pub fn render(input: &str) -> anyhow::Result<String> {
    use crate::plugins::orchestrator::Orchestrator;

    let mut orchestrator = Orchestrator::with_dot_plugins();
    orchestrator.register_default_detectors();
    orchestrator.process(input)
}

/// Render a DOT graph with a specific character set
///
/// # Example
/// ```rust
/// use asciigraph::{render_with_style, CharacterSet};
///
/// let input = "graph {\n  a; b;\n  a -- c;\n}";
/// let diagram = render_with_style(input, CharacterSet::Unicode).unwrap();
/// assert!(diagram.contains('●'));
/// ```
pub fn render_with_style(input: &str, style: CharacterSet) -> anyhow::Result<String> {
    use crate::plugins::orchestrator::Orchestrator;

    let orchestrator = Orchestrator::with_dot_plugins_and_style(style);
    let graph = orchestrator.parse(input)?;
    orchestrator.render_diagram(&graph)
}

/// Render a DOT graph as an adjacency matrix
pub fn render_matrix(input: &str) -> anyhow::Result<String> {
    use crate::plugins::orchestrator::Orchestrator;

    let orchestrator = Orchestrator::with_dot_plugins();
    let graph = orchestrator.parse(input)?;
    orchestrator.render_matrix(&graph)
}

/// Parse a DOT graph without rendering
///
/// # Example
/// ```rust
/// use asciigraph::parse;
///
/// let graph = parse("graph {\n  a -- b -- c;\n}").unwrap();
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// ```
pub fn parse(input: &str) -> anyhow::Result<Graph> {
    use crate::core::Parser as _;
    use crate::plugins::dot::DotParser;

    let mut graph = Graph::new();
    DotParser::new().parse(input, &mut graph)?;
    Ok(graph)
}

/// Parse a DOT graph and find the shortest path between two vertex values
///
/// Unknown or unreachable vertices are reported through [`PathOutcome`],
/// only malformed input is an error.
pub fn shortest_path(input: &str, from: char, to: char) -> anyhow::Result<PathOutcome> {
    Ok(parse(input)?.shortest_path(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "graph test {\n  a -- b -- c;\n  c -- d;\n  a -- d;\n}";

    #[test]
    fn test_render() {
        let output = render(INPUT).unwrap();
        assert_eq!(
            output,
            "a----b----c----d\n|              |\nO--------------O"
        );
    }

    #[test]
    fn test_render_with_style_ascii_matches_render() {
        assert_eq!(
            render_with_style(INPUT, CharacterSet::Ascii).unwrap(),
            render(INPUT).unwrap()
        );
    }

    #[test]
    fn test_render_with_style_unicode() {
        let output = render_with_style(INPUT, CharacterSet::Unicode).unwrap();
        assert!(output.starts_with("a────b────c────d"));
        assert!(output.ends_with("●──────────────●"));
    }

    #[test]
    fn test_render_matrix() {
        let output = render_matrix(INPUT).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "  | a b c d");
        assert_eq!(lines[2], "a | 0 1 0 1");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_parse() {
        let graph = parse(INPUT).unwrap();
        assert_eq!(graph.vertices(), &['a', 'b', 'c', 'd']);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_shortest_path() {
        let outcome = shortest_path(INPUT, 'a', 'c').unwrap();
        assert_eq!(outcome.vertices(), Some(&['a', 'b', 'c'][..]));
        assert!(!shortest_path(INPUT, 'a', 'z').unwrap().is_found());
        assert!(shortest_path("graph {", 'a', 'b').is_err());
    }

    #[test]
    fn test_render_rejects_text() {
        assert!(render("hello").is_err());
    }
}
