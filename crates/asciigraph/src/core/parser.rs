//! Core parser trait for graph descriptions
//!
//! A parser turns a text document into `create_vertex` and `link` calls on a
//! [`Graph`]. It validates the whole document first, so a rejected document
//! leaves the graph untouched.

use anyhow::Result;

use super::Graph;

/// Core trait for graph description parsers
///
/// # Example
/// ```
/// use asciigraph::core::{Graph, Parser};
/// use asciigraph::plugins::dot::DotParser;
///
/// let parser = DotParser::new();
/// let mut graph = Graph::new();
/// parser.parse("graph g {\n a -- b;\n}", &mut graph).unwrap();
/// assert_eq!(graph.vertex_count(), 2);
/// ```
pub trait Parser: Send + Sync {
    /// Parse the document and populate `graph`
    fn parse(&self, input: &str, graph: &mut Graph) -> Result<()>;

    /// Get the name of this parser
    fn name(&self) -> &'static str;

    /// Get the version of this parser
    fn version(&self) -> &'static str;

    /// Check if the input looks like something this parser understands
    fn can_parse(&self, input: &str) -> bool;
}
