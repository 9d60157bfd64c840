//! Core renderer trait for graph output

use anyhow::Result;

use super::Graph;

/// Core trait for graph renderers
///
/// Renderers return raw output lines; joining and framing are left to the
/// caller.
///
/// # Example
/// ```
/// use asciigraph::core::{Graph, Renderer};
/// use asciigraph::plugins::ascii::DiagramRenderer;
///
/// let mut graph = Graph::new();
/// graph.create_vertex('A');
/// graph.create_vertex('B');
/// graph.link(0, 1).unwrap();
/// let lines = DiagramRenderer::new().render(&graph).unwrap();
/// assert_eq!(lines, vec!["A----B".to_string()]);
/// ```
pub trait Renderer: Send + Sync {
    /// The output type of this renderer
    type Output;

    /// Render the graph into the output format
    fn render(&self, graph: &Graph) -> Result<Self::Output>;

    /// Get the name of this renderer
    fn name(&self) -> &'static str;

    /// Get the version of this renderer
    fn version(&self) -> &'static str;

    /// Get the supported output format
    fn format(&self) -> &'static str;
}
