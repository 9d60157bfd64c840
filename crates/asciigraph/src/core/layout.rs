//! Core layout trait
//!
//! A layout algorithm derives drawing positions from a graph once per render
//! pass. Its output is a plain value handed to the renderer.

use anyhow::Result;

use super::Graph;

/// Core trait for layout algorithms
///
/// # Example
/// ```
/// use asciigraph::core::{Graph, LayoutAlgorithm};
/// use asciigraph::plugins::ascii::EdgeLayoutPlanner;
///
/// let graph = Graph::new();
/// let plan = EdgeLayoutPlanner::new().layout(&graph).unwrap();
/// assert_eq!(plan.rows(), 0);
/// ```
pub trait LayoutAlgorithm: Send + Sync {
    /// The output type of this layout algorithm
    type Output;

    /// Compute the layout for `graph`
    fn layout(&self, graph: &Graph) -> Result<Self::Output>;

    /// Get the name of this layout algorithm
    fn name(&self) -> &'static str;

    /// Get the version of this layout algorithm
    fn version(&self) -> &'static str;
}
