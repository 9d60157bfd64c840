//! Edge lane planning
//!
//! Vertices sit on a single header row, one column each. An edge between
//! neighbouring columns is drawn inside the header. Every other edge gets a
//! lane: lane `k` draws its horizontal stroke on row `2k + 1`, and its two
//! endpoint columns carry vertical strokes on all rows above that.
//!
//! Lanes are handed out by increasing span so short edges sit closest to the
//! header; equal spans keep their row-major discovery order.

use anyhow::Result;
use tracing::{debug, span, trace, Level};

use crate::core::{Edge, Graph, LayoutAlgorithm, VertexIndex};

/// An edge that owns a lane in the diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutEdge {
    pub start: VertexIndex,
    pub end: VertexIndex,
    pub lane: usize,
}

impl LayoutEdge {
    /// Row carrying this edge's horizontal stroke
    pub fn row(&self) -> usize {
        2 * self.lane + 1
    }

    pub fn span(&self) -> usize {
        self.end - self.start
    }

    /// True if `column` lies on the horizontal stroke, endpoints included
    pub fn covers(&self, column: usize) -> bool {
        (self.start..=self.end).contains(&column)
    }

    /// True if `column` is one of the endpoints
    pub fn touches(&self, column: usize) -> bool {
        self.start == column || self.end == column
    }
}

/// Lane assignment for one render pass
///
/// Built once per render and passed to the renderer by reference; nothing in
/// it outlives the pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanePlan {
    /// Indexed by lane
    edges: Vec<LayoutEdge>,
    /// Lanes of the edges ending in each column, ascending
    column_lanes: Vec<Vec<usize>>,
}

impl LanePlan {
    fn new(columns: usize, edges: Vec<LayoutEdge>) -> Self {
        let mut column_lanes = vec![Vec::new(); columns];
        for edge in &edges {
            column_lanes[edge.start].push(edge.lane);
            column_lanes[edge.end].push(edge.lane);
        }
        Self {
            edges,
            column_lanes,
        }
    }

    /// Lane-owning edges, ordered by lane
    pub fn edges(&self) -> &[LayoutEdge] {
        &self.edges
    }

    pub fn lane_count(&self) -> usize {
        self.edges.len()
    }

    /// Canvas height below the header
    pub fn rows(&self) -> usize {
        2 * self.edges.len()
    }

    /// Number of vertex columns
    pub fn columns(&self) -> usize {
        self.column_lanes.len()
    }

    /// Edge whose horizontal stroke is drawn on `row`
    pub fn active_edge(&self, row: usize) -> Option<&LayoutEdge> {
        if row % 2 == 0 {
            return None;
        }
        self.edges.get(row / 2)
    }

    /// Lanes of the edges ending in `column`
    pub fn column_lanes(&self, column: usize) -> &[usize] {
        self.column_lanes
            .get(column)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// True if an edge ending in `column` has its stroke row below `row`,
    /// so its vertical stroke passes through `row`
    pub fn has_vertical_below(&self, column: usize, row: usize) -> bool {
        self.column_lanes(column)
            .last()
            .is_some_and(|&lane| 2 * lane + 1 > row)
    }
}

/// Assigns lanes to the edges that skip over vertex columns
pub struct EdgeLayoutPlanner;

impl EdgeLayoutPlanner {
    pub fn new() -> Self {
        Self
    }

    /// Compute the lane plan for `graph`
    pub fn plan(&self, graph: &Graph) -> LanePlan {
        let layout_span = span!(
            Level::DEBUG,
            "plan_lanes",
            vertex_count = graph.vertex_count()
        );
        let _enter = layout_span.enter();

        let mut spanning: Vec<Edge> = graph.edges().filter(Edge::needs_lane).collect();
        // stable: equal spans keep discovery order
        spanning.sort_by_key(Edge::span);

        let edges: Vec<LayoutEdge> = spanning
            .into_iter()
            .enumerate()
            .map(|(lane, edge)| {
                trace!(start = edge.start, end = edge.end, lane, "Assigned lane");
                LayoutEdge {
                    start: edge.start,
                    end: edge.end,
                    lane,
                }
            })
            .collect();

        debug!(lane_count = edges.len(), "Planned edge lanes");
        LanePlan::new(graph.vertex_count(), edges)
    }
}

impl Default for EdgeLayoutPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutAlgorithm for EdgeLayoutPlanner {
    type Output = LanePlan;

    fn layout(&self, graph: &Graph) -> Result<Self::Output> {
        Ok(self.plan(graph))
    }

    fn name(&self) -> &'static str {
        "lanes"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }
}
