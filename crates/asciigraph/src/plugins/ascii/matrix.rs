//! Adjacency matrix renderer
//!
//! ```text
//!   | A B C
//! --|-------
//! A | 0 1 1
//! B | 1 0 0
//! C | 1 0 0
//! ```

use anyhow::Result;
use tracing::{debug, span, Level};

use crate::core::{Graph, Renderer};

/// Plain adjacency matrix dump
pub struct MatrixRenderer;

impl MatrixRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MatrixRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for MatrixRenderer {
    type Output = Vec<String>;

    fn render(&self, graph: &Graph) -> Result<Self::Output> {
        let render_span = span!(
            Level::INFO,
            "render_matrix",
            vertex_count = graph.vertex_count()
        );
        let _enter = render_span.enter();

        if graph.is_empty() {
            return Ok(Vec::new());
        }

        let mut lines = Vec::with_capacity(graph.vertex_count() + 2);

        let labels: Vec<String> = graph.vertices().iter().map(char::to_string).collect();
        lines.push(format!("  | {}", labels.join(" ")));
        lines.push(format!("--|-{}", "--".repeat(graph.vertex_count())));

        for (vertex, row) in graph.vertices().iter().zip(graph.matrix()) {
            let cells: Vec<&str> = row
                .iter()
                .map(|&linked| if linked { "1" } else { "0" })
                .collect();
            lines.push(format!("{} | {}", vertex, cells.join(" ")));
        }

        debug!(line_count = lines.len(), "Matrix rendered");
        Ok(lines)
    }

    fn name(&self) -> &'static str {
        "matrix"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn format(&self) -> &'static str {
        "text"
    }
}
