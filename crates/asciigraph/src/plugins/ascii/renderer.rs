//! ASCII diagram renderer
//!
//! Output is a header row with one column per vertex followed by the rows
//! of the lane plan:
//!
//! ```text
//! A----B    C    D
//! |         |    |
//! O---------O    |
//! |              |
//! O--------------O
//! ```
//!
//! Columns are separated by four characters: a connector when the stroke
//! continues to the next column, blanks otherwise. The separators keep every
//! vertical stroke under its vertex letter.

use anyhow::Result;
use tracing::{debug, info, span, trace, Level};

use super::layout::{EdgeLayoutPlanner, LanePlan};
use crate::core::{CharacterSet, Glyph, Graph, GraphError, RenderConfig, Renderer};

/// ASCII diagram renderer
pub struct DiagramRenderer {
    config: RenderConfig,
}

impl DiagramRenderer {
    pub fn new() -> Self {
        Self::with_config(RenderConfig::default())
    }

    pub fn with_style(style: CharacterSet) -> Self {
        Self::with_config(RenderConfig::new(style))
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn style(&self) -> CharacterSet {
        self.config.style
    }

    /// Vertex row: letters joined by a connector where neighbours are linked
    pub fn header(&self, graph: &Graph) -> String {
        let style = self.config.style;
        let mut line = String::new();
        for (index, vertex) in graph.vertices().iter().enumerate() {
            line.push(*vertex);
            if index + 1 < graph.vertex_count() {
                if graph.is_linked(index, index + 1) {
                    line.push_str(&style.connector());
                } else {
                    line.push_str(&style.spacer());
                }
            }
        }
        line
    }

    /// Glyph at (`row`, `column`) below the header
    pub fn cell(&self, plan: &LanePlan, row: usize, column: usize) -> Result<Glyph, GraphError> {
        if row >= plan.rows() {
            return Err(GraphError::row_out_of_range(row, plan.rows()));
        }
        if column >= plan.columns() {
            return Err(GraphError::column_out_of_range(column, plan.columns()));
        }

        let glyph = match plan.active_edge(row) {
            Some(edge) if edge.touches(column) => Glyph::Terminal,
            Some(edge) if edge.covers(column) => {
                if plan.has_vertical_below(column, row) {
                    Glyph::Junction
                } else {
                    Glyph::Horizontal
                }
            }
            _ if plan.has_vertical_below(column, row) => Glyph::Vertical,
            _ => Glyph::Blank,
        };
        Ok(glyph)
    }

    /// True if the separator after `column` continues the row's stroke
    fn joins_right(plan: &LanePlan, row: usize, column: usize, glyph: Glyph) -> bool {
        match glyph {
            Glyph::Horizontal | Glyph::Junction => true,
            Glyph::Terminal => plan.active_edge(row).is_some_and(|edge| column < edge.end),
            Glyph::Vertical | Glyph::Blank => false,
        }
    }

    /// One canvas row, glyphs and separators
    pub fn render_row(&self, plan: &LanePlan, row: usize) -> Result<String, GraphError> {
        let style = self.config.style;
        let columns = plan.columns();
        let mut line = String::new();

        for column in 0..columns {
            let glyph = self.cell(plan, row, column)?;
            line.push(style.glyph(glyph));
            if column + 1 == columns {
                break;
            }
            if Self::joins_right(plan, row, column, glyph) {
                line.push_str(&style.connector());
            } else {
                line.push_str(&style.spacer());
            }
        }

        trace!(row, line = %line, "Rendered row");
        Ok(line)
    }

    /// Render with an existing lane plan
    pub fn render_with_plan(&self, graph: &Graph, plan: &LanePlan) -> Result<Vec<String>> {
        if graph.is_empty() {
            return Ok(Vec::new());
        }
        if plan.columns() != graph.vertex_count() {
            return Err(GraphError::render_error(format!(
                "lane plan has {} columns but the graph has {} vertices",
                plan.columns(),
                graph.vertex_count()
            ))
            .into());
        }

        let mut lines = Vec::with_capacity(plan.rows() + 1);
        lines.push(self.header(graph));
        for row in 0..plan.rows() {
            lines.push(self.render_row(plan, row)?);
        }
        Ok(lines)
    }
}

impl Default for DiagramRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for DiagramRenderer {
    type Output = Vec<String>;

    fn render(&self, graph: &Graph) -> Result<Self::Output> {
        let render_span = span!(
            Level::INFO,
            "render_diagram",
            vertex_count = graph.vertex_count(),
            style = %self.config.style
        );
        let _enter = render_span.enter();

        let plan = EdgeLayoutPlanner::new().plan(graph);
        debug!(rows = plan.rows(), "Lane plan ready");

        let lines = self.render_with_plan(graph, &plan)?;
        info!(line_count = lines.len(), "Diagram rendered");
        Ok(lines)
    }

    fn name(&self) -> &'static str {
        "diagram"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn format(&self) -> &'static str {
        "ascii"
    }
}
