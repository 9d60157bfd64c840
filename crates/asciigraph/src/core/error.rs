//! Core error types for graph processing
//!
//! Every failure in the store, the renderer and the parser is a value of
//! [`GraphError`]. Shortest-path misses are not errors; see
//! [`PathOutcome`](crate::core::PathOutcome).

use thiserror::Error;

/// Core error types for graph processing
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Index out of range: vertex {index} does not exist (vertex count {vertex_count})")]
    IndexOutOfRange { index: usize, vertex_count: usize },

    #[error("Invalid row {row}: the diagram has {rows} edge rows")]
    RowOutOfRange { row: usize, rows: usize },

    #[error("Invalid column {column}: the diagram has {columns} vertex columns")]
    ColumnOutOfRange { column: usize, columns: usize },

    #[error("Parse error: {message} at line {line}, column {column}")]
    ParseError {
        message: String,
        line: usize,
        column: usize,
    },

    #[error("Render error: {message}")]
    RenderError { message: String },

    #[error("Detection error: {message}")]
    DetectionError { message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl GraphError {
    /// Create a new out-of-range index error
    pub fn index_out_of_range(index: usize, vertex_count: usize) -> Self {
        Self::IndexOutOfRange {
            index,
            vertex_count,
        }
    }

    /// Create a new out-of-range row error
    pub fn row_out_of_range(row: usize, rows: usize) -> Self {
        Self::RowOutOfRange { row, rows }
    }

    /// Create a new out-of-range column error
    pub fn column_out_of_range(column: usize, columns: usize) -> Self {
        Self::ColumnOutOfRange { column, columns }
    }

    /// Create a new parse error
    pub fn parse_error(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::ParseError {
            message: message.into(),
            line,
            column,
        }
    }

    /// Create a new render error
    pub fn render_error(message: impl Into<String>) -> Self {
        Self::RenderError {
            message: message.into(),
        }
    }

    /// Create a new detection error
    pub fn detection_error(message: impl Into<String>) -> Self {
        Self::DetectionError {
            message: message.into(),
        }
    }

    /// True for the per-cell bounds errors raised by the canvas renderer
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(
            self,
            Self::RowOutOfRange { .. } | Self::ColumnOutOfRange { .. }
        )
    }
}
