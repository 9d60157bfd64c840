//! Core type definitions for graph processing
//!
//! Vertex indices, derived edges, diagram glyphs and the character sets
//! used to draw them.

use std::fmt;
use std::str::FromStr;

/// Position of a vertex in the graph's vertex sequence
pub type VertexIndex = usize;

/// Width of the separator printed between two vertex columns
pub const CONNECTOR_WIDTH: usize = 4;

/// Character set for rendering output
///
/// Controls which characters are used for the diagram glyphs. Every glyph is
/// a single terminal column, so both sets produce the same geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum CharacterSet {
    /// `O - + |` with `----` separators
    #[default]
    Ascii,
    /// `● ─ ┼ │` with `────` separators
    Unicode,
}

impl CharacterSet {
    /// Returns true if this character set uses only ASCII
    pub fn is_ascii(&self) -> bool {
        matches!(self, CharacterSet::Ascii)
    }

    /// Character drawn for a glyph
    pub fn glyph(&self, glyph: Glyph) -> char {
        match (self, glyph) {
            (_, Glyph::Blank) => ' ',
            (CharacterSet::Ascii, Glyph::Terminal) => 'O',
            (CharacterSet::Ascii, Glyph::Horizontal) => '-',
            (CharacterSet::Ascii, Glyph::Junction) => '+',
            (CharacterSet::Ascii, Glyph::Vertical) => '|',
            (CharacterSet::Unicode, Glyph::Terminal) => '●',
            (CharacterSet::Unicode, Glyph::Horizontal) => '─',
            (CharacterSet::Unicode, Glyph::Junction) => '┼',
            (CharacterSet::Unicode, Glyph::Vertical) => '│',
        }
    }

    /// Separator printed after a column whose stroke continues to the right
    pub fn connector(&self) -> String {
        self.glyph(Glyph::Horizontal)
            .to_string()
            .repeat(CONNECTOR_WIDTH)
    }

    /// Separator printed after a column whose stroke stops
    pub fn spacer(&self) -> String {
        " ".repeat(CONNECTOR_WIDTH)
    }
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterSet::Ascii => write!(f, "ascii"),
            CharacterSet::Unicode => write!(f, "unicode"),
        }
    }
}

impl FromStr for CharacterSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ascii" => Ok(CharacterSet::Ascii),
            "unicode" => Ok(CharacterSet::Unicode),
            _ => Err(format!("Unknown style: {}. Use 'ascii' or 'unicode'", s)),
        }
    }
}

/// Rendering configuration shared by the diagram and matrix renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderConfig {
    pub style: CharacterSet,
}

impl RenderConfig {
    pub fn new(style: CharacterSet) -> Self {
        Self { style }
    }
}

/// Content of one diagram cell below the vertex header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// End point of the row's horizontal stroke
    Terminal,
    /// Horizontal stroke
    Horizontal,
    /// Horizontal stroke crossing a vertical stroke
    Junction,
    /// Vertical stroke passing through the row
    Vertical,
    /// Nothing drawn
    Blank,
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", CharacterSet::Ascii.glyph(*self))
    }
}

/// An undirected edge derived from the adjacency matrix, `start < end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub start: VertexIndex,
    pub end: VertexIndex,
}

impl Edge {
    /// Create an edge, ordering the endpoints
    pub fn new(a: VertexIndex, b: VertexIndex) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Column distance between the two endpoints
    pub fn span(&self) -> usize {
        self.end - self.start
    }

    /// True if the edge skips at least one vertex column
    pub fn needs_lane(&self) -> bool {
        self.span() > 1
    }

    /// True if `column` is one of the endpoints
    pub fn touches(&self, column: usize) -> bool {
        self.start == column || self.end == column
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}--{}", self.start, self.end)
    }
}
