//! DOT input: a small undirected subset of Graphviz syntax

pub mod chumsky_parser;
mod detector;
mod parser;

pub use detector::*;
pub use parser::*;
