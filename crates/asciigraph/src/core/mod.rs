//! Core abstractions for graph processing
//!
//! The graph store and path finder live here together with the traits that
//! parsers, layout algorithms and renderers implement.

pub mod chumsky_utils;
mod detector;
mod error;
mod fixtures;
mod graph;
mod layout;
pub mod logging;
mod parser;
mod path;
mod renderer;
mod types;

pub use detector::*;
pub use error::*;
pub use fixtures::*;
pub use graph::*;
pub use layout::*;
pub use logging::*;
pub use parser::*;
pub use path::*;
pub use renderer::*;
pub use types::*;
