//! Plugin implementations
//!
//! `dot` reads graphs, `ascii` draws them, and the orchestrator wires the
//! two together.

pub mod ascii;
pub mod dot;
pub mod orchestrator;

pub use ascii::*;
pub use dot::*;
pub use orchestrator::*;
