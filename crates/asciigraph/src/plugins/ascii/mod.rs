//! ASCII output: lane planning, the diagram canvas and the matrix dump

mod layout;
mod matrix;
mod renderer;

pub use layout::*;
pub use matrix::*;
pub use renderer::*;
