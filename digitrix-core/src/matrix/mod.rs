//! 5x5 LED matrix
//!
//! Digit glyph table, color encoding and the renderer that turns a digit
//! into a full frame for the addressable LED chain.

pub mod color;
pub mod patterns;
pub mod renderer;

pub use color::Color;
pub use patterns::{pattern_for, CellIndex, Digit, CELL_COUNT};
pub use renderer::{FrameBuffer, MatrixRenderer};
