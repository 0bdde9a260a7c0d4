//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod indicator;
pub mod pixel;

pub use indicator::IndicatorOutput;
pub use pixel::PixelSink;
