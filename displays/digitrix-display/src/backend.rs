//! Display backend trait
//!
//! Defines the interface the application uses to paint the screen.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
}

/// Display backend trait
///
/// Provides a hardware-agnostic interface for buffered pixel displays.
/// Coordinates are in pixels with the origin at the top-left corner.
/// Drawing operations only touch the local buffer; `flush` transfers it.
pub trait DisplayBackend {
    /// Clear the whole buffer to the background color
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw a string with its top-left corner at (`x`, `y`)
    fn draw_text(&mut self, x: u16, y: u16, text: &str) -> Result<(), DisplayError>;

    /// Draw a single character with its top-left corner at (`x`, `y`)
    fn draw_char(&mut self, x: u16, y: u16, ch: char) -> Result<(), DisplayError>;

    /// Draw a one-pixel rectangle outline
    fn draw_rect(&mut self, x: u16, y: u16, width: u16, height: u16) -> Result<(), DisplayError>;

    /// Send the buffer to the panel
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Get pixel dimensions as (width, height)
    fn pixel_dimensions(&self) -> (u16, u16);
}
