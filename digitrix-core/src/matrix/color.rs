//! Pixel color encoding
//!
//! Callers name channels red/green/blue; the LED chain expects green, red,
//! blue on the wire. No gamma or color-space correction is applied.

/// Raw 8-bit channel intensities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Color {
    /// All channels off
    pub const OFF: Self = Self::new(0, 0, 0);

    /// Dim red, the color digits are drawn in unless configured otherwise
    pub const DEFAULT: Self = Self::new(20, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Encode as a 24-bit GRB value (green in bits 23..16)
    pub const fn grb(self) -> u32 {
        ((self.g as u32) << 16) | ((self.r as u32) << 8) | (self.b as u32)
    }
}

/// Frame a 24-bit GRB value for transmission
///
/// The chain shifts out the top 24 bits of each word, so the color is moved
/// up by one byte and the low byte is left as padding.
pub const fn wire_word(grb: u32) -> u32 {
    grb << 8
}
