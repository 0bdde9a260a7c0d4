//! Addressable LED chain trait

/// Sink for framed pixel words of an addressable LED chain
///
/// Each call transmits one word to the next LED in physical chain order.
/// Words are already framed for the wire: the 24-bit GRB color occupies
/// bits 31..8 and the low byte is padding.
///
/// Transmission is blocking and has no failure path.
pub trait PixelSink {
    /// Transmit one framed pixel word
    fn put_word(&mut self, word: u32);
}
