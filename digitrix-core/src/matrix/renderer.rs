//! LED matrix renderer
//!
//! Owns the frame buffer for the 25-cell chain. Every render starts from an
//! all-off frame, so nothing from the previous digit can survive.

use crate::traits::PixelSink;

use super::color::{wire_word, Color};
use super::patterns::{pattern_for, Digit, CELL_COUNT};

/// Encoded GRB value per cell, index-aligned with the chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    cells: [u32; CELL_COUNT],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create an all-off frame
    pub const fn new() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Turn every cell off
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Replace the frame with `digit` drawn in `color`
    pub fn paint(&mut self, digit: Digit, color: Color) {
        self.clear();
        let encoded = color.grb();
        for &cell in pattern_for(digit) {
            self.cells[cell as usize] = encoded;
        }
    }

    /// Encoded value of one cell
    pub fn get(&self, index: usize) -> Option<u32> {
        self.cells.get(index).copied()
    }

    /// All cells in chain order
    pub fn cells(&self) -> &[u32; CELL_COUNT] {
        &self.cells
    }

    /// Indices of cells that are not off
    pub fn lit_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &value)| value != 0)
            .map(|(index, _)| index)
    }
}

/// Renders digits onto the LED chain
pub struct MatrixRenderer<S> {
    sink: S,
    frame: FrameBuffer,
    digit: Option<Digit>,
}

impl<S: PixelSink> MatrixRenderer<S> {
    /// Create a renderer with an all-off frame
    ///
    /// Nothing is transmitted until the first render.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            frame: FrameBuffer::new(),
            digit: None,
        }
    }

    /// Draw `digit` in `color` and transmit the full frame
    pub fn render_digit(&mut self, digit: Digit, color: Color) {
        self.frame.paint(digit, color);
        self.digit = Some(digit);
        self.transmit();
    }

    /// Turn every LED off and transmit
    pub fn blank(&mut self) {
        self.frame.clear();
        self.digit = None;
        self.transmit();
    }

    /// Send all cells in chain order, one framed word each
    fn transmit(&mut self) {
        for &grb in self.frame.cells.iter() {
            self.sink.put_word(wire_word(grb));
        }
    }

    /// Current frame
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Digit currently shown, if any
    pub fn selected_digit(&self) -> Option<Digit> {
        self.digit
    }

    /// Access the underlying sink
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use super::*;
    use proptest::prelude::*;

    /// Sink recording every transmitted word
    #[derive(Default)]
    struct RecordingSink {
        words: Vec<u32>,
    }

    impl PixelSink for RecordingSink {
        fn put_word(&mut self, word: u32) {
            self.words.push(word);
        }
    }

    fn digit(value: u8) -> Digit {
        Digit::new(value).unwrap()
    }

    #[test]
    fn test_render_three() {
        let mut renderer = MatrixRenderer::new(RecordingSink::default());
        renderer.render_digit(digit(3), Color::DEFAULT);

        let lit: Vec<usize> = renderer.frame().lit_cells().collect();
        assert_eq!(lit, [1, 2, 3, 8, 11, 12, 13, 18, 21, 22, 23]);
        for index in lit {
            assert_eq!(renderer.frame().get(index), Some(Color::DEFAULT.grb()));
        }
        assert_eq!(renderer.selected_digit(), Some(digit(3)));
    }

    #[test]
    fn test_transmits_all_cells_in_order() {
        let mut renderer = MatrixRenderer::new(RecordingSink::default());
        renderer.render_digit(digit(1), Color::new(1, 2, 3));

        let words = &renderer.sink().words;
        assert_eq!(words.len(), CELL_COUNT);
        for (index, &word) in words.iter().enumerate() {
            assert_eq!(word & 0xFF, 0, "low byte is padding");
            assert_eq!(word, renderer.frame().cells()[index] << 8);
        }
        // First lit cell of digit 1 is index 2
        assert_eq!(words[0], 0);
        assert_eq!(words[2], 0x02_01_03_00);
    }

    #[test]
    fn test_nothing_sent_before_first_render() {
        let renderer = MatrixRenderer::new(RecordingSink::default());
        assert!(renderer.sink().words.is_empty());
        assert_eq!(renderer.frame(), &FrameBuffer::new());
        assert_eq!(renderer.selected_digit(), None);
    }

    #[test]
    fn test_blank() {
        let mut renderer = MatrixRenderer::new(RecordingSink::default());
        renderer.render_digit(digit(8), Color::DEFAULT);
        renderer.blank();

        assert_eq!(renderer.frame().lit_cells().count(), 0);
        assert_eq!(renderer.selected_digit(), None);
        let words = &renderer.sink().words;
        assert_eq!(words.len(), 2 * CELL_COUNT);
        assert!(words[CELL_COUNT..].iter().all(|&w| w == 0));
    }

    #[test]
    fn test_black_digit_is_dark() {
        let mut renderer = MatrixRenderer::new(RecordingSink::default());
        renderer.render_digit(digit(8), Color::OFF);
        assert_eq!(renderer.frame().lit_cells().count(), 0);
    }

    proptest! {
        #[test]
        fn prop_render_is_idempotent(d in 0u8..10, r: u8, g: u8, b: u8) {
            let color = Color::new(r, g, b);
            let mut renderer = MatrixRenderer::new(RecordingSink::default());

            renderer.render_digit(digit(d), color);
            let first = renderer.frame().clone();
            renderer.render_digit(digit(d), color);

            prop_assert_eq!(renderer.frame(), &first);
            let words = &renderer.sink().words;
            prop_assert_eq!(&words[..CELL_COUNT], &words[CELL_COUNT..]);
        }

        #[test]
        fn prop_no_residue_from_previous_digit(d1 in 0u8..10, d2 in 0u8..10) {
            let mut renderer = MatrixRenderer::new(RecordingSink::default());
            renderer.render_digit(digit(d1), Color::DEFAULT);
            renderer.render_digit(digit(d2), Color::DEFAULT);

            let expected = pattern_for(digit(d2));
            for index in renderer.frame().lit_cells() {
                prop_assert!(expected.contains(&(index as u8)));
            }
            prop_assert_eq!(renderer.frame().lit_cells().count(), expected.len());
        }
    }
}
