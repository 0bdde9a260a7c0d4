//! OLED screen layouts
//!
//! Both screens start from a cleared buffer and end with a flush, so each
//! repaint fully replaces whatever was shown before.

use core::fmt::Write;

use digitrix_display::{DisplayBackend, DisplayError};
use heapless::String;

use crate::config::MAX_NAME_LEN;

/// Top-left corner of the button status line
pub const STATUS_POS: (u16, u16) = (8, 10);

/// Box around the received character: x, y, width, height
pub const CHAR_BOX: (u16, u16, u16, u16) = (54, 4, 20, 20);

/// Top-left corner of the received character
pub const CHAR_POS: (u16, u16) = (60, 10);

/// Top-left corner of the serial screen label
pub const LABEL_POS: (u16, u16) = (50, 48);

/// Capacity of a status line: name, ": " and "OFF"
pub const STATUS_LEN: usize = MAX_NAME_LEN + 5;

/// Build "<name>: ON" or "<name>: OFF"
pub fn status_line(name: &str, on: bool) -> String<STATUS_LEN> {
    let mut line = String::new();
    // Only overflows for names longer than MAX_NAME_LEN
    let _ = write!(line, "{}: {}", name, if on { "ON" } else { "OFF" });
    line
}

/// Show one button's state, replacing the previous screen
pub fn paint_button_status<D: DisplayBackend>(
    display: &mut D,
    name: &str,
    on: bool,
) -> Result<(), DisplayError> {
    display.clear()?;
    display.draw_text(STATUS_POS.0, STATUS_POS.1, &status_line(name, on))?;
    display.flush()
}

/// Show a received character in a box above the label
pub fn paint_received_char<D: DisplayBackend>(
    display: &mut D,
    ch: char,
    label: &str,
) -> Result<(), DisplayError> {
    let (x, y, width, height) = CHAR_BOX;
    display.clear()?;
    display.draw_rect(x, y, width, height)?;
    display.draw_char(CHAR_POS.0, CHAR_POS.1, ch)?;
    display.draw_text(LABEL_POS.0, LABEL_POS.1, label)?;
    display.flush()
}

/// Blank the panel
pub fn paint_blank<D: DisplayBackend>(display: &mut D) -> Result<(), DisplayError> {
    display.clear()?;
    display.flush()
}

#[cfg(test)]
pub(crate) mod mock {
    extern crate std;

    use std::string::String;
    use std::vec::Vec;

    use super::*;

    /// One recorded display call
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Op {
        Clear,
        Text(u16, u16, String),
        Char(u16, u16, char),
        Rect(u16, u16, u16, u16),
        Flush,
    }

    /// Display that records every call
    #[derive(Default)]
    pub struct RecordingDisplay {
        pub ops: Vec<Op>,
        /// Fail every flush with a communication error
        pub fail_flush: bool,
    }

    impl RecordingDisplay {
        /// Calls since the last clear, i.e. what is on screen now
        pub fn screen(&self) -> &[Op] {
            let start = self
                .ops
                .iter()
                .rposition(|op| *op == Op::Clear)
                .unwrap_or(0);
            &self.ops[start..]
        }

        pub fn flush_count(&self) -> usize {
            self.ops.iter().filter(|op| **op == Op::Flush).count()
        }
    }

    impl DisplayBackend for RecordingDisplay {
        fn clear(&mut self) -> Result<(), DisplayError> {
            self.ops.push(Op::Clear);
            Ok(())
        }

        fn draw_text(&mut self, x: u16, y: u16, text: &str) -> Result<(), DisplayError> {
            self.ops.push(Op::Text(x, y, text.into()));
            Ok(())
        }

        fn draw_char(&mut self, x: u16, y: u16, ch: char) -> Result<(), DisplayError> {
            self.ops.push(Op::Char(x, y, ch));
            Ok(())
        }

        fn draw_rect(
            &mut self,
            x: u16,
            y: u16,
            width: u16,
            height: u16,
        ) -> Result<(), DisplayError> {
            self.ops.push(Op::Rect(x, y, width, height));
            Ok(())
        }

        fn flush(&mut self) -> Result<(), DisplayError> {
            if self.fail_flush {
                return Err(DisplayError::Communication);
            }
            self.ops.push(Op::Flush);
            Ok(())
        }

        fn pixel_dimensions(&self) -> (u16, u16) {
            (128, 64)
        }
    }
}
