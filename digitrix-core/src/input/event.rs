//! Events delivered to the controller

use super::buttons::ButtonId;

/// Input events, processed in arrival order by a single consumer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Falling edge seen on a button line
    ButtonEdge {
        id: ButtonId,
        /// Monotonic time of the edge
        timestamp_us: u64,
    },
    /// Byte received on the serial line
    Char(u8),
}

impl InputEvent {
    /// Build an edge event
    pub const fn edge(id: ButtonId, timestamp_us: u64) -> Self {
        InputEvent::ButtonEdge { id, timestamp_us }
    }

    /// Check if this event came from a button
    pub fn is_button_event(&self) -> bool {
        matches!(self, InputEvent::ButtonEdge { .. })
    }

    /// Check if this event is a serial digit
    pub fn is_digit(&self) -> bool {
        matches!(self, InputEvent::Char(c) if c.is_ascii_digit())
    }
}
