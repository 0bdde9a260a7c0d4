//! Timestamp based edge debouncing

/// Minimum spacing between two accepted edges, in microseconds
pub const DEFAULT_DEBOUNCE_US: u64 = 200_000;

/// Rejects edges that follow the last accepted edge too closely
///
/// The last accepted timestamp starts at zero, so edges during the first
/// window after boot are rejected as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceGate {
    window_us: u64,
    last_accepted_us: u64,
}

impl Default for DebounceGate {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_US)
    }
}

impl DebounceGate {
    /// Create a gate with the given window
    pub const fn new(window_us: u64) -> Self {
        Self {
            window_us,
            last_accepted_us: 0,
        }
    }

    /// Decide whether an edge at `now_us` is a real press
    ///
    /// Accepts iff strictly more than the window has elapsed since the last
    /// accepted edge. State only changes on acceptance. A timestamp older
    /// than the last accepted one counts as zero elapsed time.
    pub fn accept_edge(&mut self, now_us: u64) -> bool {
        if now_us.saturating_sub(self.last_accepted_us) > self.window_us {
            self.last_accepted_us = now_us;
            true
        } else {
            false
        }
    }

    /// Timestamp of the last accepted edge
    pub fn last_accepted_us(&self) -> u64 {
        self.last_accepted_us
    }

    /// Configured window
    pub fn window_us(&self) -> u64 {
        self.window_us
    }
}
