//! Per-button toggle state machine

use super::debounce::DebounceGate;

/// Number of buttons on the board
pub const BUTTON_COUNT: usize = 2;

/// Button identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    /// Button A, drives the first indicator
    A,
    /// Button B, drives the second indicator
    B,
}

impl ButtonId {
    /// Both buttons in index order
    pub const ALL: [ButtonId; BUTTON_COUNT] = [ButtonId::A, ButtonId::B];

    /// Slot used for per-button arrays
    pub const fn index(self) -> usize {
        match self {
            ButtonId::A => 0,
            ButtonId::B => 1,
        }
    }
}

/// Which edges share a debounce timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceScope {
    /// Each button has its own gate
    #[default]
    PerButton,
    /// One gate for both buttons; a press on A also blocks B within the window
    Shared,
}

/// Toggle state and debounce gates for both buttons
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonMachine {
    states: [bool; BUTTON_COUNT],
    gates: [DebounceGate; BUTTON_COUNT],
    scope: DebounceScope,
}

impl ButtonMachine {
    /// Both buttons off, nothing accepted yet
    pub fn new(window_us: u64, scope: DebounceScope) -> Self {
        Self {
            states: [false; BUTTON_COUNT],
            gates: [DebounceGate::new(window_us); BUTTON_COUNT],
            scope,
        }
    }

    /// Handle a falling edge on `id` at `now_us`
    ///
    /// Returns the new state if the edge was accepted, `None` for a bounce.
    pub fn on_edge(&mut self, id: ButtonId, now_us: u64) -> Option<bool> {
        let gate = match self.scope {
            DebounceScope::PerButton => &mut self.gates[id.index()],
            DebounceScope::Shared => &mut self.gates[0],
        };

        if !gate.accept_edge(now_us) {
            return None;
        }

        let state = &mut self.states[id.index()];
        *state = !*state;
        Some(*state)
    }

    /// Current toggle state
    pub fn state(&self, id: ButtonId) -> bool {
        self.states[id.index()]
    }

    /// Debounce scope in use
    pub fn scope(&self) -> DebounceScope {
        self.scope
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::DEFAULT_DEBOUNCE_US;

    fn machine(scope: DebounceScope) -> ButtonMachine {
        ButtonMachine::new(DEFAULT_DEBOUNCE_US, scope)
    }

    #[test]
    fn test_initial_state() {
        let m = machine(DebounceScope::PerButton);
        assert!(!m.state(ButtonId::A));
        assert!(!m.state(ButtonId::B));
    }

    #[test]
    fn test_toggle_only_pressed_button() {
        let mut m = machine(DebounceScope::PerButton);
        assert_eq!(m.on_edge(ButtonId::A, 1_000_000), Some(true));
        assert!(m.state(ButtonId::A));
        assert!(!m.state(ButtonId::B));

        assert_eq!(m.on_edge(ButtonId::A, 2_000_000), Some(false));
        assert!(!m.state(ButtonId::A));
        assert!(!m.state(ButtonId::B));
    }

    #[test]
    fn test_double_press_within_window() {
        let mut m = machine(DebounceScope::PerButton);
        assert_eq!(m.on_edge(ButtonId::A, 1_000_000), Some(true));
        assert_eq!(m.on_edge(ButtonId::A, 1_100_000), None);
        assert!(m.state(ButtonId::A));
    }

    #[test]
    fn test_per_button_gates_are_independent() {
        let mut m = machine(DebounceScope::PerButton);
        assert_eq!(m.on_edge(ButtonId::A, 1_000_000), Some(true));
        assert_eq!(m.on_edge(ButtonId::B, 1_050_000), Some(true));
    }

    #[test]
    fn test_shared_gate_blocks_other_button() {
        let mut m = machine(DebounceScope::Shared);
        assert_eq!(m.scope(), DebounceScope::Shared);
        assert_eq!(m.on_edge(ButtonId::A, 1_000_000), Some(true));
        assert_eq!(m.on_edge(ButtonId::B, 1_050_000), None);
        assert!(!m.state(ButtonId::B));
        assert_eq!(m.on_edge(ButtonId::B, 1_300_000), Some(true));
    }

    #[test]
    fn test_index() {
        assert_eq!(ButtonId::A.index(), 0);
        assert_eq!(ButtonId::B.index(), 1);
        assert_eq!(ButtonId::ALL, [ButtonId::A, ButtonId::B]);
    }
}
