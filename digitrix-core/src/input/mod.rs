//! Button input handling
//!
//! Edges arrive as timestamped events from the firmware. The debounce gate
//! filters bounces and the button machine keeps one toggle state per button.

mod buttons;
mod debounce;
mod event;

pub use buttons::{ButtonId, ButtonMachine, DebounceScope, BUTTON_COUNT};
pub use debounce::{DebounceGate, DEFAULT_DEBOUNCE_US};
pub use event::InputEvent;
