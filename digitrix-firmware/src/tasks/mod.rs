//! Embassy async tasks
//!
//! Edge tasks only timestamp and forward; everything else happens in the
//! control task, which is the sole owner of the outputs.

pub mod buttons;
pub mod control;

pub use buttons::button_task;
pub use control::{control_task, BoardController, SerialRx};
