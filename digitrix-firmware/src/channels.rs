//! Inter-task communication channels

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use digitrix_core::input::InputEvent;

/// Channel capacity for button edges
const INPUT_CHANNEL_SIZE: usize = 8;

/// Button edges from the edge tasks, consumed only by the control task
pub static INPUT_CHANNEL: Channel<CriticalSectionRawMutex, InputEvent, INPUT_CHANNEL_SIZE> =
    Channel::new();
