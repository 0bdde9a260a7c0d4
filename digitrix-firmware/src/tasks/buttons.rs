//! Button edge tasks
//!
//! One instance per button. Waits for a falling edge, stamps it and hands it
//! to the control task. Debouncing happens there.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use digitrix_core::input::{ButtonId, InputEvent};

use crate::channels::INPUT_CHANNEL;

#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(id: ButtonId, mut pin: Input<'static>) {
    info!("Button {:?} task started", id);

    loop {
        pin.wait_for_falling_edge().await;
        let timestamp_us = Instant::now().as_micros();

        if INPUT_CHANNEL
            .try_send(InputEvent::edge(id, timestamp_us))
            .is_err()
        {
            warn!("Input queue full, dropping edge on {:?}", id);
        }
    }
}
