//! Control loop task
//!
//! Polls the serial line once per iteration, then idles for the configured
//! interval. Button edges that arrive while idling are handled right away,
//! so the screen always shows the last event processed.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::{I2C1, PIO0};
use embassy_rp::uart::BufferedUartRx;
use embassy_time::{Duration, Instant, Timer};

use digitrix_core::{ControlError, Controller, EdgeOutcome, Handled, SerialOutcome};
use digitrix_display::Ssd1306;
use digitrix_drivers::indicator::GpioIndicator;
use digitrix_hal_rp2040::{BlockingI2c, PioWs2812Sink, PolledRx, RpOutput};

use crate::channels::INPUT_CHANNEL;

/// Controller wired to the board's peripherals
pub type BoardController = Controller<
    Ssd1306<BlockingI2c<I2c<'static, I2C1, Blocking>>>,
    PioWs2812Sink<'static, PIO0, 0>,
    GpioIndicator<RpOutput<'static>>,
>;

/// Serial character source
pub type SerialRx = PolledRx<BufferedUartRx>;

#[embassy_executor::task]
pub async fn control_task(mut controller: BoardController, mut rx: SerialRx, poll_interval: Duration) {
    info!("Control task started");

    if let Err(e) = controller.start() {
        warn!("Initial display clear failed: {:?}", e);
    }

    loop {
        match controller.poll_serial(&mut rx) {
            Ok(SerialOutcome::Idle) => {}
            Ok(SerialOutcome::Shown(byte)) => debug!("Serial byte {=u8:#x}", byte),
            Ok(SerialOutcome::ShownDigit(digit)) => debug!("Serial digit {}", digit.value()),
            Err(e) => report(e),
        }

        let deadline = Instant::now() + poll_interval;
        loop {
            match select(Timer::at(deadline), INPUT_CHANNEL.receive()).await {
                Either::First(()) => break,
                Either::Second(event) => match controller.handle_event(event) {
                    Ok(Handled::Edge(EdgeOutcome::Toggled { id, on })) => {
                        debug!("Button {:?} -> {}", id, if on { "ON" } else { "OFF" })
                    }
                    Ok(Handled::Edge(EdgeOutcome::Suppressed)) => trace!("Bounce suppressed"),
                    Ok(Handled::Serial(_)) => {}
                    Err(e) => report(e),
                },
            }
        }
    }
}

/// No recovery path; log and keep going
fn report(e: ControlError) {
    match e {
        ControlError::Display(d) => warn!("Display update failed: {:?}", d),
        ControlError::Serial => warn!("UART read error"),
    }
}
