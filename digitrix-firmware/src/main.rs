//! Digitrix - button, OLED and LED matrix firmware
//!
//! Main firmware binary for RP2040 boards. Two push buttons toggle their
//! indicator LEDs and report the new state on an SSD1306 OLED. Characters
//! received on UART0 are shown boxed on the OLED, and decimal digits are
//! also drawn on a 5x5 WS2812 matrix.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{PIO0, UART0};
use embassy_rp::pio::Pio;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::Duration;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use digitrix_core::config::BoardConfig;
use digitrix_core::input::ButtonId;
use digitrix_core::Controller;
use digitrix_display::Ssd1306;
use digitrix_drivers::indicator::GpioIndicator;
use digitrix_hal_rp2040::{BlockingI2c, PioWs2812Sink, PolledRx, RpOutput};

mod board;
mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; board::UART_TX_BUF_SIZE]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; board::UART_RX_BUF_SIZE]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Digitrix firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config: BoardConfig = config::load();

    // Indicator outputs, driven off until the first accepted press
    let indicator = |pin: Output<'static>, inverted: bool| {
        GpioIndicator::new(RpOutput::new(pin), inverted)
    };
    let indicator_a = indicator(
        Output::new(p.PIN_11, Level::Low),
        config.button(ButtonId::A).inverted,
    );
    let indicator_b = indicator(
        Output::new(p.PIN_12, Level::Low),
        config.button(ButtonId::B).inverted,
    );

    // Buttons: pull-up, active low
    let button_a = Input::new(p.PIN_5, Pull::Up);
    let button_b = Input::new(p.PIN_6, Pull::Up);

    // OLED on I2C1
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = board::I2C_FREQUENCY_HZ;
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);
    let mut display = Ssd1306::new(BlockingI2c::new(i2c), config.display.address);
    match display.init() {
        Ok(()) => info!("Display initialized"),
        Err(e) => warn!("Display init failed: {:?}", e),
    }

    // WS2812 matrix on PIO0 / SM0
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let pixels = PioWs2812Sink::new(&mut common, sm0, p.PIN_7);
    info!("PIO WS2812 initialized");

    // Serial character source on UART0
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = config.serial.baudrate;

    let tx_buf = TX_BUF.init([0u8; board::UART_TX_BUF_SIZE]);
    let rx_buf = RX_BUF.init([0u8; board::UART_RX_BUF_SIZE]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (_tx, rx) = uart.split();
    info!("UART initialized at {} baud", config.serial.baudrate);

    let controller = Controller::new(&config, display, pixels, [indicator_a, indicator_b]);
    let poll_interval = Duration::from_millis(config.serial.poll_interval_ms.into());

    // Spawn tasks
    spawner
        .spawn(tasks::button_task(ButtonId::A, button_a))
        .unwrap();
    spawner
        .spawn(tasks::button_task(ButtonId::B, button_b))
        .unwrap();
    spawner
        .spawn(tasks::control_task(controller, PolledRx::new(rx), poll_interval))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Keeps the UART transmit half alive; all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
