//! RP2040-specific HAL for the Digitrix firmware
//!
//! Implementations of the shared `digitrix-hal` and `digitrix-core` traits
//! on top of embassy-rp:
//!
//! - GPIO outputs ([`gpio::RpOutput`])
//! - Blocking I2C master for the OLED ([`i2c::BlockingI2c`])
//! - Non-blocking byte source over a buffered UART ([`uart::PolledRx`])
//! - PIO-based WS2812 pixel transmitter ([`ws2812::PioWs2812Sink`])

#![no_std]

pub mod gpio;
pub mod i2c;
pub mod uart;
pub mod ws2812;

pub use gpio::RpOutput;
pub use i2c::{BlockingI2c, I2cBusError};
pub use uart::{PolledRx, UartError};
pub use ws2812::PioWs2812Sink;
