//! Pin assignments for the Digitrix board
//!
//! embassy-rp hands out pins as typed peripherals, so the numbers here are
//! documentation for the `p.PIN_n` fields used in `main`.
//!
//! | function          | GPIO |
//! |-------------------|------|
//! | UART0 TX / RX     | 0, 1 |
//! | Button A          | 5    |
//! | Button B          | 6    |
//! | WS2812 data       | 7    |
//! | Indicator A       | 11   |
//! | Indicator B       | 12   |
//! | I2C1 SDA / SCL    | 14, 15 |

/// OLED bus clock
pub const I2C_FREQUENCY_HZ: u32 = 400_000;

/// UART receive ring size
pub const UART_RX_BUF_SIZE: usize = 64;

/// UART transmit ring size (unused, required by the buffered driver)
pub const UART_TX_BUF_SIZE: usize = 16;
