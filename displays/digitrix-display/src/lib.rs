//! Display abstraction and OLED driver for Digitrix
//!
//! This crate provides:
//! - `DisplayBackend` trait: the four operations the core repaints through
//!   (clear, draw text/character/rectangle, flush)
//! - `Ssd1306`: a 128x64 buffered OLED driver over any `digitrix_hal::I2cBus`
//!
//! # Architecture
//!
//! All drawing happens into a RAM framebuffer. Nothing reaches the panel
//! until `flush` sends the whole buffer over I2C, so a repaint is always
//! `clear -> draw* -> flush` and a half-drawn frame is never visible.
//!
//! Glyphs are rasterized by `embedded-graphics` using a fixed-width mono font.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod ssd1306;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use ssd1306::{Ssd1306, HEIGHT, SSD1306_ADDR, WIDTH};
