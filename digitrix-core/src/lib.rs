//! Board-agnostic core logic for the Digitrix firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Output traits (indicator lines, addressable LED chain)
//! - Digit patterns, color encoding and the LED matrix renderer
//! - Edge debouncing and the per-button toggle state machine
//! - Screen layouts for the OLED
//! - The controller that dispatches button edges and serial characters
//! - Board configuration types and parser

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod input;
pub mod matrix;
pub mod screen;
pub mod traits;

pub use controller::{ControlError, Controller, EdgeOutcome, Handled, SerialOutcome};
