//! Hardware driver implementations
//!
//! Concrete implementations of the output traits defined in digitrix-core:
//!
//! - Indicator lines driven from a GPIO pin (active-high or active-low)

#![no_std]
#![deny(unsafe_code)]

pub mod indicator;
