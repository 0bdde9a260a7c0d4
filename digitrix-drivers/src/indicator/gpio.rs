//! GPIO indicator output
//!
//! An LED (or anything else) on a plain GPIO line that mirrors a button's
//! toggle state.

use digitrix_core::traits::IndicatorOutput;
use digitrix_hal::OutputPin;

/// Indicator driven from one GPIO pin
///
/// Polarity is fixed at construction: active-high (LED to ground) or
/// active-low (LED to the supply rail).
pub struct GpioIndicator<P> {
    pin: P,
    /// If true, indicator ON = pin LOW
    inverted: bool,
    on: bool,
}

impl<P: OutputPin> GpioIndicator<P> {
    /// Create an indicator and drive it off
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut indicator = Self {
            pin,
            inverted,
            on: false,
        };
        indicator.set_on(false);
        indicator
    }

    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Release the pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> IndicatorOutput for GpioIndicator<P> {
    fn set_on(&mut self, on: bool) {
        self.on = on;
        self.pin.set_state(on != self.inverted);
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
