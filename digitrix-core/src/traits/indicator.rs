//! Indicator output trait
//!
//! Each button owns one indicator line that mirrors its toggle state.

/// Trait for a two-state indicator output
///
/// Implementations handle electrical polarity; callers only deal with the
/// logical state.
pub trait IndicatorOutput {
    /// Set the logical indicator state
    fn set_on(&mut self, on: bool);

    /// Get the current logical state
    fn is_on(&self) -> bool;
}
