//! Configuration type definitions

use heapless::String;

use crate::input::{ButtonId, DebounceScope, BUTTON_COUNT, DEFAULT_DEBOUNCE_US};
use crate::matrix::Color;

/// Maximum button name length
pub const MAX_NAME_LEN: usize = 20;

/// Maximum serial screen label length
pub const MAX_LABEL_LEN: usize = 16;

/// Default serial screen label
pub const DEFAULT_LABEL: &str = "HASS";

/// Default OLED I2C address
pub const DEFAULT_DISPLAY_ADDRESS: u8 = digitrix_display::SSD1306_ADDR;

/// Debounce settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceConfig {
    /// Minimum spacing between accepted edges (µs)
    pub window_us: u64,
    /// Whether both buttons share one gate
    pub scope: DebounceScope,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            window_us: DEFAULT_DEBOUNCE_US,
            scope: DebounceScope::PerButton,
        }
    }
}

/// LED matrix settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MatrixConfig {
    /// Color digits are drawn in
    pub color: Color,
}

/// OLED settings
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Constant label on the serial screen
    pub label: String<MAX_LABEL_LEN>,
    /// 7-bit I2C address
    pub address: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let mut label = String::new();
        let _ = label.push_str(DEFAULT_LABEL);
        Self {
            label,
            address: DEFAULT_DISPLAY_ADDRESS,
        }
    }
}

/// Per-button settings
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    /// Name shown in the status line
    pub name: String<MAX_NAME_LEN>,
    /// Indicator output is active-low
    pub inverted: bool,
}

impl ButtonConfig {
    /// Create a button config with an active-high indicator
    ///
    /// Names longer than [`MAX_NAME_LEN`] are truncated.
    pub fn named(name: &str) -> Self {
        let mut s = String::new();
        for c in name.chars() {
            if s.push(c).is_err() {
                break;
            }
        }
        Self {
            name: s,
            inverted: false,
        }
    }
}

/// Serial input settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SerialConfig {
    /// Idle delay between loop iterations (ms)
    pub poll_interval_ms: u32,
    /// UART baud rate
    pub baudrate: u32,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 50,
            baudrate: 115_200,
        }
    }
}

/// Complete board configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    pub debounce: DebounceConfig,
    pub matrix: MatrixConfig,
    pub display: DisplayConfig,
    /// Indexed by [`ButtonId::index`]
    pub buttons: [ButtonConfig; BUTTON_COUNT],
    pub serial: SerialConfig,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            debounce: DebounceConfig::default(),
            matrix: MatrixConfig::default(),
            display: DisplayConfig::default(),
            buttons: [
                ButtonConfig::named("Green LED"),
                ButtonConfig::named("Blue LED"),
            ],
            serial: SerialConfig::default(),
        }
    }
}

impl BoardConfig {
    /// Settings for one button
    pub fn button(&self, id: ButtonId) -> &ButtonConfig {
        &self.buttons[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.debounce.window_us, 200_000);
        assert_eq!(config.debounce.scope, DebounceScope::PerButton);
        assert_eq!(config.matrix.color, Color::new(20, 0, 0));
        assert_eq!(config.display.label.as_str(), "HASS");
        assert_eq!(config.display.address, 0x3C);
        assert_eq!(config.button(ButtonId::A).name.as_str(), "Green LED");
        assert_eq!(config.button(ButtonId::B).name.as_str(), "Blue LED");
        assert!(!config.button(ButtonId::A).inverted);
        assert_eq!(config.serial.poll_interval_ms, 50);
        assert_eq!(config.serial.baudrate, 115_200);
    }

    #[test]
    fn test_named_truncates() {
        let button = ButtonConfig::named("a very long button name indeed");
        assert_eq!(button.name.len(), MAX_NAME_LEN);
        assert_eq!(button.name.as_str(), "a very long button n");
    }
}
