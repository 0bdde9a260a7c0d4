//! Minimal TOML parser for board configuration
//!
//! Handles only the subset the board file needs. It does NOT support the
//! full TOML spec and never allocates.
//!
//! Supported features:
//! - `[section]` and `[section.subsection]` headers
//! - Key = value pairs (string, integer, boolean)
//! - Integer arrays: `color = [20, 0, 0]`
//! - Comments (# ...), including after a value
//!
//! Unknown keys are ignored so older firmware accepts newer files.

use heapless::String;

use super::types::{BoardConfig, ButtonConfig};
use crate::input::{ButtonId, DebounceScope};
use crate::matrix::Color;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Value has the wrong type or is out of range
    InvalidValue,
    /// String does not fit its fixed-capacity field
    TooLong,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Debounce,
    Matrix,
    Display,
    Button(ButtonId),
    Serial,
}

/// Parse TOML text into a [`BoardConfig`]
///
/// Keys that are not present keep their default values.
pub fn parse_config(input: &str) -> Result<BoardConfig, ConfigError> {
    let mut config = BoardConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        match parse_key_value(line) {
            Some((key, value)) => apply_value(section, key, value, &mut config)?,
            None => return Err(ConfigError::InvalidValue),
        }
    }

    Ok(config)
}

/// Parse section header like "debounce" or "button.a"
fn parse_section_header(header: &str) -> Result<Section, ConfigError> {
    match header.trim() {
        "debounce" => Ok(Section::Debounce),
        "matrix" => Ok(Section::Matrix),
        "display" => Ok(Section::Display),
        "serial" => Ok(Section::Serial),
        "button.a" => Ok(Section::Button(ButtonId::A)),
        "button.b" => Ok(Section::Button(ButtonId::B)),
        _ => Err(ConfigError::InvalidSection),
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = strip_comment(line[eq_pos + 1..].trim());

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Remove a trailing comment unless the `#` sits inside a string
fn strip_comment(value: &str) -> &str {
    let mut in_string = false;
    for (i, c) in value.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return value[..i].trim(),
            _ => {}
        }
    }
    value
}

/// Parse a quoted string value
fn parse_string(value: &str) -> Result<&str, ConfigError> {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        Ok(&value[1..value.len() - 1])
    } else {
        Err(ConfigError::InvalidValue)
    }
}

/// Copy a string value into a fixed-capacity field
fn parse_bounded<const N: usize>(value: &str) -> Result<String<N>, ConfigError> {
    let s = parse_string(value)?;
    String::try_from(s).map_err(|_| ConfigError::TooLong)
}

/// Parse an integer value, accepting `0x` hex
fn parse_int<T: TryFrom<u64>>(value: &str) -> Result<T, ConfigError> {
    let digits = strip_separators(value)?;
    let raw = if let Some(hex) = digits.strip_prefix("0x") {
        u64::from_str_radix(hex, 16)
    } else {
        digits.parse::<u64>()
    }
    .map_err(|_| ConfigError::InvalidValue)?;

    T::try_from(raw).map_err(|_| ConfigError::InvalidValue)
}

/// Drop `_` digit separators
fn strip_separators(value: &str) -> Result<String<24>, ConfigError> {
    let mut digits = String::new();
    for c in value.chars().filter(|&c| c != '_') {
        digits.push(c).map_err(|_| ConfigError::InvalidValue)?;
    }
    Ok(digits)
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidValue),
    }
}

/// Parse "[r, g, b]"
fn parse_color(value: &str) -> Result<Color, ConfigError> {
    let inner = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .ok_or(ConfigError::InvalidValue)?
        .trim();
    // One trailing comma is allowed, empty elements are not
    let inner = inner.strip_suffix(',').unwrap_or(inner);

    let mut channels = [0u8; 3];
    let mut count = 0;
    for part in inner.split(',') {
        let part = part.trim();
        if part.is_empty() {
            return Err(ConfigError::InvalidValue);
        }
        let slot = channels.get_mut(count).ok_or(ConfigError::InvalidValue)?;
        *slot = parse_int(part)?;
        count += 1;
    }

    if count != 3 {
        return Err(ConfigError::InvalidValue);
    }

    Ok(Color::new(channels[0], channels[1], channels[2]))
}

/// Parse debounce scope
fn parse_scope(value: &str) -> Result<DebounceScope, ConfigError> {
    match parse_string(value)? {
        "per_button" => Ok(DebounceScope::PerButton),
        "shared" => Ok(DebounceScope::Shared),
        _ => Err(ConfigError::InvalidValue),
    }
}

/// Apply a parsed value to the appropriate config field
fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut BoardConfig,
) -> Result<(), ConfigError> {
    match section {
        Section::Root => {}
        Section::Debounce => match key {
            "window_us" => config.debounce.window_us = parse_int(value)?,
            "scope" => config.debounce.scope = parse_scope(value)?,
            _ => {}
        },
        Section::Matrix => {
            if key == "color" {
                config.matrix.color = parse_color(value)?;
            }
        }
        Section::Display => match key {
            "label" => config.display.label = parse_bounded(value)?,
            "address" => {
                let address: u8 = parse_int(value)?;
                if address > 0x7F {
                    return Err(ConfigError::InvalidValue);
                }
                config.display.address = address;
            }
            _ => {}
        },
        Section::Button(id) => apply_button(&mut config.buttons[id.index()], key, value)?,
        Section::Serial => match key {
            "poll_interval_ms" => config.serial.poll_interval_ms = parse_int(value)?,
            "baudrate" => {
                let baudrate: u32 = parse_int(value)?;
                if baudrate == 0 {
                    return Err(ConfigError::InvalidValue);
                }
                config.serial.baudrate = baudrate;
            }
            _ => {}
        },
    }
    Ok(())
}

fn apply_button(button: &mut ButtonConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "name" => button.name = parse_bounded(value)?,
        "inverted" => button.inverted = parse_bool(value)?,
        _ => {}
    }
    Ok(())
}
