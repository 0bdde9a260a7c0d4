//! Build script for digitrix-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates board.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Longest button name the firmware stores
const MAX_NAME_LEN: usize = 20;

/// Longest serial screen label the firmware stores
const MAX_LABEL_LEN: usize = 16;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Print an error box and abort the build
fn fail(title: &str, lines: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        lines
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Validate board.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");

    if !config_path.exists() {
        fail(
            "board.toml not found!",
            &["The firmware embeds board.toml from the crate directory.".into()],
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read board.toml", &[e.to_string()]),
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => fail(
            "Invalid TOML syntax in board.toml",
            &e.to_string().lines().map(String::from).collect::<Vec<_>>(),
        ),
    };

    let mut errors = Vec::new();

    if let Some(table) = config.as_table() {
        for key in table.keys() {
            if !["debounce", "matrix", "display", "button", "serial"].contains(&key.as_str()) {
                errors.push(format!("unknown section [{}]", key));
            }
        }
    }

    validate_debounce(&config, &mut errors);
    validate_matrix(&config, &mut errors);
    validate_display(&config, &mut errors);
    validate_buttons(&config, &mut errors);
    validate_serial(&config, &mut errors);

    if !errors.is_empty() {
        fail("Invalid board configuration", &errors);
    }
}

fn validate_debounce(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(debounce) = config.get("debounce") else {
        return;
    };

    match debounce.get("window_us") {
        Some(toml::Value::Integer(w)) if *w < 0 => {
            errors.push("[debounce] window_us must not be negative".into())
        }
        Some(toml::Value::Integer(_)) | None => {}
        Some(_) => errors.push("[debounce] window_us must be an integer".into()),
    }

    match debounce.get("scope") {
        Some(toml::Value::String(s)) if s == "per_button" || s == "shared" => {}
        None => {}
        Some(_) => errors.push("[debounce] scope must be \"per_button\" or \"shared\"".into()),
    }
}

fn validate_matrix(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(color) = config.get("matrix").and_then(|m| m.get("color")) else {
        return;
    };

    let valid = match color {
        toml::Value::Array(channels) => {
            channels.len() == 3
                && channels
                    .iter()
                    .all(|c| matches!(c, toml::Value::Integer(v) if (0..=255).contains(v)))
        }
        _ => false,
    };

    if !valid {
        errors.push("[matrix] color must be [r, g, b] with values 0-255".into());
    }
}

fn validate_display(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(display) = config.get("display") else {
        return;
    };

    match display.get("label") {
        Some(toml::Value::String(s)) if s.len() > MAX_LABEL_LEN => errors.push(format!(
            "[display] label longer than {} bytes",
            MAX_LABEL_LEN
        )),
        Some(toml::Value::String(_)) | None => {}
        Some(_) => errors.push("[display] label must be a string".into()),
    }

    match display.get("address") {
        Some(toml::Value::Integer(a)) if (0..=0x7F).contains(a) => {}
        None => {}
        Some(_) => errors.push("[display] address must be a 7-bit I2C address".into()),
    }
}

fn validate_buttons(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(buttons) = config.get("button") else {
        return;
    };

    let Some(buttons) = buttons.as_table() else {
        errors.push("[button] must contain [button.a] and/or [button.b]".into());
        return;
    };

    for (name, button) in buttons {
        if name != "a" && name != "b" {
            errors.push(format!("unknown button [button.{}]", name));
            continue;
        }

        match button.get("name") {
            Some(toml::Value::String(s)) if s.len() > MAX_NAME_LEN => errors.push(format!(
                "[button.{}] name longer than {} bytes",
                name, MAX_NAME_LEN
            )),
            Some(toml::Value::String(_)) | None => {}
            Some(_) => errors.push(format!("[button.{}] name must be a string", name)),
        }

        match button.get("inverted") {
            Some(toml::Value::Boolean(_)) | None => {}
            Some(_) => errors.push(format!("[button.{}] inverted must be true/false", name)),
        }
    }
}

fn validate_serial(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(serial) = config.get("serial") else {
        return;
    };

    match serial.get("poll_interval_ms") {
        Some(toml::Value::Integer(ms)) if (0..=i64::from(u32::MAX)).contains(ms) => {}
        None => {}
        Some(_) => errors.push("[serial] poll_interval_ms must be a positive integer".into()),
    }

    match serial.get("baudrate") {
        Some(toml::Value::Integer(b)) if (1..=i64::from(u32::MAX)).contains(b) => {}
        None => {}
        Some(_) => errors.push("[serial] baudrate must be a positive integer".into()),
    }
}
