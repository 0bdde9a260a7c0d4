//! Board configuration loading

use defmt::*;

use digitrix_core::config::{parse_config, BoardConfig};

/// Embedded configuration (compiled into firmware)
/// Edit board.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../board.toml");

/// Parse the embedded board.toml
///
/// build.rs already rejects invalid files, so the fallback only triggers
/// when the two parsers disagree.
pub fn load() -> BoardConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {:?}", e);
            error!("Using built-in defaults");
            BoardConfig::default()
        }
    }
}
