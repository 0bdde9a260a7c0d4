//! Board configuration
//!
//! Defaults reproduce the stock board. The firmware overrides them from an
//! embedded TOML file parsed by [`parse_config`].

mod parse;
mod types;

pub use parse::{parse_config, ConfigError};
pub use types::*;
