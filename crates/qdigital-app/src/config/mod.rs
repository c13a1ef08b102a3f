//! Configuration file parsing for qdigital
//!
//! Supports `.qdigital/config.toml` in the site directory.

pub mod settings;
pub mod types;

pub use settings::{config_path, load_settings, resolve_content};
pub use types::*;
