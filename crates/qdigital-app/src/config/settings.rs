//! Settings and content loading for .qdigital/config.toml

use super::types::Settings;
use qdigital_core::prelude::*;
use qdigital_core::{load_content, Content};
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const QDIGITAL_DIR: &str = ".qdigital";

/// Path of the config file for a site directory
pub fn config_path(site_dir: &Path) -> PathBuf {
    site_dir.join(QDIGITAL_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `<site_dir>/.qdigital/config.toml`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(site_dir: &Path) -> Settings {
    let config_path = config_path(site_dir);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Resolve the site content.
///
/// `override_path` (from the command line) wins over `[content] path` and is
/// taken as given, so a relative path is relative to the working directory.
/// A relative `[content] path` is resolved against the site directory. With
/// neither set the built-in reference content is used. A configured file that
/// is missing or invalid is an error.
pub fn resolve_content(
    site_dir: &Path,
    settings: &Settings,
    override_path: Option<&Path>,
) -> Result<Content> {
    let path = match (override_path, settings.content.path.as_deref()) {
        (Some(cli), _) => cli.to_path_buf(),
        (None, Some(configured)) if configured.is_absolute() => configured.to_path_buf(),
        (None, Some(configured)) => site_dir.join(configured),
        (None, None) => {
            debug!("Using built-in reference content");
            return Ok(Content::reference());
        }
    };

    let content =
        load_content(&path).with_context(|| format!("Failed to load content from {:?}", path))?;
    info!(
        "Loaded content from {:?} ({} testimonials)",
        path,
        content.slide_count()
    );
    Ok(content)
}
