//! Configuration types for qdigital

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::nav::SCROLL_THRESHOLD_PX;

/// Shortest auto-advance period accepted from configuration
pub const MIN_CAROUSEL_INTERVAL_MS: u64 = 500;

/// Application settings (.qdigital/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub carousel: CarouselSettings,

    #[serde(default)]
    pub chrome: ChromeSettings,

    #[serde(default)]
    pub content: ContentSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Testimonial carousel settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CarouselSettings {
    /// Auto-advance period in milliseconds
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

impl CarouselSettings {
    /// Auto-advance period, clamped to [`MIN_CAROUSEL_INTERVAL_MS`]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(MIN_CAROUSEL_INTERVAL_MS))
    }
}

fn default_interval_ms() -> u64 {
    5000
}

/// Navbar chrome settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChromeSettings {
    /// Scroll offset past which the navbar switches to its scrolled style
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold_px: u32,
}

impl Default for ChromeSettings {
    fn default() -> Self {
        Self {
            scroll_threshold_px: default_scroll_threshold(),
        }
    }
}

fn default_scroll_threshold() -> u32 {
    SCROLL_THRESHOLD_PX
}

/// Content source settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContentSettings {
    /// TOML content file, relative to the site directory.
    /// `None` uses the built-in reference content.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Page identifier shown at startup
    #[serde(default = "default_start_page")]
    pub start_page: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            start_page: default_start_page(),
        }
    }
}

fn default_start_page() -> String {
    "home".to_string()
}
