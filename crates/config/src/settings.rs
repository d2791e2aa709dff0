//! Settings structure and loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::xdg;

/// All caret settings.
///
/// Every field has a default, and unknown or missing sections fall back to
/// those defaults, so a partial config file is fine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub display: DisplaySettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Minimum log level: "debug", "info", "warn" or "error".
    pub log_level: String,
    /// Log file path; defaults to the XDG data directory when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

/// Display settings for the demo renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Number of columns a tab character occupies on screen.
    pub tab_width: u16,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { tab_width: 4 }
    }
}

impl Settings {
    /// Load settings from `config.toml` in the XDG config directory.
    ///
    /// A missing file yields the defaults; an unreadable or malformed file
    /// is an error.
    pub fn load() -> Result<Self> {
        let path = xdg::config_dir()?.join("config.toml");
        Self::load_from(&path)
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}
