//! XDG Base Directory paths for caret.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "caret";

/// Configuration directory: `$XDG_CONFIG_HOME/caret` or `~/.config/caret`.
pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .context("failed to determine config directory")
}

/// Data directory: `$XDG_DATA_HOME/caret` or `~/.local/share/caret`.
pub fn data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|p| p.join(APP_NAME))
        .context("failed to determine data directory")
}

/// Default log file location, under the data directory.
pub fn default_log_file() -> Result<PathBuf> {
    data_dir().map(|p| p.join("caret.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_ends_with_app_name() {
        let dir = config_dir().unwrap();
        assert!(dir.ends_with("caret"));
    }

    #[test]
    fn test_log_file_lives_under_data_dir() {
        let file = default_log_file().unwrap();
        assert!(file.starts_with(data_dir().unwrap()));
        assert!(file.ends_with("caret.log"));
    }
}
