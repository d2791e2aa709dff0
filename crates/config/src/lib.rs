//! Configuration for caret.
//!
//! TOML settings loaded from the XDG config directory, with defaults for
//! everything so the demo runs without any config file present.

mod settings;
mod xdg;

pub use settings::{DisplaySettings, GeneralSettings, Settings};
pub use xdg::{config_dir, data_dir, default_log_file};
