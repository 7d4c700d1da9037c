//! Path resolution for panel configuration files.
//!
//! ```text
//! ~/.config/panel/          # Config directory (platform config dir)
//! └── config.toml           # Backend URL, bind address, logging
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

pub struct PanelPaths;

impl PanelPaths {
    const APP_DIR: &'static str = "panel";
    const CONFIG_FILE: &'static str = "config.toml";

    /// Returns the panel configuration directory (e.g. `~/.config/panel/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the default configuration file path.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join(Self::CONFIG_FILE))
    }
}
