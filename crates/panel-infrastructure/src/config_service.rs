//! Configuration service implementation.
//!
//! Loads `PanelConfig` from a TOML file and layers environment overrides on
//! top. File lookup order: explicit path, `$PANEL_CONFIG`, then
//! `~/.config/panel/config.toml`. A missing file yields the defaults.

use crate::paths::PanelPaths;
use panel_core::config::PanelConfig;
use panel_core::error::{PanelError, Result};
use std::path::{Path, PathBuf};

pub const ENV_CONFIG_PATH: &str = "PANEL_CONFIG";
pub const ENV_BACKEND_URL: &str = "TSURU_HOST";
pub const ENV_BIND: &str = "PANEL_BIND";
pub const ENV_SESSION_SECRET: &str = "PANEL_SESSION_SECRET";
pub const ENV_LOG_FILTER: &str = "PANEL_LOG";

/// Configuration loader.
#[derive(Debug, Clone, Default)]
pub struct ConfigService {
    /// Explicit config file, e.g. from `--config`.
    path: Option<PathBuf>,
}

impl ConfigService {
    /// Creates a service that resolves the config file from the environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service that reads the given file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// The config file that will be read.
    pub fn config_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }
        if let Ok(path) = std::env::var(ENV_CONFIG_PATH)
            && !path.trim().is_empty()
        {
            return Ok(PathBuf::from(path));
        }
        PanelPaths::config_file().map_err(|e| PanelError::config(e.to_string()))
    }

    /// Loads the file (if any) and applies process environment overrides.
    pub fn load(&self) -> Result<PanelConfig> {
        let path = self.config_path()?;
        let mut config = Self::load_file(&path)?;
        apply_env_overrides(&mut config, |key| std::env::var(key).ok());
        Ok(config)
    }

    /// Reads `path`, returning defaults when it does not exist.
    pub fn load_file(path: &Path) -> Result<PanelConfig> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(PanelConfig::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            PanelError::config(format!(
                "Failed to read configuration file at {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: PanelConfig = toml::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Applies environment overrides using `lookup` to read variables.
pub fn apply_env_overrides<F>(config: &mut PanelConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = non_empty(ENV_BACKEND_URL) {
        config.backend.url = url;
    }
    if let Some(bind) = non_empty(ENV_BIND) {
        config.server.bind = bind;
    }
    if let Some(secret) = non_empty(ENV_SESSION_SECRET) {
        config.server.session_secret = Some(secret);
    }
    if let Some(filter) = non_empty(ENV_LOG_FILTER) {
        config.logging.filter = filter;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panel_core::config::DEFAULT_BACKEND_URL;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = ConfigService::load_file(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config.backend.url, DEFAULT_BACKEND_URL);
    }

    #[test]
    fn test_load_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[backend]
url = "https://tsuru.example.com"

[server]
bind = "0.0.0.0:9000"
session_secret = "0123456789abcdef0123456789abcdef"

[logging]
filter = "panel=debug"
directory = "/var/log/panel"
"#,
        )
        .unwrap();

        let config = ConfigService::load_file(&path).unwrap();
        assert_eq!(config.backend.url, "https://tsuru.example.com");
        assert_eq!(config.server.bind, "0.0.0.0:9000");
        assert_eq!(config.logging.directory.as_deref(), Some("/var/log/panel"));
    }

    #[test]
    fn test_invalid_toml_is_a_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[backend\nurl = 1").unwrap();
        assert!(ConfigService::load_file(&path).unwrap_err().is_serialization());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_BACKEND_URL, "http://tsuru.internal:8080"),
            (ENV_BIND, ""),
            (ENV_LOG_FILTER, "debug"),
        ]);
        let mut config = PanelConfig::default();
        apply_env_overrides(&mut config, |key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.backend.url, "http://tsuru.internal:8080");
        assert_eq!(config.server.bind, PanelConfig::default().server.bind);
        assert_eq!(config.logging.filter, "debug");
        assert!(config.server.session_secret.is_none());
    }

    #[test]
    fn test_explicit_path_wins() {
        let service = ConfigService::with_path("/etc/panel/config.toml");
        assert_eq!(
            service.config_path().unwrap(),
            PathBuf::from("/etc/panel/config.toml")
        );
    }
}
