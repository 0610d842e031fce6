//! Application Configuration
//!
//! Centralized configuration for the dashboard core, loaded from a TOML
//! file at `~/.config/wayfare/config.toml` with environment overrides.
//!
//! # Configuration Priority
//!
//! Values are resolved with the following priority (highest first):
//! 1. Environment variables (`WAYFARE_*`)
//! 2. TOML configuration file
//! 3. Default values
//!
//! # Example Configuration
//!
//! ```toml
//! base_url = "http://localhost:3000/api"
//! request_timeout_secs = 30
//! nav_items = ["Home", "Explore", "Bookmarks", "Profile"]
//!
//! [icons]
//! default_icon = "place"
//! [icons.icons]
//! Resort = "beach_access"
//!
//! [avatar]
//! sentinel = "avatar.png"
//! local_prefix = "images/"
//! service_url = "https://ui-avatars.com/api/"
//! background = "5e60ce"
//! foreground = "fff"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::view::{AvatarPolicy, IconTable, Renderer};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Application configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the resource store
    pub base_url: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Bottom-navigation item labels, first item active by default
    pub nav_items: Vec<String>,
    /// Category icon lookup table
    pub icons: IconTable,
    /// Avatar resolution policy
    pub avatar: AvatarPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api".to_string(),
            request_timeout_secs: 30,
            nav_items: ["Home", "Explore", "Bookmarks", "Profile"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            icons: IconTable::default(),
            avatar: AvatarPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Defaults with environment overrides applied.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().apply_env()
    }

    /// Apply `WAYFARE_*` environment variable overrides on top of this
    /// configuration.
    #[must_use]
    pub fn apply_env(mut self) -> Self {
        if let Ok(base_url) = std::env::var("WAYFARE_BASE_URL") {
            self.base_url = base_url;
        }
        if let Some(timeout) = std::env::var("WAYFARE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.request_timeout_secs = timeout;
        }
        self
    }

    /// Build a [`Renderer`] from this configuration's icon table and
    /// avatar policy.
    #[must_use]
    pub fn renderer(&self) -> Renderer {
        Renderer::new(self.icons.clone(), self.avatar.clone())
    }
}

/// Default configuration file path following the XDG Base Directory
/// convention: `$XDG_CONFIG_HOME/wayfare/config.toml`.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wayfare").join("config.toml"))
}

/// Load configuration from the default path, falling back to defaults if
/// no file exists, then apply environment overrides.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let config = match default_config_path() {
        Some(path) if path.exists() => load_config_from_path(&path)?,
        _ => {
            debug!("no config file found, using defaults");
            AppConfig::default()
        }
    };
    Ok(config.apply_env())
}

/// Load configuration from an explicit file path. Environment overrides
/// are not applied here.
pub fn load_config_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    let config = toml::from_str(&contents)?;
    debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_defaults_match_original_page() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000/api");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.nav_items, ["Home", "Explore", "Bookmarks", "Profile"]);
        assert_eq!(config.icons.resolve("Resort"), "beach_access");
        assert_eq!(config.icons.resolve("Igloo"), "place");
    }

    #[test]
    fn test_partial_toml_keeps_defaults_for_missing_fields() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "base_url = \"https://store.example/api\"").unwrap();
        file.flush().unwrap();

        let config = load_config_from_path(file.path()).unwrap();
        assert_eq!(config.base_url, "https://store.example/api");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.avatar.sentinel, "avatar.png");
    }

    #[test]
    fn test_icon_overrides_parse_from_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[icons]\ndefault_icon = \"pin\"\n[icons.icons]\nResort = \"umbrella\""
        )
        .unwrap();
        file.flush().unwrap();

        let config = load_config_from_path(file.path()).unwrap();
        assert_eq!(config.icons.resolve("Resort"), "umbrella");
        assert_eq!(config.icons.resolve("Hotel"), "pin");
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "base_url = [not toml").unwrap();
        file.flush().unwrap();

        let err = load_config_from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let err = load_config_from_path(Path::new("/nonexistent/wayfare.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn test_env_overrides_take_priority() {
        std::env::set_var("WAYFARE_BASE_URL", "http://env.example/api");
        std::env::set_var("WAYFARE_TIMEOUT_SECS", "5");

        let config = AppConfig::default().apply_env();
        assert_eq!(config.base_url, "http://env.example/api");
        assert_eq!(config.request_timeout_secs, 5);

        std::env::remove_var("WAYFARE_BASE_URL");
        std::env::remove_var("WAYFARE_TIMEOUT_SECS");
    }
}
