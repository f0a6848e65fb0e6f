//! Configuration management for the application.
//!
//! This module handles loading and validating application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{CATEGORY_POOL_SIZE, DEFAULT_API_BASE_URL, DEFAULT_CATEGORY_COUNT, DEFAULT_TIMEOUT_SECS};

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl ThemeMode {
    /// Parses a mode name as given on the command line.
    ///
    /// # Errors
    ///
    /// Returns an error for anything other than `auto`, `dark`, or `light`.
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => anyhow::bail!("Unknown theme mode '{other}' (expected auto, dark, or light)"),
        }
    }
}

/// Trivia service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the jservice-compatible API (no trailing slash)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Number of categories per board
    #[serde(default = "default_category_count")]
    pub category_count: usize,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

const fn default_category_count() -> usize {
    DEFAULT_CATEGORY_COUNT
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            category_count: default_category_count(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Cluegrid/config.toml`
/// - macOS: `~/Library/Application Support/Cluegrid/config.toml`
/// - Windows: `%APPDATA%\Cluegrid\config.toml`
///
/// The `CLUEGRID_CONFIG_DIR` environment variable overrides the directory,
/// which keeps integration tests away from the real config.
///
/// # Validation
///
/// - `base_url` must be an `http://` or `https://` URL without a trailing slash
/// - `category_count` must fit the candidate pool (1 to 50)
/// - `timeout_secs` must be at least 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Trivia service settings
    #[serde(default)]
    pub api: ApiConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/Cluegrid/`
    /// - macOS: `~/Library/Application Support/Cluegrid/`
    /// - Windows: `%APPDATA%\Cluegrid\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var("CLUEGRID_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("Cluegrid");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;

        Ok(config)
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        let url = self.api.base_url.trim();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            anyhow::bail!(
                "API base URL must start with http:// or https://, got: {}",
                self.api.base_url
            );
        }
        if url.ends_with('/') {
            anyhow::bail!(
                "API base URL must not end with a slash, got: {}",
                self.api.base_url
            );
        }

        if self.api.category_count == 0 {
            anyhow::bail!("Category count must be at least 1");
        }
        if self.api.category_count > CATEGORY_POOL_SIZE {
            anyhow::bail!(
                "Category count must not exceed the candidate pool size ({CATEGORY_POOL_SIZE}), got: {}",
                self.api.category_count
            );
        }

        if self.api.timeout_secs == 0 {
            anyhow::bail!("Request timeout must be at least 1 second");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.api.category_count, DEFAULT_CATEGORY_COUNT);
        assert_eq!(config.api.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_theme_mode_parse() {
        assert_eq!(ThemeMode::parse("auto").unwrap(), ThemeMode::Auto);
        assert_eq!(ThemeMode::parse("Dark").unwrap(), ThemeMode::Dark);
        assert_eq!(ThemeMode::parse("LIGHT").unwrap(), ThemeMode::Light);
        assert!(ThemeMode::parse("solarized").is_err());
    }

    #[test]
    fn test_config_validate_base_url() {
        let mut config = Config::new();

        config.api.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        config.api.base_url = "https://example.com/api/".to_string();
        assert!(config.validate().is_err());

        config.api.base_url = "https://example.com/api".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_category_count() {
        let mut config = Config::new();

        config.api.category_count = 0;
        assert!(config.validate().is_err());

        config.api.category_count = CATEGORY_POOL_SIZE + 1;
        assert!(config.validate().is_err());

        config.api.category_count = CATEGORY_POOL_SIZE;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_timeout() {
        let mut config = Config::new();
        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_toml_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.api.category_count = 4;
        config.ui.theme_mode = ThemeMode::Dark;

        let content = toml::to_string_pretty(&config).unwrap();
        fs::write(&config_file, content).unwrap();

        let content = fs::read_to_string(&config_file).unwrap();
        let loaded: Config = toml::from_str(&content).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_partial_file_fills_defaults() {
        let content = "[ui]\ntheme_mode = \"Light\"\n";
        let config: Config = toml::from_str(content).unwrap();

        assert_eq!(config.ui.theme_mode, ThemeMode::Light);
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.api.category_count, DEFAULT_CATEGORY_COUNT);
    }

    #[test]
    fn test_config_empty_file_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::new());
    }
}
