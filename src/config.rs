//! Configuration management for Blok
//!
//! Handles loading, saving and validating configuration. Configuration is
//! stored as JSON; every field is optional and falls back to its default.
//!
//! ```json
//! {
//!     "i18n": { "language": "en", "force_display_keys": true },
//!     "api": { "url": "https://api.example.com" },
//!     "debug": false,
//!     "translations": { "hello": "Hello :name" }
//! }
//! ```

use crate::error::{ConfigError, ConfigResult};
use crate::i18n::{TranslatorOptions, DEFAULT_CONTEXT_NAME, DEFAULT_LOCALE};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Application identifier, used for the configuration directory
pub const APP_ID: &str = "blok";

/// Configuration file name inside the configuration directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Translation store configuration
    pub i18n: I18nConfig,

    /// API endpoint configuration
    pub api: ApiConfig,

    /// Enable `trace` output
    pub debug: bool,

    /// Messages added to the configured language at install time
    pub translations: Map<String, Value>,
}

impl Config {
    /// Load configuration from the user configuration directory, or return
    /// defaults when no file exists
    pub fn load() -> ConfigResult<Self> {
        let path = Self::config_file()?;

        if !path.exists() {
            log::debug!("No configuration at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::LoadError {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::SaveError {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::SaveError {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check values the translation store relies on
    pub fn validate(&self) -> ConfigResult<()> {
        let language = &self.i18n.language;
        if language.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "i18n.language".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        // The locale is the first segment of every qualified key
        if language.contains('.') {
            return Err(ConfigError::InvalidValue {
                key: "i18n.language".to_string(),
                reason: format!("'{}' must not contain '.'", language),
            });
        }
        Ok(())
    }

    /// The configuration as a JSON value
    pub fn to_value(&self) -> ConfigResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Get the configuration directory path
    pub fn config_dir() -> ConfigResult<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_ID))
            .ok_or(ConfigError::DirectoryError)
    }

    /// Get the configuration file path
    pub fn config_file() -> ConfigResult<PathBuf> {
        Self::config_dir().map(|p| p.join(CONFIG_FILE_NAME))
    }
}

/// Translation store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Default (and initially active) locale
    pub language: String,

    /// Name of the shared translation context; `null` disables it
    pub global_name: Option<String>,

    /// Show the key itself when a lookup misses
    pub force_display_keys: bool,

    /// Record missing keys in the shared context
    pub store_not_founds: bool,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LOCALE.to_string(),
            global_name: Some(DEFAULT_CONTEXT_NAME.to_string()),
            force_display_keys: true,
            store_not_founds: true,
        }
    }
}

impl I18nConfig {
    /// Options for the translator built from this configuration
    pub fn translator_options(&self) -> TranslatorOptions {
        TranslatorOptions {
            global_name: self.global_name.clone(),
            force_display_keys: self.force_display_keys,
            store_not_founds: self.store_not_founds,
        }
    }
}

/// API endpoint configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL prepended to API routes
    pub url: String,
}
