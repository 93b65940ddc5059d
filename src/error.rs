//! Error types for Blok
//!
//! Lookups in the translation store never fail: a miss degrades to the key or
//! an empty string. The errors below cover the fallible edges only: loading
//! configuration and catalogs from disk, and writing through a dot path.
//! Service-level operations on [`crate::Blok`] report [`AppError`].

use std::path::PathBuf;
use thiserror::Error;

/// Main error type encompassing all error categories
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Catalog loading errors
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Configuration related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error reading the configuration file
    #[error("Could not load configuration: {path}")]
    LoadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error writing the configuration file
    #[error("Could not save configuration: {path}")]
    SaveError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing or serializing configuration
    #[error("Invalid configuration format: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Invalid configuration value
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    /// Configuration directory error
    #[error("Could not access configuration directory")]
    DirectoryError,
}

/// Errors raised while loading translation catalogs
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("Could not read catalog: {path}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file is not valid JSON
    #[error("Catalog is not valid JSON: {path}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Catalog root (or a locale entry) is not a JSON object
    #[error("Catalog entry '{locale}' must be an object of messages")]
    NotAnObject { locale: String },
}

/// Errors raised when writing through a dot path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DotPathError {
    /// An intermediate segment does not exist
    #[error("Path segment '{segment}' of '{path}' does not exist")]
    MissingSegment { path: String, segment: String },

    /// An intermediate value cannot hold children
    #[error("Path segment '{segment}' of '{path}' is not a mapping or sequence")]
    NotAContainer { path: String, segment: String },

    /// Sequence index is not a number or lies past the end
    #[error("Invalid sequence index '{segment}' in '{path}'")]
    InvalidIndex { path: String, segment: String },

    /// The path has no segments
    #[error("Empty path")]
    EmptyPath,
}

/// Result type alias for operations that can fail with AppError
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Result type alias for dot-path writes
pub type DotPathResult<T> = Result<T, DotPathError>;

impl AppError {
    /// Create a user-friendly error message suitable for the command line
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(err) => err.user_message(),
            AppError::Catalog(err) => err.user_message(),
        }
    }
}

impl ConfigError {
    /// Create a user-friendly error message suitable for the command line
    pub fn user_message(&self) -> String {
        match self {
            ConfigError::LoadError { path, .. } => {
                format!(
                    "The configuration file {} could not be read. Check that it exists and is readable.",
                    path.display()
                )
            }
            ConfigError::ParseError(err) => {
                format!("The configuration file is not valid JSON ({}).", err)
            }
            _ => self.to_string(),
        }
    }
}

impl CatalogError {
    /// Create a user-friendly error message suitable for the command line
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::ReadError { path, .. } => {
                format!(
                    "The catalog {} could not be read. Check that it exists and is readable.",
                    path.display()
                )
            }
            CatalogError::ParseError { path, source } => {
                format!(
                    "The catalog {} is not valid JSON (line {}, column {}).",
                    path.display(),
                    source.line(),
                    source.column()
                )
            }
            CatalogError::NotAnObject { locale } => {
                format!(
                    "Expected an object of messages for '{}'. Catalogs look like {{\"en\": {{\"key\": \"text\"}}}}.",
                    locale
                )
            }
        }
    }
}
