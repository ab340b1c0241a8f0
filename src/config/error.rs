use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading header configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file does not exist.
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
    /// Path could not be expanded (unset variable, bad encoding).
    #[error("Invalid config path: {0}")]
    InvalidPath(String),
    /// File exists but is not valid JSON for `HeaderConfig`.
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Parsed, but a value is out of range.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
    /// Failed to serialise the configuration.
    #[error("Failed to serialise configuration: {0}")]
    Serialise(#[from] serde_json::Error),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
