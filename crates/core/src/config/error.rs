//! Error types for step list loading.
//!
//! This module defines all errors that can occur while reading and parsing
//! step list files.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during step list loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read a step list file from disk.
    #[error("Failed to read step list file at {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse a YAML step list.
    #[error("Failed to parse YAML step list at {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// Failed to parse a JSON step list.
    #[error("Failed to parse JSON step list at {path}: {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The file extension does not name a supported format.
    #[error("Unsupported step list format at {path}: expected .yaml, .yml, or .json")]
    UnsupportedFormat { path: PathBuf },
}

/// Type alias for Result with ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;
