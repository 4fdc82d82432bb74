//! Domain-specific error types for the git-segment command-line surface.
//!
//! The render path itself never fails: every subprocess or metadata read that
//! comes back empty is treated as missing data. [`GitSegmentError`] therefore only
//! covers what can go wrong around it, loading configuration and parsing the
//! command line.
//!
//! # Public API
//! - [`GitSegmentError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GitSegmentError>`

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitSegmentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Configuration errors
    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Unknown option: '{key}'. Run 'git-segment options' to list them")]
    UnknownOption { key: String },

    #[error("Invalid override: '{input}'. Use format like: branch_icon=BR:")]
    InvalidOverride { input: String },

    #[error("Invalid value '{value}' for '{key}'. Expected true or false")]
    InvalidFlagValue { key: String, value: String },
}

/// Convenience type alias for Results using GitSegmentError
pub type Result<T> = std::result::Result<T, GitSegmentError>;

impl GitSegmentError {
    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    pub fn unknown_option(key: impl Into<String>) -> Self {
        Self::UnknownOption { key: key.into() }
    }

    pub fn invalid_override(input: impl Into<String>) -> Self {
        Self::InvalidOverride {
            input: input.into(),
        }
    }

    pub fn invalid_flag_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidFlagValue {
            key: key.into(),
            value: value.into(),
        }
    }
}
