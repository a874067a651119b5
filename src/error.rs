// src/error.rs

//! Error types for log parsing and package queries

use thiserror::Error;

/// Errors produced by the rpmlog library
#[derive(Error, Debug)]
pub enum Error {
    /// The line does not match any supported log format, or the package
    /// token has no recognizable name/version/arch boundaries
    #[error("Malformed log line ({reason}): {line:?}")]
    MalformedLineError { line: String, reason: String },

    /// The external query process could not be started or exited with an error
    #[error("Query process failed: {0}")]
    QueryProcessError(String),

    /// Operation name not in the fixed operation table
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// I/O error while reading input or rendering output
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn malformed(line: &str, reason: impl Into<String>) -> Self {
        Error::MalformedLineError {
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, Error>;
