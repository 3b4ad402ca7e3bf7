//! Error types for the year-selection persistence component.

use thiserror::Error;

/// Storage-related errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid stored value for key {key:?}: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Storage I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Component-level errors surfaced to embedding applications
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<config::ConfigError> for SelectionError {
    fn from(err: config::ConfigError) -> Self {
        SelectionError::Config(err.to_string())
    }
}
