//! Configuration System
//!
//! Layered configuration for storage location, the renderable year range,
//! and logging. Files merge in precedence order: built-in defaults, then the
//! global XDG file, then workspace files, with runtime validation on load.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::logging::LoggingConfig;
use crate::types::Year;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnumConfig {
    /// System-wide settings
    #[serde(default)]
    pub system: SystemConfig,

    /// Renderable toggle range
    #[serde(default)]
    pub years: YearRangeConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AnnumConfig {
    fn default() -> Self {
        Self {
            system: SystemConfig::default(),
            years: YearRangeConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// System-wide configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SystemConfig {
    /// Storage paths
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Preference database location
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
}

fn default_store_path() -> PathBuf {
    PathBuf::from(".annum/store")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
        }
    }
}

/// Inclusive year range the rendering layer shows toggles for.
///
/// Years selected outside this range still round-trip through storage; they
/// just have no toggle row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct YearRangeConfig {
    #[serde(default = "default_first_year")]
    pub first: Year,

    #[serde(default = "default_last_year")]
    pub last: Year,
}

fn default_first_year() -> Year {
    2016
}

fn default_last_year() -> Year {
    2024
}

impl Default for YearRangeConfig {
    fn default() -> Self {
        Self {
            first: default_first_year(),
            last: default_last_year(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Storage(String),
    Years(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Storage(msg) => write!(f, "Storage: {}", msg),
            ValidationError::Years(msg) => write!(f, "Years: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl AnnumConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.system.storage.store_path.as_os_str().is_empty() {
            errors.push(ValidationError::Storage(
                "Store path cannot be empty".to_string(),
            ));
        }

        if self.years.first > self.years.last {
            errors.push(ValidationError::Years(format!(
                "Inverted range: first ({}) is after last ({})",
                self.years.first, self.years.last
            )));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
