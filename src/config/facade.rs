//! Config loading facade: layered sources with defaults.

use std::path::{Path, PathBuf};

use super::{merge, sources, AnnumConfig};
use crate::error::SelectionError;

/// Loads and validates configuration from the layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (lowest to highest): built-in defaults, global XDG file,
    /// workspace `config/config.toml`, workspace `config/{ANNUM_ENV}.toml`.
    /// The merged result is validated before it is returned.
    pub fn load(workspace_root: &Path) -> Result<AnnumConfig, SelectionError> {
        let mut builder = merge::builder_with_defaults()?;
        builder = sources::global_file::add_to_builder(builder)?;
        builder = sources::workspace_file::add_to_builder(builder, workspace_root)?;

        let config: AnnumConfig = builder.build()?.try_deserialize()?;

        config.validate().map_err(|errors| {
            let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            SelectionError::Config(format!(
                "Configuration validation failed:\n{}",
                msgs.join("\n")
            ))
        })?;

        Ok(config)
    }

    /// Load configuration from a single TOML file, with serde defaults for
    /// anything the file omits.
    pub fn load_from_file(path: &Path) -> Result<AnnumConfig, SelectionError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            SelectionError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;
        toml::from_str(&raw).map_err(|e| {
            SelectionError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })
    }

    /// Path of the global config file, if a home directory is known.
    pub fn xdg_config_path() -> Option<PathBuf> {
        sources::global_file::global_config_path()
    }
}
