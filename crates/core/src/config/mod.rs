//! Configuration for osmodel
//!
//! Settings are plain serde structs stored as TOML. A missing file is
//! created with defaults on first load.
//!
//! # Example
//!
//! ```ignore
//! use osmodel_core::{init_logging, CoreConfig, Model};
//!
//! let config = CoreConfig::load().unwrap_or_default();
//! init_logging(&config);
//!
//! let model = Model::with_config(config);
//! ```

mod loader;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::idf::DEFAULT_FIELD_SPACE;

pub use loader::{core_config_path, osmodel_base_dir};

/// Configuration system errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read or write config file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse TOML content
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize config to TOML
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// Neither OSMODEL_HOME nor HOME is set
    #[error("Config directory not available - set OSMODEL_HOME or HOME")]
    NoConfigDirectory,
}

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Core library configuration.
///
/// Loaded from `$OSMODEL_HOME/osmodel.toml`, falling back to
/// `$HOME/.osmodel/osmodel.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Config version for future migration support
    pub version: u32,

    /// Enable debug logging
    pub debug: bool,

    /// Column at which `!-` field comments start in printed objects
    pub printed_field_space: usize,

    /// Log a warning when a pointer field names a removed object
    pub warn_on_dangling_references: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            version: 1,
            debug: false,
            printed_field_space: DEFAULT_FIELD_SPACE,
            warn_on_dangling_references: true,
        }
    }
}

impl CoreConfig {
    /// Load the config from its default location, creating it if missing.
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(&core_config_path()?)
    }

    /// Load config from `path`, creating a default file if missing.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = toml::from_str(&content)?;
            tracing::debug!("Loaded core config from {:?}", path);
            Ok(config)
        } else {
            let default = Self::default();
            default.save_to(path)?;
            tracing::info!("Created default core config at {:?}", path);
            Ok(default)
        }
    }

    /// Save the config to its default location.
    pub fn save(&self) -> ConfigResult<()> {
        self.save_to(&core_config_path()?)
    }

    /// Save config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::debug!("Saved core config to {:?}", path);
        Ok(())
    }

    /// Reload the config from its default location.
    pub fn reload(&mut self) -> ConfigResult<()> {
        self.reload_from(&core_config_path()?)
    }

    /// Replace self with the contents of `path`.
    pub fn reload_from(&mut self, path: &Path) -> ConfigResult<()> {
        let content = std::fs::read_to_string(path)?;
        *self = toml::from_str(&content)?;
        tracing::debug!("Reloaded core config from {:?}", path);
        Ok(())
    }

    /// Default level for the log filter
    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn scratch_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("osmodel-test-{}", uuid::Uuid::new_v4()))
            .join("osmodel.toml")
    }

    #[test]
    fn test_core_config_default() {
        let config = CoreConfig::default();
        assert_eq!(config.version, 1);
        assert!(!config.debug);
        assert_eq!(config.printed_field_space, 38);
        assert!(config.warn_on_dangling_references);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn test_core_config_serialize() {
        let config = CoreConfig {
            version: 2,
            debug: true,
            ..CoreConfig::default()
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("version = 2"));
        assert!(toml_str.contains("debug = true"));
        assert!(toml_str.contains("printed_field_space = 38"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: CoreConfig = toml::from_str("debug = true").unwrap();
        assert!(config.debug);
        assert_eq!(config.version, 1);
        assert!(config.warn_on_dangling_references);
    }

    #[test]
    fn test_load_creates_missing_file() {
        let path = scratch_path();
        let config = CoreConfig::load_from(&path).unwrap();
        assert_eq!(config, CoreConfig::default());
        assert!(path.exists());
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_save_then_reload() {
        let path = scratch_path();
        let saved = CoreConfig {
            printed_field_space: 42,
            ..CoreConfig::default()
        };
        saved.save_to(&path).unwrap();

        let mut config = CoreConfig::default();
        config.reload_from(&path).unwrap();
        assert_eq!(config, saved);
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_parse_error() {
        let path = scratch_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "debug = \"sometimes\"").unwrap();
        assert!(matches!(
            CoreConfig::load_from(&path),
            Err(ConfigError::ParseError(_))
        ));
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
