//! Config path resolution

use std::path::PathBuf;

use super::{ConfigError, ConfigResult};

/// Returns the osmodel base directory.
///
/// `$OSMODEL_HOME` when set, otherwise `$HOME/.osmodel`.
pub fn osmodel_base_dir() -> ConfigResult<PathBuf> {
    if let Some(home) = std::env::var_os("OSMODEL_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    std::env::var_os("HOME")
        .filter(|v| !v.is_empty())
        .map(|home| PathBuf::from(home).join(".osmodel"))
        .ok_or(ConfigError::NoConfigDirectory)
}

/// Returns the core config path.
///
/// Path: `{base}/osmodel.toml`
pub fn core_config_path() -> ConfigResult<PathBuf> {
    Ok(osmodel_base_dir()?.join("osmodel.toml"))
}
