//! Platform-aware configuration paths for js-toggle

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Overrides the directory holding `config.toml`
pub const CONFIG_DIR_ENV: &str = "JS_TOGGLE_CONFIG_DIR";

/// Overrides the path cache location
pub const CACHE_FILE_ENV: &str = "JS_TOGGLE_CACHE_FILE";

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Get the appropriate configuration directory for the current platform
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(custom_dir) = env::var(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(custom_dir));
    }

    dirs::config_dir()
        .map(|p| p.join("js-toggle"))
        .context("Unable to determine config directory for the current platform")
}

/// Location of the tool's own settings file
pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Path cache override from the environment, if set and non-empty
pub fn cache_file_override() -> Option<PathBuf> {
    env::var_os(CACHE_FILE_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
