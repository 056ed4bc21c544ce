pub mod paths;
pub mod validation;

pub use paths::{cache_file_override, config_dir, config_file, CACHE_FILE_ENV, CONFIG_DIR_ENV};
pub use validation::{validate_startup_config, ConfigValidationError, ConfigValidator};

use anyhow::{Context, Result};
use clap::Subcommand;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::{
    PathCache, ToggleRule, DEFAULT_CACHE_FILE, DEFAULT_EXCLUDE_KEY, DEFAULT_TOGGLE_KEY,
    DEFAULT_WRAPPER_KEY,
};

/// Configuration actions for js-toggle
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigAction {
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Show the effective configuration
    Show,
}

/// The tool's own settings, read once at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Where the settings path is remembered
    pub cache_file: PathBuf,
    /// Glob whose exclusion is toggled
    pub toggle_key: String,
    /// Settings key holding the exclude map
    pub exclude_key: String,
    /// Key wrapping settings in `.code-workspace` files
    pub wrapper_key: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            cache_file: PathBuf::from(DEFAULT_CACHE_FILE),
            toggle_key: DEFAULT_TOGGLE_KEY.to_string(),
            exclude_key: DEFAULT_EXCLUDE_KEY.to_string(),
            wrapper_key: DEFAULT_WRAPPER_KEY.to_string(),
        }
    }
}

impl ToolConfig {
    /// Load from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))
            }
        };

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn with_env_overrides(mut self) -> Self {
        if let Some(cache_file) = cache_file_override() {
            debug!("cache file overridden by {}", CACHE_FILE_ENV);
            self.cache_file = cache_file;
        }
        self
    }

    pub fn rule(&self) -> ToggleRule {
        ToggleRule {
            toggle_key: self.toggle_key.clone(),
            exclude_key: self.exclude_key.clone(),
            wrapper_key: self.wrapper_key.clone(),
        }
    }

    pub fn path_cache(&self) -> PathCache {
        PathCache::new(&self.cache_file)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ToolConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, ToolConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "toggle_key = \"**/*.map\"\n").unwrap();

        let config = ToolConfig::load_from(&path).unwrap();
        assert_eq!(config.toggle_key, "**/*.map");
        assert_eq!(config.exclude_key, DEFAULT_EXCLUDE_KEY);
        assert_eq!(config.cache_file, PathBuf::from(DEFAULT_CACHE_FILE));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "toggle_key = ").unwrap();
        assert!(ToolConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ToolConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(toml::from_str::<ToolConfig>(&text).unwrap(), config);
    }

    #[test]
    #[serial]
    fn test_env_overrides_cache_file() {
        env::set_var(CACHE_FILE_ENV, "/tmp/elsewhere");
        let config = ToolConfig::default().with_env_overrides();
        assert_eq!(config.cache_file, PathBuf::from("/tmp/elsewhere"));
        env::remove_var(CACHE_FILE_ENV);
    }

    #[test]
    fn test_rule_from_config() {
        let rule = ToolConfig::default().rule();
        assert_eq!(rule, ToggleRule::default());
    }
}
