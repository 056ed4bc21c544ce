//! Configuration validation for js-toggle

use anyhow::{bail, Result};

use super::ToolConfig;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for field '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Checks a loaded [`ToolConfig`] before any file is touched
#[derive(Debug, Default)]
pub struct ConfigValidator;

impl ConfigValidator {
    pub fn new() -> Self {
        Self
    }

    /// Collect every problem with `config`
    pub fn validate(&self, config: &ToolConfig) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if config.cache_file.as_os_str().is_empty() {
            errors.push(ConfigValidationError::MissingField {
                field: "cache_file".to_string(),
            });
        }

        for (field, value) in [
            ("toggle_key", &config.toggle_key),
            ("exclude_key", &config.exclude_key),
            ("wrapper_key", &config.wrapper_key),
        ] {
            if value.trim().is_empty() {
                errors.push(ConfigValidationError::MissingField {
                    field: field.to_string(),
                });
            }
        }

        // The raw-text marker quotes the key verbatim
        if config.toggle_key.contains('"') {
            errors.push(ConfigValidationError::InvalidValue {
                field: "toggle_key".to_string(),
                reason: "must not contain double quotes".to_string(),
            });
        }

        errors
    }
}

/// Fail with every validation error joined into one message
pub fn validate_startup_config(config: &ToolConfig) -> Result<()> {
    let errors = ConfigValidator::new().validate(config);
    if errors.is_empty() {
        return Ok(());
    }

    let joined = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    bail!("Invalid js-toggle configuration: {joined}")
}
