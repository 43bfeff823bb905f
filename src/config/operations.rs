//! Config loading and validation.

use super::model::Config;
use crate::error::{FlowgenError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(FlowgenError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            FlowgenError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from `path` if it exists, otherwise return defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty mapping.
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                FlowgenError::UserError(format!("failed to parse config YAML: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            FlowgenError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `total_days`, `sprint_length` and `execution.timeout` must be positive
    /// - `template_globs` must not be empty
    pub fn validate(&self) -> Result<()> {
        if self.total_days == 0 {
            return Err(invalid("total_days must be greater than 0"));
        }

        if self.sprint_length == 0 {
            return Err(invalid("sprint_length must be greater than 0"));
        }

        if self.execution.timeout == 0 {
            return Err(invalid("execution.timeout must be greater than 0"));
        }

        if self.template_globs.is_empty() {
            return Err(invalid("template_globs must contain at least one pattern"));
        }

        Ok(())
    }
}

fn invalid(reason: &str) -> FlowgenError {
    FlowgenError::UserError(format!("config validation failed: {}", reason))
}
