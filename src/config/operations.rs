//! Config loading, validation, and credential resolution.

use super::model::Config;
use super::types::{API_KEY_ENV_VARS, is_valid_aspect_ratio};
use crate::error::{QuillError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(QuillError::ConfigError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            QuillError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from `path` if it exists, otherwise fall back to defaults.
    ///
    /// An explicitly requested file that is missing is still an error; pass
    /// `required = true` for paths the user typed.
    pub fn load_or_default<P: AsRef<Path>>(path: P, required: bool) -> Result<Self> {
        let path = path.as_ref();
        if !required && !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| QuillError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            QuillError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `api_base` must be non-empty
    /// - `temperature` must be within `0.0..=2.0`
    /// - `trend_count` must be positive
    /// - aspect ratios must look like `W:H`
    pub fn validate(&self) -> Result<()> {
        if self.api_base.trim().is_empty() {
            return Err(QuillError::ConfigError(
                "config validation failed: api_base must not be empty".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(QuillError::ConfigError(format!(
                "config validation failed: temperature must be between 0.0 and 2.0 (found {})",
                self.temperature
            )));
        }

        if self.trend_count == 0 {
            return Err(QuillError::ConfigError(
                "config validation failed: trend_count must be greater than 0".to_string(),
            ));
        }

        for (field, value) in [
            ("photo_aspect_ratio", &self.photo_aspect_ratio),
            ("chart_aspect_ratio", &self.chart_aspect_ratio),
        ] {
            if !is_valid_aspect_ratio(value) {
                return Err(QuillError::ConfigError(format!(
                    "config validation failed: {} must look like '16:9' (found '{}')",
                    field, value
                )));
            }
        }

        Ok(())
    }

    /// Resolve the API key from config, then the process environment.
    pub fn resolve_api_key(&self) -> Result<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Resolve the API key using `lookup` for environment variables.
    ///
    /// Order: `api_key` field, `GEMINI_API_KEY`, `API_KEY`. Blank values are
    /// skipped. A missing key blocks every remote call.
    pub fn resolve_api_key_with<F>(&self, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let from_config = self.api_key.clone().into_iter();
        let from_env = API_KEY_ENV_VARS.iter().filter_map(|name| lookup(name));

        from_config
            .chain(from_env)
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
            .ok_or_else(|| {
                QuillError::ConfigError(format!(
                    "API key is missing.\n\n\
                     Set `api_key` in quill.yaml or export one of: {}",
                    API_KEY_ENV_VARS.join(", ")
                ))
            })
    }
}
