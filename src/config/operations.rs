//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::{DEFAULT_CONFIG_FILE, MAX_TEMPERATURE};
use crate::error::{Result, SqlPromptError};
use std::path::Path;
use std::time::Duration;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(SqlPromptError::ConfigError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SqlPromptError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the config for a run.
    ///
    /// An explicit path must exist. Without one, `sqlprompt.yaml` in `dir` is
    /// used when present and defaults otherwise.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "loading config file");
            Self::load(candidate)
        } else {
            tracing::debug!("no config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            SqlPromptError::ConfigError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `model`, `api_base_url` and `api_key_env` must be non-empty
    /// - `output_suffix` must be non-empty and contain no path separators
    /// - `timeout_seconds` and `max_output_tokens` must be positive when set
    /// - `temperature` must lie in `0.0..=2.0` when set
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(invalid("model must not be empty"));
        }

        if self.api_base_url.trim().is_empty() {
            return Err(invalid("api_base_url must not be empty"));
        }

        if self.api_key_env.trim().is_empty() {
            return Err(invalid("api_key_env must not be empty"));
        }

        if self.output_suffix.is_empty() {
            return Err(invalid("output_suffix must not be empty"));
        }
        if self.output_suffix.contains(['/', '\\']) {
            return Err(SqlPromptError::ConfigError(format!(
                "config validation failed: output_suffix must not contain path separators (found '{}')",
                self.output_suffix
            )));
        }

        if self.timeout_seconds == Some(0) {
            return Err(invalid("timeout_seconds must be greater than 0"));
        }

        if self.max_output_tokens == Some(0) {
            return Err(invalid("max_output_tokens must be greater than 0"));
        }

        if let Some(temperature) = self.temperature
            && !(0.0..=MAX_TEMPERATURE).contains(&temperature)
        {
            return Err(SqlPromptError::ConfigError(format!(
                "config validation failed: temperature must be between 0.0 and {} (found {})",
                MAX_TEMPERATURE, temperature
            )));
        }

        Ok(())
    }

    /// Replace the configured model, e.g. from `--model`.
    pub fn with_model_override(mut self, model: Option<String>) -> Result<Self> {
        if let Some(model) = model {
            self.model = model;
            self.validate()?;
        }
        Ok(self)
    }

    /// Request timeout, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    /// Full `generateContent` endpoint for the configured model.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.api_base_url.trim_end_matches('/'),
            self.model
        )
    }
}

fn invalid(message: &str) -> SqlPromptError {
    SqlPromptError::ConfigError(format!("config validation failed: {}", message))
}
