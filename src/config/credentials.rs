//! API credentials read from the process environment.

use super::model::Config;
use crate::error::{Result, SqlPromptError};

/// Credentials for the completion service.
///
/// Read once at startup, after `.env` has been loaded, and passed explicitly
/// to the client that needs them.
#[derive(Clone, Default)]
pub struct Credentials {
    api_key: Option<String>,
    source: String,
}

impl Credentials {
    /// Read the API key from the variable named by `config.api_key_env`.
    ///
    /// A missing or blank variable is not an error here; dry runs never need
    /// a key. [`Credentials::require_api_key`] reports it when a key is used.
    pub fn from_env(config: &Config) -> Self {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        Self {
            api_key,
            source: config.api_key_env.clone(),
        }
    }

    /// Build credentials from an explicit key.
    #[cfg(test)]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            source: "explicit".to_string(),
        }
    }

    /// The API key, or a config error naming the variable to set.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            SqlPromptError::ConfigError(format!(
                "{} is not set\n\n\
                 Export it in your shell or add it to a .env file:\n  \
                 {}=<your API key>",
                self.source, self.source
            ))
        })
    }
}

// The key itself never reaches logs or error output.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("source", &self.source)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
