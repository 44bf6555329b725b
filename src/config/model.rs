//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for sqlprompt.
///
/// This struct represents the contents of `sqlprompt.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Model settings
    // =========================================================================
    /// Model name appended to the API base URL.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL for `{base}/{model}:generateContent` requests.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Environment variable the API key is read from.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Request timeout. No timeout when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,

    // =========================================================================
    // Generation settings
    // =========================================================================
    /// Sampling temperature passed to the model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Cap on generated tokens per completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,

    // =========================================================================
    // Output settings
    // =========================================================================
    /// Suffix replacing the batch input file's extension.
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_base_url: default_api_base_url(),
            api_key_env: default_api_key_env(),
            timeout_seconds: None,
            temperature: None,
            max_output_tokens: None,
            output_suffix: default_output_suffix(),
        }
    }
}
