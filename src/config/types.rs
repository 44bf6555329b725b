//! Configuration constants and default value functions.

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "sqlprompt.yaml";

/// Model used when the config does not name one.
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro";

/// Base URL of the Generative Language REST API (model name is appended).
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Environment variable holding the API key.
pub const DEFAULT_API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Suffix that replaces the batch input file's extension.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_queries.txt";

/// Highest temperature accepted by the service.
pub const MAX_TEMPERATURE: f32 = 2.0;

pub fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

pub fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

pub fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

pub fn default_output_suffix() -> String {
    DEFAULT_OUTPUT_SUFFIX.to_string()
}
