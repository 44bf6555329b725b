//! Tests for config functionality.

use crate::config::types::{DEFAULT_API_BASE_URL, DEFAULT_CONFIG_FILE};
use crate::config::{Config, Credentials};
use crate::error::SqlPromptError;
use serial_test::serial;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.model, "gemini-1.5-pro");
    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.api_key_env, "GOOGLE_API_KEY");
    assert_eq!(config.timeout_seconds, None);
    assert_eq!(config.temperature, None);
    assert_eq!(config.max_output_tokens, None);
    assert_eq!(config.output_suffix, "_queries.txt");
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_empty_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
model: gemini-1.5-flash
temperature: 0.2
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.model, "gemini-1.5-flash");
    assert_eq!(config.temperature, Some(0.2));

    // Unspecified values should use defaults
    assert_eq!(config.api_key_env, "GOOGLE_API_KEY");
    assert_eq!(config.output_suffix, "_queries.txt");
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
model: gemini-1.5-flash
api_base_url: http://localhost:8080/v1beta/models
api_key_env: MY_GEMINI_KEY
timeout_seconds: 90
temperature: 1.0
max_output_tokens: 2048
output_suffix: .sql.txt
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.model, "gemini-1.5-flash");
    assert_eq!(config.api_base_url, "http://localhost:8080/v1beta/models");
    assert_eq!(config.api_key_env, "MY_GEMINI_KEY");
    assert_eq!(config.timeout_seconds, Some(90));
    assert_eq!(config.temperature, Some(1.0));
    assert_eq!(config.max_output_tokens, Some(2048));
    assert_eq!(config.output_suffix, ".sql.txt");
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
model: gemini-1.5-pro
future_option: true
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.model, "gemini-1.5-pro");
}

#[test]
fn test_invalid_yaml_is_config_error() {
    let err = Config::from_yaml("model: [unclosed").unwrap_err();
    assert!(matches!(err, SqlPromptError::ConfigError(_)));
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_validation_rejects_empty_model() {
    let err = Config::from_yaml("model: \"\"").unwrap_err();
    assert!(err.to_string().contains("model must not be empty"));
}

#[test]
fn test_validation_rejects_empty_api_key_env() {
    let err = Config::from_yaml("api_key_env: \"  \"").unwrap_err();
    assert!(err.to_string().contains("api_key_env must not be empty"));
}

#[test]
fn test_validation_rejects_suffix_with_separator() {
    let err = Config::from_yaml("output_suffix: out/results.txt").unwrap_err();
    assert!(err.to_string().contains("path separators"));
}

#[test]
fn test_validation_rejects_zero_timeout() {
    let err = Config::from_yaml("timeout_seconds: 0").unwrap_err();
    assert!(err.to_string().contains("timeout_seconds"));
}

#[test]
fn test_validation_rejects_zero_max_output_tokens() {
    let err = Config::from_yaml("max_output_tokens: 0").unwrap_err();
    assert!(err.to_string().contains("max_output_tokens"));
}

#[test]
fn test_validation_rejects_out_of_range_temperature() {
    let err = Config::from_yaml("temperature: 2.5").unwrap_err();
    assert!(err.to_string().contains("temperature must be between"));

    let err = Config::from_yaml("temperature: -0.1").unwrap_err();
    assert!(err.to_string().contains("temperature must be between"));
}

#[test]
fn test_timeout_conversion() {
    let mut config = Config::default();
    assert_eq!(config.timeout(), None);

    config.timeout_seconds = Some(30);
    assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
}

#[test]
fn test_endpoint_url() {
    let config = Config::default();
    assert_eq!(
        config.endpoint_url(),
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-pro:generateContent"
    );

    let config = Config {
        api_base_url: "http://localhost:9000/models/".to_string(),
        model: "test-model".to_string(),
        ..Config::default()
    };
    assert_eq!(
        config.endpoint_url(),
        "http://localhost:9000/models/test-model:generateContent"
    );
}

#[test]
fn test_model_override() {
    let config = Config::default()
        .with_model_override(Some("gemini-1.5-flash".to_string()))
        .unwrap();
    assert_eq!(config.model, "gemini-1.5-flash");

    let config = Config::default().with_model_override(None).unwrap();
    assert_eq!(config.model, "gemini-1.5-pro");

    assert!(
        Config::default()
            .with_model_override(Some(String::new()))
            .is_err()
    );
}

#[test]
fn test_resolve_uses_defaults_without_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::resolve(None, temp_dir.path()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_resolve_reads_config_file_in_dir() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(DEFAULT_CONFIG_FILE),
        "model: gemini-1.5-flash\n",
    )
    .unwrap();

    let config = Config::resolve(None, temp_dir.path()).unwrap();
    assert_eq!(config.model, "gemini-1.5-flash");
}

#[test]
fn test_resolve_explicit_path_must_exist() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.yaml");

    let err = Config::resolve(Some(&missing), temp_dir.path()).unwrap_err();
    assert!(matches!(err, SqlPromptError::ConfigError(_)));
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
#[serial]
fn test_credentials_from_env() {
    let config = Config {
        api_key_env: "SQLPROMPT_TEST_API_KEY".to_string(),
        ..Config::default()
    };

    // SAFETY: serialized with every other test touching the environment.
    unsafe { std::env::set_var("SQLPROMPT_TEST_API_KEY", "  secret-key \n") };
    let creds = Credentials::from_env(&config);
    assert_eq!(creds.require_api_key().unwrap(), "secret-key");

    unsafe { std::env::remove_var("SQLPROMPT_TEST_API_KEY") };
}

#[test]
#[serial]
fn test_credentials_missing_or_blank_key() {
    let config = Config {
        api_key_env: "SQLPROMPT_TEST_API_KEY".to_string(),
        ..Config::default()
    };

    unsafe { std::env::remove_var("SQLPROMPT_TEST_API_KEY") };
    let err = Credentials::from_env(&config).require_api_key().unwrap_err();
    assert!(matches!(err, SqlPromptError::ConfigError(_)));
    assert!(err.to_string().contains("SQLPROMPT_TEST_API_KEY is not set"));

    unsafe { std::env::set_var("SQLPROMPT_TEST_API_KEY", "   ") };
    assert!(Credentials::from_env(&config).require_api_key().is_err());

    unsafe { std::env::remove_var("SQLPROMPT_TEST_API_KEY") };
}

#[test]
fn test_credentials_debug_redacts_key() {
    let creds = Credentials::with_api_key("super-secret");
    let debug = format!("{:?}", creds);
    assert!(!debug.contains("super-secret"));
    assert!(debug.contains("<redacted>"));
}
