//! Error types for the sqlprompt CLI.
//!
//! Every fallible operation returns [`SqlPromptError`]; only `main` turns it
//! into a message and a process exit code.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for sqlprompt operations.
#[derive(Error, Debug)]
pub enum SqlPromptError {
    /// Metadata input was invalid, missing, or empty.
    #[error("{0}")]
    UserError(String),

    /// The completion service call failed or returned something unusable.
    #[error("Completion failed: {0}")]
    CompletionError(String),

    /// Configuration or credentials could not be loaded.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Results could not be written to their destination.
    #[error("Failed to write results: {0}")]
    SinkError(String),
}

impl SqlPromptError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SqlPromptError::UserError(_) => exit_codes::USER_ERROR,
            SqlPromptError::CompletionError(_) => exit_codes::COMPLETION_FAILURE,
            SqlPromptError::ConfigError(_) => exit_codes::CONFIG_FAILURE,
            SqlPromptError::SinkError(_) => exit_codes::SINK_FAILURE,
        }
    }
}

/// Result type alias for sqlprompt operations.
pub type Result<T> = std::result::Result<T, SqlPromptError>;
