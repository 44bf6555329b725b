//! Exit code constants for the sqlprompt CLI.
//!
//! - 0: Success
//! - 1: User error (missing fields, bad batch file, empty batch)
//! - 2: Completion failure (network, auth, quota, malformed response)
//! - 3: Configuration failure (bad config file, missing API key)
//! - 4: Sink failure (output file could not be written)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: invalid metadata input or bad arguments.
pub const USER_ERROR: i32 = 1;

/// The generative-language service call failed.
pub const COMPLETION_FAILURE: i32 = 2;

/// Configuration could not be loaded or credentials are missing.
pub const CONFIG_FAILURE: i32 = 3;

/// Results were produced but could not be written.
pub const SINK_FAILURE: i32 = 4;
