//! Diagnostic logging.
//!
//! Logs go to stderr so stdout only carries prompts, responses and
//! summaries. `RUST_LOG` overrides the verbosity flag.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sqlprompt={}", level_for(verbosity))));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(9), "debug");
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging(0);
        init_logging(2);
    }
}
