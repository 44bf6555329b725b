//! sqlprompt: compile SQL query metadata into prompts and collect the SQL a
//! Gemini model generates for them.
//!
//! This is the main entry point for the `sqlprompt` CLI. It loads `.env`,
//! parses arguments, dispatches to the appropriate command handler, and maps
//! errors to exit codes.

mod batch;
mod cli;
mod commands;
mod completion;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
mod logging;
pub mod metadata;
pub mod prompt;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init_logging(cli.verbose);

    // A missing .env is normal; a malformed one is worth a warning.
    if let Err(err) = dotenvy::dotenv()
        && !err.not_found()
    {
        tracing::warn!(error = %err, "failed to load .env file");
    }

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
