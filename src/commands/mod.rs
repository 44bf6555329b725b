//! Command implementations for sqlprompt.
//!
//! This module builds the per-run context (config and credentials, each
//! loaded once) and routes CLI commands to their implementations.

mod batch;
mod interactive;

use crate::cli::{Cli, Command, InteractiveArgs};
use crate::completion::{CompletionClient, GeminiClient};
use crate::config::{Config, Credentials};
use crate::error::{Result, SqlPromptError};

/// Everything a command needs from startup, passed explicitly.
#[derive(Debug)]
pub struct RunContext {
    pub config: Config,
    pub credentials: Credentials,
}

impl RunContext {
    /// Resolve config (file, then `--model`) and read credentials.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| {
            SqlPromptError::ConfigError(format!("failed to determine current directory: {}", e))
        })?;

        let config = Config::resolve(cli.config.as_deref(), &cwd)?
            .with_model_override(cli.model.clone())?;
        let credentials = Credentials::from_env(&config);
        tracing::debug!(model = %config.model, ?credentials, "run context ready");

        Ok(Self {
            config,
            credentials,
        })
    }

    /// The live completion client, or `None` for a dry run.
    fn client(&self, dry_run: bool) -> Result<Option<GeminiClient>> {
        if dry_run {
            return Ok(None);
        }
        GeminiClient::new(&self.config, &self.credentials).map(Some)
    }
}

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution.
pub fn dispatch(cli: Cli) -> Result<()> {
    let ctx = RunContext::from_cli(&cli)?;

    match cli.command {
        Some(Command::Interactive(args)) => interactive::cmd_interactive(&ctx, args),
        Some(Command::Batch(args)) => batch::cmd_batch(&ctx, args),
        None => interactive::cmd_interactive(&ctx, InteractiveArgs::default()),
    }
}

fn as_dyn(client: &Option<GeminiClient>) -> Option<&dyn CompletionClient> {
    client.as_ref().map(|c| c as &dyn CompletionClient)
}

/// Console write failures end the run like any other sink failure.
fn console_error(e: std::io::Error) -> SqlPromptError {
    SqlPromptError::SinkError(format!("failed to write to the console: {}", e))
}
