//! CLI argument parsing for sqlprompt.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// sqlprompt: turn SQL query metadata into prompts and collect generated SQL.
///
/// Metadata (columns, table, conditions, joins, aggregations, ...) is
/// compiled into a natural-language prompt and sent to a Gemini model.
/// The API key is read from the environment or a `.env` file.
#[derive(Parser, Debug)]
#[command(name = "sqlprompt")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (defaults to ./sqlprompt.yaml when present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Model name, overriding the config file.
    #[arg(long, global = true, value_name = "NAME")]
    pub model: Option<String>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Command to run; `interactive` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands for sqlprompt.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Enter metadata for a single query at the terminal.
    ///
    /// Prints the compiled prompt and the generated response.
    Interactive(InteractiveArgs),

    /// Generate queries for every metadata record in a JSON file.
    ///
    /// Results are written next to the input file, one labelled block
    /// per record. Any failure aborts the batch without writing output.
    Batch(BatchArgs),
}

/// Arguments for the `interactive` command.
#[derive(Parser, Debug, Default)]
pub struct InteractiveArgs {
    /// Print the compiled prompt without calling the model.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `batch` command.
#[derive(Parser, Debug)]
pub struct BatchArgs {
    /// JSON file containing an array of metadata objects.
    pub file: PathBuf,

    /// Write results here instead of next to the input file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the compiled prompts without calling the model or writing output.
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
