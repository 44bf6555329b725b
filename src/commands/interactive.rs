//! Implementation of the `sqlprompt interactive` command.

use super::{RunContext, as_dyn, console_error};
use crate::cli::InteractiveArgs;
use crate::completion::CompletionClient;
use crate::error::Result;
use crate::metadata::collect_interactive;
use crate::prompt::compile_prompt;
use std::io::{self, BufRead, Write};

const BANNER: &str = "🔍 Advanced Query Builder with SQL Features";

/// Collect one record from the terminal, print its prompt and the response.
pub fn cmd_interactive(ctx: &RunContext, args: InteractiveArgs) -> Result<()> {
    // Missing credentials fail before the user types anything.
    let client = ctx.client(args.dry_run)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_interactive(&mut stdin.lock(), &mut stdout.lock(), as_dyn(&client))
}

/// Interactive flow over arbitrary input/output; `client` is `None` for a
/// dry run.
pub(crate) fn run_interactive<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    client: Option<&dyn CompletionClient>,
) -> Result<()> {
    writeln!(output, "{}", BANNER).map_err(console_error)?;

    let record = collect_interactive(input, output)?;
    let prompt = compile_prompt(&record);
    writeln!(output, "\nGenerated Query Prompt:\n{}", prompt).map_err(console_error)?;

    let Some(client) = client else {
        writeln!(output, "Dry run: prompt not sent.").map_err(console_error)?;
        return Ok(());
    };

    let response = client.complete(prompt.as_str())?;
    writeln!(output, "\nGemini API Response:\n{}", response).map_err(console_error)?;
    Ok(())
}
