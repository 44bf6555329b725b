//! Implementation of the `sqlprompt batch` command.

use super::{RunContext, as_dyn, console_error};
use crate::batch::{output_path_for, run_batch, write_report};
use crate::cli::BatchArgs;
use crate::completion::CompletionClient;
use crate::error::{Result, SqlPromptError};
use crate::metadata::load_batch_file;
use crate::prompt::compile_prompt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Run every record in a batch file and write the aggregated results.
pub fn cmd_batch(ctx: &RunContext, args: BatchArgs) -> Result<()> {
    let client = ctx.client(args.dry_run)?;
    let output_path = args
        .output
        .unwrap_or_else(|| output_path_for(&args.file, &ctx.config.output_suffix));

    let stdout = io::stdout();
    run_batch_file(&args.file, &output_path, as_dyn(&client), &mut stdout.lock())?;
    Ok(())
}

/// Batch flow; `client` is `None` for a dry run.
///
/// Returns the path written to, or `None` for a dry run. Nothing is written
/// unless every record completed.
pub(crate) fn run_batch_file<W: Write>(
    input: &Path,
    output_path: &Path,
    client: Option<&dyn CompletionClient>,
    out: &mut W,
) -> Result<Option<PathBuf>> {
    if output_path == input {
        return Err(SqlPromptError::UserError(format!(
            "output path '{}' is the metadata file itself\n\n\
             Fix: pass --output or choose a different output_suffix.",
            output_path.display()
        )));
    }

    let records = load_batch_file(input)?;

    let Some(client) = client else {
        for (index, record) in records.iter().enumerate() {
            writeln!(out, "Query {} prompt:\n{}", index + 1, compile_prompt(record))
                .map_err(console_error)?;
        }
        writeln!(
            out,
            "Dry run: {} prompt(s) compiled, nothing written.",
            records.len()
        )
        .map_err(console_error)?;
        return Ok(None);
    };

    let results = run_batch(&records, client)?;
    write_report(output_path, &results)?;

    writeln!(
        out,
        "Wrote {} result(s) to '{}'",
        results.len(),
        output_path.display()
    )
    .map_err(console_error)?;
    Ok(Some(output_path.to_path_buf()))
}
