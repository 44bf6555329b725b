//! Sequential batch driver.

use crate::completion::CompletionClient;
use crate::error::Result;
use crate::metadata::MetadataRecord;
use crate::prompt::compile_prompt;

/// Run every record through the compiler and the completion client.
///
/// Records are processed one at a time in input order and the returned
/// results share that order. The first failing completion aborts the batch:
/// its error is returned and results gathered so far are dropped.
pub fn run_batch<C>(records: &[MetadataRecord], client: &C) -> Result<Vec<String>>
where
    C: CompletionClient + ?Sized,
{
    let mut results = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let number = index + 1;
        let prompt = compile_prompt(record);
        tracing::debug!(record = number, prompt_len = prompt.as_str().len(), "compiled prompt");

        let text = client.complete(prompt.as_str()).inspect_err(|e| {
            tracing::error!(record = number, total = records.len(), error = %e, "completion failed, aborting batch");
        })?;

        tracing::info!(record = number, total = records.len(), result_len = text.len(), "completed");
        results.push(text);
    }

    Ok(results)
}
