//! Batch result formatting and output.

use crate::error::Result;
use crate::fs::atomic_write_file;
use std::path::{Path, PathBuf};

/// Width of the `=` line that closes every result block.
pub const SEPARATOR_WIDTH: usize = 50;

/// Render results as labelled blocks, one per input record:
///
/// ```text
/// Query 1:
///
/// <result>
///
/// ==================================================
///
/// ```
pub fn render_report<S: AsRef<str>>(results: &[S]) -> String {
    let separator = "=".repeat(SEPARATOR_WIDTH);
    let mut report = String::new();

    for (index, result) in results.iter().enumerate() {
        report.push_str(&format!(
            "Query {}:\n\n{}\n\n{}\n\n",
            index + 1,
            result.as_ref(),
            separator
        ));
    }

    report
}

/// Output path for a batch input: the extension is replaced by `suffix`.
///
/// `data/metadata.json` with `_queries.txt` becomes `data/metadata_queries.txt`.
pub fn output_path_for(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "metadata".to_string());

    input.with_file_name(format!("{}{}", stem, suffix))
}

/// Write the rendered report atomically to `path`.
///
/// # Errors
///
/// `SinkError` if the file cannot be written.
pub fn write_report<S: AsRef<str>>(path: &Path, results: &[S]) -> Result<()> {
    atomic_write_file(path, &render_report(results))?;
    tracing::info!(path = %path.display(), blocks = results.len(), "wrote batch results");
    Ok(())
}
