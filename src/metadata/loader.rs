//! Batch metadata files.
//!
//! A batch file holds a single JSON array of metadata objects. Keys follow
//! [`MetadataField::key`](super::MetadataField::key); unknown keys are
//! ignored and `null` values count as absent.

use super::record::MetadataRecord;
use crate::error::{Result, SqlPromptError};
use std::path::Path;

/// Load every record from a batch file.
///
/// # Errors
///
/// * `UserError` if the file cannot be read, is not a JSON array of metadata
///   objects, or contains no records.
pub fn load_batch_file<P: AsRef<Path>>(path: P) -> Result<Vec<MetadataRecord>> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path).map_err(|e| {
        SqlPromptError::UserError(format!(
            "failed to read metadata file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let records = parse_batch(&content).map_err(|e| match e {
        SqlPromptError::UserError(msg) if msg == NO_METADATA => {
            SqlPromptError::UserError(format!("{} in '{}'", NO_METADATA, path.display()))
        }
        SqlPromptError::UserError(msg) => {
            SqlPromptError::UserError(format!("{} ('{}')", msg, path.display()))
        }
        other => other,
    })?;

    tracing::info!(path = %path.display(), records = records.len(), "loaded batch metadata");
    Ok(records)
}

const NO_METADATA: &str = "No metadata found";

/// Parse the contents of a batch file.
///
/// A top-level `null` is treated like an empty array.
pub fn parse_batch(content: &str) -> Result<Vec<MetadataRecord>> {
    let records: Option<Vec<MetadataRecord>> = serde_json::from_str(content).map_err(|e| {
        SqlPromptError::UserError(format!(
            "invalid metadata file: expected a JSON array of metadata objects: {}",
            e
        ))
    })?;

    match records {
        Some(records) if !records.is_empty() => Ok(records),
        _ => Err(SqlPromptError::UserError(NO_METADATA.to_string())),
    }
}
