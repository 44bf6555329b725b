//! Atomic file writes.
//!
//! Content is written to `.{filename}.tmp` next to the target, synced to
//! disk, then renamed over the target. `std::fs::rename` replaces an existing
//! destination on both POSIX and Windows, so the target either keeps its old
//! content or holds the complete new content.

use crate::error::{Result, SqlPromptError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`SqlPromptError::SinkError`] when the directory, temp file, or
/// final rename cannot be completed. The temp file is removed on failure.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            SqlPromptError::SinkError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = generate_temp_path(path)?;
    write_and_sync(&temp_path, content)?;
    replace(&temp_path, path)
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Temp file path in the same directory as the target: `.{filename}.tmp`.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            SqlPromptError::SinkError(format!("invalid output path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        SqlPromptError::SinkError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content).map_err(|e| {
        let _ = fs::remove_file(path);
        SqlPromptError::SinkError(format!("failed to write to temporary file: {}", e))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(path);
        SqlPromptError::SinkError(format!("failed to sync temporary file to disk: {}", e))
    })?;

    Ok(())
}

fn replace(source: &Path, target: &Path) -> Result<()> {
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        SqlPromptError::SinkError(format!(
            "failed to replace '{}': {}",
            target.display(),
            e
        ))
    })?;

    // Persist the directory entry as well; best effort.
    #[cfg(unix)]
    if let Some(parent) = target.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("queries.txt");

        atomic_write(&file_path, b"SELECT 1;").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "SELECT 1;");
    }

    #[test]
    fn test_atomic_write_replace_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("queries.txt");
        fs::write(&file_path, "stale results").unwrap();

        atomic_write_file(&file_path, "fresh results").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "fresh results");
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out").join("run").join("queries.txt");

        atomic_write_file(&file_path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "nested");
    }

    #[test]
    fn test_atomic_write_temp_file_cleanup() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("queries.txt");

        atomic_write(&file_path, b"content").unwrap();

        assert!(!temp_dir.path().join(".queries.txt.tmp").exists());
    }

    #[test]
    fn test_atomic_write_into_missing_readonly_location_is_sink_error() {
        let temp_dir = TempDir::new().unwrap();
        // A regular file cannot act as a parent directory.
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();

        let err = atomic_write_file(blocker.join("queries.txt"), "data").unwrap_err();
        assert!(matches!(err, SqlPromptError::SinkError(_)));
    }

    #[test]
    fn test_generate_temp_path() {
        let temp = generate_temp_path(Path::new("/some/path/batch_queries.txt")).unwrap();

        assert_eq!(temp.parent().unwrap(), Path::new("/some/path"));
        assert_eq!(
            temp.file_name().unwrap().to_str().unwrap(),
            ".batch_queries.txt.tmp"
        );
    }
}
