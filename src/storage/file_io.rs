//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use crate::error::TallyError;

/// Read a file's contents, returning None if it does not exist
pub fn read_string<P: AsRef<Path>>(path: P) -> Result<Option<String>, TallyError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let mut file = File::open(path)
        .map_err(|e| TallyError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| TallyError::Storage(format!("Failed to read {}: {}", path.display(), e)))?;

    Ok(Some(contents))
}

/// Write a file atomically (write to temp, then rename)
///
/// This ensures that the file is either completely written or not modified at
/// all, preventing corruption on crashes or power failures.
pub fn write_string_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), TallyError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            TallyError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let mut file = File::create(&temp_path)
        .map_err(|e| TallyError::Storage(format!("Failed to create temp file: {}", e)))?;

    file.write_all(contents.as_bytes())
        .map_err(|e| TallyError::Storage(format!("Failed to write data: {}", e)))?;

    file.sync_all()
        .map_err(|e| TallyError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        TallyError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
