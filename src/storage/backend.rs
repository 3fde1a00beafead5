//! Storage backends
//!
//! The store talks to its durable medium through the `StoreBackend` trait:
//! a flat key-value space of JSON payloads. `FileBackend` keeps one file per
//! key in the data directory; `MemoryBackend` backs tests and embedding.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TallyError;

use super::file_io::{read_string, write_string_atomic};

/// Key-value port the store persists through
pub trait StoreBackend {
    /// Read the payload stored under a key, None if the key has never been
    /// written
    fn read(&self, key: &str) -> Result<Option<String>, TallyError>;

    /// Durably replace the payload stored under a key
    fn write(&self, key: &str, payload: &str) -> Result<(), TallyError>;
}

/// One JSON file per key inside a data directory
#[derive(Debug, Clone)]
pub struct FileBackend {
    data_dir: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at the given data directory
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

impl StoreBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, TallyError> {
        read_string(self.path_for(key))
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), TallyError> {
        write_string_atomic(self.path_for(key), payload)
    }
}

/// In-memory backend for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoreBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, TallyError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), TallyError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        entries.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_backend_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FileBackend::new(temp_dir.path().to_path_buf());

        assert_eq!(backend.read("transactions").unwrap(), None);

        backend.write("transactions", "[]").unwrap();
        assert_eq!(backend.read("transactions").unwrap().as_deref(), Some("[]"));
        assert!(temp_dir.path().join("transactions.json").exists());
    }

    #[test]
    fn test_file_backend_keys_are_independent() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FileBackend::new(temp_dir.path().to_path_buf());

        backend.write("incomeCategories", r#"["Salary"]"#).unwrap();
        assert_eq!(backend.read("monthlyBudgets").unwrap(), None);
    }

    #[test]
    fn test_memory_backend_round_trip() {
        let backend = MemoryBackend::new();

        assert_eq!(backend.read("transactions").unwrap(), None);
        backend.write("transactions", "[]").unwrap();
        assert_eq!(backend.read("transactions").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_memory_backend_overwrite() {
        let backend = MemoryBackend::new();
        backend.write("monthlyBudgets", r#"{"2025-01":100}"#).unwrap();
        backend.write("monthlyBudgets", r#"{"2025-01":200}"#).unwrap();
        assert_eq!(
            backend.read("monthlyBudgets").unwrap().as_deref(),
            Some(r#"{"2025-01":200}"#)
        );
    }
}
