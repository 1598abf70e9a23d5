//! Raw account string persistence
//!
//! A store only moves the serialized string; it never parses it. Read and
//! write are not atomic with respect to each other, so a store must have a
//! single writer.

use crate::error::AccountStorageError;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Slot holding the one persisted account record
pub trait AccountStore {
    /// Load the raw record, `None` if nothing was ever written
    fn load_raw(&self) -> Result<Option<String>, AccountStorageError>;

    /// Replace the raw record
    fn save_raw(&self, raw: &str) -> Result<(), AccountStorageError>;
}

/// Account record in a single JSON file
#[derive(Debug, Clone)]
pub struct FileAccountStore {
    path: PathBuf,
}

impl FileAccountStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AccountStore for FileAccountStore {
    fn load_raw(&self) -> Result<Option<String>, AccountStorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(Some(contents))
    }

    fn save_raw(&self, raw: &str) -> Result<(), AccountStorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        // Write-then-rename so a crash never leaves a torn record
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        log::debug!("Saved account ({} bytes) to {}", raw.len(), self.path.display());
        Ok(())
    }
}

/// In-process slot, for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    slot: Mutex<Option<String>>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(raw.into())),
        }
    }
}

impl AccountStore for MemoryAccountStore {
    fn load_raw(&self) -> Result<Option<String>, AccountStorageError> {
        let slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        Ok(slot.clone())
    }

    fn save_raw(&self, raw: &str) -> Result<(), AccountStorageError> {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        *slot = Some(raw.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let store = MemoryAccountStore::new();
        assert_eq!(store.load_raw().unwrap(), None);
        store.save_raw("{}").unwrap();
        assert_eq!(store.load_raw().unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_file_store_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileAccountStore::new(dir.path().join("nested").join("account.json"));
        assert_eq!(store.load_raw().unwrap(), None);

        store.save_raw("").unwrap();
        assert_eq!(store.load_raw().unwrap().as_deref(), Some(""));
    }
}
