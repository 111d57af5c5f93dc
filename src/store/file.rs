//! File-backed store
//!
//! Keeps the whole map in one JSON document on disk. Every mutation writes the
//! document to a temporary file, syncs it, and renames it over the original.
//!
//! All file I/O is blocking and runs on the calling thread. Failed writes are
//! retried immediately, without sleeping.

use log::{error, info, warn};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::KvStore;
use crate::error::StoreError;

const WRITE_RETRIES: u32 = 3;

/// A `KvStore` persisted to a single JSON file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`, creating parent directories as needed.
    ///
    /// A missing file opens as an empty store; a file that is not a JSON object of
    /// strings is rejected with `StoreError::Corrupt`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let entries = match fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|e| StoreError::Corrupt(format!("{}: {}", path.display(), e)))?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("Creating new store at {}", path.display());
                BTreeMap::new()
            }
            Err(e) => return Err(StoreError::Io(e)),
        };

        info!("Opened store {} ({} keys)", path.display(), entries.len());

        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_document(&self, temp_path: &Path, document: &str) -> std::io::Result<()> {
        let mut file = File::create(temp_path)?;
        file.write_all(document.as_bytes())?;
        file.sync_all()?;
        fs::rename(temp_path, &self.path)
    }

    fn persist(&self) -> Result<(), StoreError> {
        let document = serde_json::to_string_pretty(&self.entries)?;
        let temp_path = self.temp_path();

        for attempt in 1..=WRITE_RETRIES {
            match self.write_document(&temp_path, &document) {
                Ok(()) => return Ok(()),
                Err(e) if attempt < WRITE_RETRIES && e.kind() == ErrorKind::PermissionDenied => {
                    warn!(
                        "Write to {} denied (attempt {}), retrying",
                        self.path.display(),
                        attempt
                    );
                }
                Err(e) => {
                    error!("Failed to persist store {}: {}", self.path.display(), e);
                    return Err(StoreError::Io(e));
                }
            }
        }

        Err(StoreError::Io(std::io::Error::other(
            "failed to persist store after retries",
        )))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let previous = self.entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.persist() {
            // keep memory in step with disk
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        let Some(previous) = self.entries.remove(key) else {
            return Ok(());
        };
        if let Err(e) = self.persist() {
            self.entries.insert(key.to_string(), previous);
            return Err(e);
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.entries.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vault").join("store.json");

        {
            let mut store = FileStore::open(&path).unwrap();
            store.set("userpass:a@b.c", "secret").unwrap();
            store.set("gone", "x").unwrap();
            store.delete("gone").unwrap();
        }

        let store = FileStore::open(&path).unwrap();
        assert_eq!(
            store.get("userpass:a@b.c").unwrap(),
            Some("secret".to_string())
        );
        assert_eq!(store.get("gone").unwrap(), None);
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_failed_write_leaves_memory_unchanged() {
        let dir = tempdir().unwrap();
        let vault_dir = dir.path().join("vault");
        let mut store = FileStore::open(vault_dir.join("store.json")).unwrap();
        store.set("kept", "1").unwrap();

        fs::remove_dir_all(&vault_dir).unwrap();

        assert!(matches!(store.set("new", "2"), Err(StoreError::Io(_))));
        assert_eq!(store.get("new").unwrap(), None);
        assert!(matches!(store.delete("kept"), Err(StoreError::Io(_))));
        assert_eq!(store.get("kept").unwrap(), Some("1".to_string()));
    }

    #[test]
    fn test_missing_and_empty_files_open_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        assert!(FileStore::open(&path).unwrap().keys().unwrap().is_empty());

        fs::write(&path, "  \n").unwrap();
        assert!(FileStore::open(&path).unwrap().keys().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_file_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(matches!(
            FileStore::open(&path),
            Err(StoreError::Corrupt(_))
        ));
    }
}
