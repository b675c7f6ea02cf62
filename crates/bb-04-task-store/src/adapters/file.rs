//! File-backed key-value store.
//!
//! Persists the whole key space as one JSON document. Every mutation
//! rewrites the document through a temp file, fsync, and atomic rename, so
//! a crash mid-write can only lose the in-flight mutation, never committed
//! state. An `fs2` advisory lock on a sidecar lock file keeps a second
//! process from opening the same store.

use crate::ports::{KeyValueStore, ScanResult};
use fs2::FileExt;
use parking_lot::Mutex;
use shared_types::StorageError;
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

fn io_err(e: std::io::Error) -> StorageError {
    StorageError::Io {
        message: e.to_string(),
    }
}

/// Durable JSON-document store suitable for single-node deployments.
pub struct FileBackedKVStore {
    data: Mutex<HashMap<String, String>>,
    path: PathBuf,
    // Held open for the lifetime of the store; the advisory lock releases
    // when the handle drops.
    _lock_file: File,
}

impl FileBackedKVStore {
    /// Opens (or creates) the store at `path`, loading any existing
    /// document.
    ///
    /// # Errors
    /// - `Io` if the directory cannot be created or the lock is held by
    ///   another process
    /// - `Corrupt` if an existing document does not parse
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let lock_path = path.with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(io_err)?;
        lock_file.try_lock_exclusive().map_err(|_| StorageError::Io {
            message: format!("store already in use: {}", lock_path.display()),
        })?;

        let data = match std::fs::read_to_string(&path) {
            Ok(contents) if !contents.trim().is_empty() => {
                serde_json::from_str(&contents).map_err(|e| StorageError::Corrupt {
                    key: path.display().to_string(),
                    message: e.to_string(),
                })?
            }
            _ => HashMap::new(),
        };
        if data.is_empty() {
            info!(path = %path.display(), "Opened empty store");
        } else {
            info!(path = %path.display(), keys = data.len(), "Loaded store from disk");
        }

        Ok(Self {
            data: Mutex::new(data),
            path,
            _lock_file: lock_file,
        })
    }

    fn persist(&self, data: &HashMap<String, String>) -> Result<(), StorageError> {
        let document = serde_json::to_string_pretty(data)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        let temp_path = self.path.with_extension("tmp");
        let mut file = File::create(&temp_path).map_err(io_err)?;
        file.write_all(document.as_bytes()).map_err(io_err)?;
        file.sync_all().map_err(io_err)?;
        std::fs::rename(&temp_path, &self.path).map_err(io_err)?;
        debug!(path = %self.path.display(), keys = data.len(), "Persisted store");
        Ok(())
    }
}

impl KeyValueStore for FileBackedKVStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.data.lock().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut data = self.data.lock();
        data.insert(key.to_string(), value.to_string());
        self.persist(&data)
    }

    fn delete(&self, key: &str) -> Result<bool, StorageError> {
        let mut data = self.data.lock();
        let removed = data.remove(key).is_some();
        if removed {
            self.persist(&data)?;
        }
        Ok(removed)
    }

    fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.data.lock().contains_key(key))
    }

    fn prefix_scan(&self, prefix: &str) -> Result<ScanResult, StorageError> {
        Ok(self
            .data
            .lock()
            .iter()
            .filter(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}
