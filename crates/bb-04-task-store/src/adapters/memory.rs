//! In-memory key-value store.

use crate::ports::{KeyValueStore, ScanResult};
use parking_lot::RwLock;
use shared_types::StorageError;
use std::collections::HashMap;

/// HashMap-backed store for tests and development.
///
/// Durability is the file adapter's job; this one only provides the
/// concurrency contract.
#[derive(Default)]
pub struct MemoryKVStore {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryKVStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Returns true if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl KeyValueStore for MemoryKVStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.data.read().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.data.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.data.write().remove(key).is_some())
    }

    fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.data.read().contains_key(key))
    }

    fn prefix_scan(&self, prefix: &str) -> Result<ScanResult, StorageError> {
        Ok(self
            .data
            .read()
            .iter()
            .filter(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}
