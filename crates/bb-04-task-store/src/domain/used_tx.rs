//! Used-transaction registry.

use crate::ports::KeyValueStore;
use parking_lot::Mutex;
use shared_types::StorageError;
use std::sync::Arc;
use tracing::debug;

/// Key prefix for consumed funding transaction identifiers.
const PREFIX: &str = "usedtx/";

/// Append-only set of funding transaction identifiers that have backed a
/// task. An identifier, once inserted, is never removed.
pub struct UsedTxRegistry {
    store: Arc<dyn KeyValueStore>,
    // Serializes the check-and-insert; the KeyValueStore alone only
    // guarantees single-key atomicity.
    insert_lock: Mutex<()>,
}

impl UsedTxRegistry {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            insert_lock: Mutex::new(()),
        }
    }

    fn key(tx_id: &str) -> String {
        format!("{PREFIX}{tx_id}")
    }

    /// Atomically inserts `tx_id` if absent; returns whether it was fresh.
    pub fn insert_if_absent(&self, tx_id: &str) -> Result<bool, StorageError> {
        let key = Self::key(tx_id);
        let _guard = self.insert_lock.lock();
        if self.store.exists(&key)? {
            return Ok(false);
        }
        self.store.put(&key, "1")?;
        debug!(%tx_id, "Funding transaction consumed");
        Ok(true)
    }

    /// Returns true if `tx_id` has already funded a task.
    pub fn contains(&self, tx_id: &str) -> Result<bool, StorageError> {
        self.store.exists(&Self::key(tx_id))
    }

    /// Number of consumed identifiers.
    pub fn len(&self) -> Result<usize, StorageError> {
        Ok(self.store.prefix_scan(PREFIX)?.len())
    }

    /// Returns true if no identifier was ever consumed.
    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len()? == 0)
    }
}
