//! Outbound (Driven) port: the durable key-value contract.

use shared_types::StorageError;

/// Key-value scan result: `(key, value)` pairs in unspecified order.
pub type ScanResult = Vec<(String, String)>;

/// Durable string-keyed store holding one JSON document per key.
///
/// Implementations must be safe for concurrent use; writes to a single key
/// are atomic. Repositories layer their own check-then-write exclusivity on
/// top where a sequence of calls must be indivisible.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `value` under `key`, overwriting any previous value.
    fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`; returns true if it existed.
    fn delete(&self, key: &str) -> Result<bool, StorageError>;

    /// Returns true if `key` is present.
    fn exists(&self, key: &str) -> Result<bool, StorageError>;

    /// Returns every entry whose key starts with `prefix`.
    fn prefix_scan(&self, prefix: &str) -> Result<ScanResult, StorageError>;
}
