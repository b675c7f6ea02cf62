//! Wallet role registry.

use crate::ports::KeyValueStore;
use shared_types::{StorageError, WalletRole};
use std::sync::Arc;

/// Key prefix for wallet role declarations.
const PREFIX: &str = "role/";

/// Advisory wallet → role mapping. Overwritable at will; authorization of
/// the overwrite is the Lifecycle Controller's concern.
pub struct RoleRegistry {
    store: Arc<dyn KeyValueStore>,
}

impl RoleRegistry {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn key(wallet: &str) -> String {
        format!("{PREFIX}{wallet}")
    }

    /// Declares (or replaces) the role of `wallet`.
    pub fn set_role(&self, wallet: &str, role: WalletRole) -> Result<(), StorageError> {
        self.store.put(&Self::key(wallet), role.as_str())
    }

    /// The declared role of `wallet`, if any.
    pub fn get_role(&self, wallet: &str) -> Result<Option<WalletRole>, StorageError> {
        let key = Self::key(wallet);
        match self.store.get(&key)? {
            Some(value) => value
                .parse()
                .map(Some)
                .map_err(|e: String| StorageError::Corrupt { key, message: e }),
            None => Ok(None),
        }
    }
}
