//! Outbound (Driven) ports for the Double-Spend Guard.

use async_trait::async_trait;
use shared_types::{LedgerError, LedgerRecord, StorageError};

/// Narrow read-only view of the payment network.
///
/// The guard only ever looks transactions up; submissions belong to the
/// Settlement Engine.
#[async_trait]
pub trait DepositLedger: Send + Sync {
    /// Fetches a transaction by network identifier.
    async fn lookup_transaction(&self, tx_id: &str) -> Result<LedgerRecord, LedgerError>;
}

/// Durable append-only set of consumed funding transaction identifiers.
///
/// Identifiers are never removed; this set IS the double-spend protection
/// state.
pub trait UsedTransactionSet: Send + Sync {
    /// Inserts `tx_id` if it is not already present.
    ///
    /// Must be atomic with respect to concurrent callers: of two racing
    /// inserts of the same id, exactly one returns `true`.
    fn insert_if_absent(&self, tx_id: &str) -> Result<bool, StorageError>;

    /// Returns true if `tx_id` was already consumed.
    fn contains(&self, tx_id: &str) -> Result<bool, StorageError>;
}
