//! # Error Types
//!
//! Defines error types that cross subsystem boundaries. Each subsystem's
//! inbound API keeps its own error enum; the types here are the ones that
//! appear in outbound port signatures and therefore must be shared.

use crate::amount::Amount;
use crate::entities::{TxId, WalletAddress};
use thiserror::Error;

/// Errors from the durable key-value layer.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// Key not found in the store.
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Attempted to insert a key that already exists.
    #[error("Key already exists: {0}")]
    Conflict(String),

    /// Underlying I/O failed.
    #[error("Storage I/O error: {message}")]
    Io { message: String },

    /// Stored bytes could not be decoded.
    #[error("Corrupt record at {key}: {message}")]
    Corrupt { key: String, message: String },

    /// Record could not be encoded for storage.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Errors from the external payment network gateway.
#[derive(Debug, Clone, Error)]
pub enum LedgerError {
    /// No transaction with this identifier exists on the network.
    #[error("Transaction not found: {0}")]
    NotFound(TxId),

    /// The transaction exists but has not been confirmed.
    #[error("Transaction not yet confirmed: {0}")]
    Unconfirmed(TxId),

    /// The network rejected the submission.
    #[error("Payment rejected: {0}")]
    Rejected(String),

    /// The gateway did not answer within the configured deadline.
    #[error("Ledger call timed out")]
    Timeout,

    /// The gateway could not be reached.
    #[error("Ledger unavailable: {0}")]
    Unavailable(String),
}

/// Errors from deposit verification (the double-spend guard).
#[derive(Debug, Clone, Error)]
pub enum DepositError {
    /// No transaction identifier supplied in strict mode.
    #[error("Funding transaction id is required")]
    MissingTransactionId,

    /// The transaction identifier has already funded a task.
    #[error("Transaction already used to fund a task: {0}")]
    DuplicateTransaction(TxId),

    /// The transaction does not exist on the ledger.
    #[error("Transaction not found on ledger: {0}")]
    TransactionNotFound(TxId),

    /// The transaction exists but is unconfirmed.
    #[error("Transaction not confirmed: {0}")]
    TransactionUnconfirmed(TxId),

    /// The transaction is not a plain payment.
    #[error("Transaction {0} is not a payment")]
    NotAPayment(TxId),

    /// The on-chain sender does not match the claimed funder.
    #[error("Sender mismatch: expected {expected}, found {actual}")]
    SenderMismatch {
        expected: WalletAddress,
        actual: WalletAddress,
    },

    /// The payment did not go to this system's escrow wallet.
    #[error("Receiver mismatch: expected escrow {expected}, found {actual}")]
    ReceiverMismatch {
        expected: WalletAddress,
        actual: WalletAddress,
    },

    /// The deposited amount is below the required bounty.
    #[error("Deposit too low: required {required}, found {actual}")]
    AmountTooLow { required: Amount, actual: Amount },

    /// The ledger gateway failed before a verdict could be reached.
    #[error("Ledger unavailable during verification: {0}")]
    Ledger(String),

    /// The used-transaction set could not be read or written.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors from the settlement engine.
///
/// Settlement failures are retryable by contract: the caller is guaranteed
/// that no task state was advanced, and a retry submits a fresh ledger
/// transaction.
#[derive(Debug, Clone, Error)]
pub enum SettlementError {
    /// The ledger did not confirm within the configured deadline.
    #[error("Settlement timed out awaiting ledger confirmation")]
    Timeout,

    /// The ledger gateway reported a failure.
    #[error("Settlement gateway error: {0}")]
    Gateway(String),

    /// The ledger actively rejected the payment.
    #[error("Settlement rejected: {0}")]
    Rejected(String),
}

impl SettlementError {
    /// All settlement failures leave the task unchanged and may be retried.
    pub fn is_retryable(&self) -> bool {
        true
    }
}
