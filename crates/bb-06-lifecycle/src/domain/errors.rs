//! Lifecycle error taxonomy.
//!
//! Every failure leaving the Lifecycle Controller is classified into one of
//! these variants before it reaches a caller; collaborator errors carry
//! only a safe message string, never internal detail.

use crate::domain::scoring::ScoreError;
use bb_01_identity::IdentityError;
use shared_types::{DepositError, SettlementError, StorageError, TaskId, TaskStatus, TxId};
use thiserror::Error;

/// Failures surfaced by lifecycle operations.
#[derive(Debug, Clone, Error)]
pub enum LifecycleError {
    /// No task with this identifier exists.
    #[error("Task not found: {0}")]
    NotFound(TaskId),

    /// The task is not in a state that allows the requested transition.
    /// Not retryable without an external state change.
    #[error("{reason} (current status: {current})")]
    PreconditionFailed { current: TaskStatus, reason: String },

    /// The caller does not control the wallet this transition requires.
    /// Distinct from `PreconditionFailed`: "you may never do this", not
    /// "not right now".
    #[error("Authorization failed: {0}")]
    AuthorizationFailed(String),

    /// Malformed input; the client must fix the request.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// The external ledger did not confirm a release or refund. Task state
    /// is guaranteed unchanged; the operation may be retried.
    #[error("Settlement failed, task state unchanged: {0}")]
    SettlementFailed(String),

    /// The funding transaction was already consumed by another task.
    #[error("Funding transaction already used: {0}")]
    DuplicateTransaction(TxId),

    /// The funding transaction does not match the claim (wrong sender,
    /// receiver, amount, kind, or not found / unconfirmed on the ledger).
    #[error("Funding transaction rejected: {0}")]
    TransactionMismatch(String),

    /// A required external collaborator could not be reached.
    #[error("External service unavailable: {0}")]
    ExternalServiceUnavailable(String),

    /// The durable store failed in a way the caller cannot act on.
    #[error("Internal storage failure: {0}")]
    Internal(String),
}

impl LifecycleError {
    /// Shorthand for a state-precondition failure.
    pub fn precondition(current: TaskStatus, reason: impl Into<String>) -> Self {
        LifecycleError::PreconditionFailed {
            current,
            reason: reason.into(),
        }
    }

    /// True when retrying the same request can succeed without any client
    /// change.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            LifecycleError::SettlementFailed(_) | LifecycleError::ExternalServiceUnavailable(_)
        )
    }
}

impl From<StorageError> for LifecycleError {
    fn from(e: StorageError) -> Self {
        LifecycleError::Internal(e.to_string())
    }
}

impl From<IdentityError> for LifecycleError {
    fn from(e: IdentityError) -> Self {
        LifecycleError::AuthorizationFailed(e.to_string())
    }
}

impl From<SettlementError> for LifecycleError {
    fn from(e: SettlementError) -> Self {
        LifecycleError::SettlementFailed(e.to_string())
    }
}

impl From<ScoreError> for LifecycleError {
    fn from(e: ScoreError) -> Self {
        LifecycleError::ExternalServiceUnavailable(e.to_string())
    }
}

impl From<DepositError> for LifecycleError {
    fn from(e: DepositError) -> Self {
        match e {
            DepositError::MissingTransactionId => {
                LifecycleError::ValidationFailed(e.to_string())
            }
            DepositError::DuplicateTransaction(tx_id) => {
                LifecycleError::DuplicateTransaction(tx_id)
            }
            DepositError::TransactionNotFound(_)
            | DepositError::TransactionUnconfirmed(_)
            | DepositError::NotAPayment(_)
            | DepositError::SenderMismatch { .. }
            | DepositError::ReceiverMismatch { .. }
            | DepositError::AmountTooLow { .. } => {
                LifecycleError::TransactionMismatch(e.to_string())
            }
            DepositError::Ledger(message) => {
                LifecycleError::ExternalServiceUnavailable(message)
            }
            DepositError::Storage(e) => LifecycleError::Internal(e.to_string()),
        }
    }
}
