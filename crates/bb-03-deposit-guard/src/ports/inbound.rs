//! Inbound (Driving) port for the Double-Spend Guard.

use async_trait::async_trait;
use shared_types::{Amount, DepositError, VerifiedDeposit};

/// Deposit verification entry point, consulted by the Lifecycle Controller
/// on every task-funding request.
#[async_trait]
pub trait DepositGuardApi: Send + Sync {
    /// Verifies that `tx_id` is a fresh, confirmed payment of at least
    /// `min_amount` from `sender` to the escrow wallet, and consumes it.
    ///
    /// A `None` transaction id is only accepted by a guard constructed in
    /// permissive mode; the resulting deposit carries no on-chain guarantee.
    ///
    /// # Errors
    /// - `MissingTransactionId` when no id was supplied in strict mode
    /// - `DuplicateTransaction` when the id already funded a task
    /// - `TransactionNotFound` / `TransactionUnconfirmed` from the ledger
    /// - `NotAPayment` / `SenderMismatch` / `ReceiverMismatch` /
    ///   `AmountTooLow` when the on-chain record does not match the claim
    async fn verify_deposit(
        &self,
        sender: &str,
        min_amount: Amount,
        tx_id: Option<&str>,
    ) -> Result<VerifiedDeposit, DepositError>;
}
