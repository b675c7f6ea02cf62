//! Inbound (Driving) port for the Ledger Gateway.

use async_trait::async_trait;
use shared_types::{Amount, LedgerError, LedgerRecord, PaymentReceipt};

/// Access to the external payment network.
///
/// Calls may take seconds on a real network; callers are responsible for
/// bounding them with a timeout. Submissions are NOT deduplicated by this
/// gateway — a retry creates a new distinct network transaction.
#[async_trait]
pub trait LedgerGateway: Send + Sync {
    /// Fetches a transaction by network identifier.
    ///
    /// # Errors
    /// - `NotFound` if no such transaction exists
    /// - `Unavailable` if the network could not be queried
    async fn lookup_transaction(&self, tx_id: &str) -> Result<LedgerRecord, LedgerError>;

    /// Submits a payment from the escrow wallet and waits for confirmation.
    ///
    /// # Errors
    /// - `Rejected` if the network refused the payment
    /// - `Unavailable` if submission failed before a verdict
    async fn submit_payment(
        &self,
        receiver: &str,
        amount: Amount,
        note: &str,
    ) -> Result<PaymentReceipt, LedgerError>;

    /// Current balance of an account.
    async fn account_balance(&self, address: &str) -> Result<Amount, LedgerError>;
}
