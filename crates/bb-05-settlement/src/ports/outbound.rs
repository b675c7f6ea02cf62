//! Outbound (Driven) ports for the Settlement Engine.

use async_trait::async_trait;
use shared_types::{Amount, LedgerError, PaymentReceipt};

/// Narrow payment-submission view of the ledger.
///
/// Lookups belong to the Double-Spend Guard; this port only pays out of
/// escrow and reads the escrow balance.
#[async_trait]
pub trait PayoutLedger: Send + Sync {
    /// Submits a payment from escrow and waits for confirmation.
    async fn submit_payment(
        &self,
        receiver: &str,
        amount: Amount,
        note: &str,
    ) -> Result<PaymentReceipt, LedgerError>;

    /// Current balance of an account.
    async fn account_balance(&self, address: &str) -> Result<Amount, LedgerError>;
}
