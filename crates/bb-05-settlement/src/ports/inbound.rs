//! Inbound (Driving) port for the Settlement Engine.

use async_trait::async_trait;
use shared_types::{Amount, EscrowInfo, Refund, Settlement, SettlementError};

/// Fund-movement operations invoked by the Lifecycle Controller.
///
/// Both mutating operations either fully succeed (ledger confirmed) or
/// fully fail with no effect; a failure means the caller must not advance
/// task state and may retry.
#[async_trait]
pub trait SettlementApi: Send + Sync {
    /// Pays the bounty minus the platform fee to `worker_wallet`.
    async fn release(
        &self,
        worker_wallet: &str,
        amount: Amount,
    ) -> Result<Settlement, SettlementError>;

    /// Pays the full `amount` back to `recipient_wallet`, no fee.
    async fn refund(
        &self,
        recipient_wallet: &str,
        amount: Amount,
    ) -> Result<Refund, SettlementError>;

    /// Snapshot of the escrow account for status queries.
    async fn escrow_info(&self) -> EscrowInfo;
}
