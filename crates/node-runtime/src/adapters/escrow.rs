//! Escrow-facing port bridges.

use async_trait::async_trait;
use bb_03_deposit_guard::{DepositGuard, DepositGuardApi};
use bb_05_settlement::{SettlementApi, SettlementEngine};
use bb_06_lifecycle::{DepositGuardPort, SettlementPort};
use shared_types::{
    Amount, DepositError, EscrowInfo, Refund, Settlement, SettlementError, VerifiedDeposit,
};
use std::sync::Arc;

/// The Lifecycle Controller's deposit guard over bb-03.
pub struct DepositGuardBridge {
    guard: Arc<DepositGuard>,
}

impl DepositGuardBridge {
    pub fn new(guard: Arc<DepositGuard>) -> Self {
        Self { guard }
    }
}

#[async_trait]
impl DepositGuardPort for DepositGuardBridge {
    async fn verify_deposit(
        &self,
        sender: &str,
        min_amount: Amount,
        tx_id: Option<&str>,
    ) -> Result<VerifiedDeposit, DepositError> {
        self.guard.verify_deposit(sender, min_amount, tx_id).await
    }
}

/// The Lifecycle Controller's settlement port over bb-05.
pub struct SettlementBridge {
    engine: Arc<SettlementEngine>,
}

impl SettlementBridge {
    pub fn new(engine: Arc<SettlementEngine>) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl SettlementPort for SettlementBridge {
    async fn release(
        &self,
        worker_wallet: &str,
        amount: Amount,
    ) -> Result<Settlement, SettlementError> {
        self.engine.release(worker_wallet, amount).await
    }

    async fn refund(
        &self,
        recipient_wallet: &str,
        amount: Amount,
    ) -> Result<Refund, SettlementError> {
        self.engine.refund(recipient_wallet, amount).await
    }

    async fn escrow_info(&self) -> EscrowInfo {
        self.engine.escrow_info().await
    }
}
