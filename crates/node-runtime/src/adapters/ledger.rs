//! Narrow ledger views over the full `LedgerGateway`.

use async_trait::async_trait;
use bb_02_ledger::LedgerGateway;
use bb_03_deposit_guard::DepositLedger;
use bb_05_settlement::PayoutLedger;
use shared_types::{Amount, LedgerError, LedgerRecord, PaymentReceipt};
use std::sync::Arc;

/// Read-only ledger view for the Double-Spend Guard.
pub struct DepositLedgerBridge {
    gateway: Arc<dyn LedgerGateway>,
}

impl DepositLedgerBridge {
    pub fn new(gateway: Arc<dyn LedgerGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl DepositLedger for DepositLedgerBridge {
    async fn lookup_transaction(&self, tx_id: &str) -> Result<LedgerRecord, LedgerError> {
        self.gateway.lookup_transaction(tx_id).await
    }
}

/// Payment-submission ledger view for the Settlement Engine.
pub struct PayoutLedgerBridge {
    gateway: Arc<dyn LedgerGateway>,
}

impl PayoutLedgerBridge {
    pub fn new(gateway: Arc<dyn LedgerGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl PayoutLedger for PayoutLedgerBridge {
    async fn submit_payment(
        &self,
        receiver: &str,
        amount: Amount,
        note: &str,
    ) -> Result<PaymentReceipt, LedgerError> {
        self.gateway.submit_payment(receiver, amount, note).await
    }

    async fn account_balance(&self, address: &str) -> Result<Amount, LedgerError> {
        self.gateway.account_balance(address).await
    }
}
