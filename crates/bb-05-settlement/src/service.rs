//! # Settlement Service
//!
//! Application service implementing `SettlementApi`.
//!
//! Every ledger call runs under `tokio::time::timeout`; an elapsed timeout
//! is treated as an unconfirmed payment, surfaced as `Timeout`, and leaves
//! nothing for the caller to roll back.

use crate::domain::{split_payout, FEE_RATE_PERCENT};
use crate::ports::{PayoutLedger, SettlementApi};
use async_trait::async_trait;
use shared_types::{Amount, EscrowInfo, LedgerError, Refund, Settlement, SettlementError};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Settlement Engine configuration.
#[derive(Debug, Clone)]
pub struct SettlementConfig {
    /// The escrow wallet payments are made from.
    pub escrow_address: String,
    /// Upper bound on any single ledger call.
    pub ledger_timeout: Duration,
    /// False when running against a simulated ledger; reported through
    /// `escrow_info` so operators can tell a demo deployment apart.
    pub configured: bool,
}

impl SettlementConfig {
    /// Configuration for a simulated deployment.
    pub fn simulated(escrow_address: impl Into<String>) -> Self {
        Self {
            escrow_address: escrow_address.into(),
            ledger_timeout: Duration::from_secs(10),
            configured: false,
        }
    }
}

/// Settlement Engine service.
pub struct SettlementEngine {
    ledger: Arc<dyn PayoutLedger>,
    config: SettlementConfig,
}

impl SettlementEngine {
    pub fn new(ledger: Arc<dyn PayoutLedger>, config: SettlementConfig) -> Self {
        Self { ledger, config }
    }

    /// The escrow wallet this engine pays from.
    pub fn escrow_address(&self) -> &str {
        &self.config.escrow_address
    }

    async fn pay(
        &self,
        receiver: &str,
        amount: Amount,
        note: &str,
    ) -> Result<shared_types::PaymentReceipt, SettlementError> {
        let submission = self.ledger.submit_payment(receiver, amount, note);
        match tokio::time::timeout(self.config.ledger_timeout, submission).await {
            Ok(Ok(receipt)) => Ok(receipt),
            Ok(Err(LedgerError::Rejected(reason))) => {
                warn!(receiver, %amount, reason, "Ledger rejected payment");
                Err(SettlementError::Rejected(reason))
            }
            Ok(Err(other)) => {
                warn!(receiver, %amount, error = %other, "Ledger payment failed");
                Err(SettlementError::Gateway(other.to_string()))
            }
            Err(_) => {
                warn!(receiver, %amount, "Ledger payment timed out; treating as unconfirmed");
                Err(SettlementError::Timeout)
            }
        }
    }
}

#[async_trait]
impl SettlementApi for SettlementEngine {
    async fn release(
        &self,
        worker_wallet: &str,
        amount: Amount,
    ) -> Result<Settlement, SettlementError> {
        let split = split_payout(amount);
        let receipt = self
            .pay(worker_wallet, split.worker_payout, "Bounty release")
            .await?;
        info!(
            worker = worker_wallet,
            payout = %split.worker_payout,
            fee = %split.platform_fee,
            tx_id = %receipt.tx_id,
            "Bounty released"
        );
        Ok(Settlement {
            tx_id: receipt.tx_id,
            worker_payout: split.worker_payout,
            platform_fee: split.platform_fee,
        })
    }

    async fn refund(
        &self,
        recipient_wallet: &str,
        amount: Amount,
    ) -> Result<Refund, SettlementError> {
        let receipt = self.pay(recipient_wallet, amount, "Bounty refund").await?;
        info!(
            recipient = recipient_wallet,
            %amount,
            tx_id = %receipt.tx_id,
            "Escrow refunded"
        );
        Ok(Refund {
            tx_id: receipt.tx_id,
            amount,
        })
    }

    async fn escrow_info(&self) -> EscrowInfo {
        let balance = match tokio::time::timeout(
            self.config.ledger_timeout,
            self.ledger.account_balance(&self.config.escrow_address),
        )
        .await
        {
            Ok(Ok(balance)) => Some(balance),
            _ => None,
        };
        EscrowInfo {
            escrow_address: self.config.escrow_address.clone(),
            balance,
            fee_rate_percent: FEE_RATE_PERCENT,
            configured: self.config.configured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use shared_types::PaymentReceipt;

    const ESCROW: &str = "ESCROW_WALLET_TEST";

    #[derive(Default)]
    struct StubLedger {
        payments: Mutex<Vec<(String, Amount, String)>>,
        fail_with: Mutex<Option<LedgerError>>,
        delay: Mutex<Option<Duration>>,
    }

    impl StubLedger {
        fn payments(&self) -> Vec<(String, Amount, String)> {
            self.payments.lock().clone()
        }
    }

    #[async_trait]
    impl PayoutLedger for StubLedger {
        async fn submit_payment(
            &self,
            receiver: &str,
            amount: Amount,
            note: &str,
        ) -> Result<PaymentReceipt, LedgerError> {
            let delay = *self.delay.lock();
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            if let Some(error) = self.fail_with.lock().clone() {
                return Err(error);
            }
            self.payments
                .lock()
                .push((receiver.to_string(), amount, note.to_string()));
            Ok(PaymentReceipt {
                tx_id: format!("PAY-{}", receiver),
                amount,
            })
        }

        async fn account_balance(&self, _address: &str) -> Result<Amount, LedgerError> {
            Ok(Amount::from_units(42))
        }
    }

    fn engine(ledger: Arc<StubLedger>) -> SettlementEngine {
        SettlementEngine::new(
            ledger,
            SettlementConfig {
                escrow_address: ESCROW.to_string(),
                ledger_timeout: Duration::from_secs(5),
                configured: false,
            },
        )
    }

    #[tokio::test]
    async fn test_release_splits_fee() {
        let ledger = Arc::new(StubLedger::default());
        let engine = engine(Arc::clone(&ledger));

        let settlement = engine
            .release("WORKER_WALLET_1", Amount::from_units(100))
            .await
            .unwrap();

        assert_eq!(settlement.platform_fee, Amount::from_units(3));
        assert_eq!(settlement.worker_payout, Amount::from_units(97));

        // Only the payout leaves escrow; the fee stays put.
        let payments = ledger.payments();
        assert_eq!(payments.len(), 1);
        assert_eq!(payments[0].0, "WORKER_WALLET_1");
        assert_eq!(payments[0].1, Amount::from_units(97));
    }

    #[tokio::test]
    async fn test_refund_pays_full_amount() {
        let ledger = Arc::new(StubLedger::default());
        let engine = engine(Arc::clone(&ledger));

        let refund = engine
            .refund("CREATOR_WALLET_1", Amount::from_units(100))
            .await
            .unwrap();

        assert_eq!(refund.amount, Amount::from_units(100));
        assert_eq!(ledger.payments()[0].1, Amount::from_units(100));
    }

    #[tokio::test]
    async fn test_gateway_failure_is_surfaced() {
        let ledger = Arc::new(StubLedger::default());
        *ledger.fail_with.lock() = Some(LedgerError::Unavailable("down".to_string()));
        let engine = engine(Arc::clone(&ledger));

        let result = engine.release("WORKER_WALLET_1", Amount::from_units(10)).await;
        assert!(matches!(result, Err(SettlementError::Gateway(_))));
        assert!(result.unwrap_err().is_retryable());
        assert!(ledger.payments().is_empty());
    }

    #[tokio::test]
    async fn test_rejection_is_distinguished() {
        let ledger = Arc::new(StubLedger::default());
        *ledger.fail_with.lock() = Some(LedgerError::Rejected("insufficient".to_string()));
        let engine = engine(Arc::clone(&ledger));

        let result = engine.release("WORKER_WALLET_1", Amount::from_units(10)).await;
        assert!(matches!(result, Err(SettlementError::Rejected(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_ledger_times_out() {
        let ledger = Arc::new(StubLedger::default());
        *ledger.delay.lock() = Some(Duration::from_secs(30));
        let engine = engine(Arc::clone(&ledger));

        let result = engine.refund("CREATOR_WALLET_1", Amount::from_units(10)).await;
        assert!(matches!(result, Err(SettlementError::Timeout)));
    }

    #[tokio::test]
    async fn test_escrow_info() {
        let ledger = Arc::new(StubLedger::default());
        let engine = engine(ledger);

        let info = engine.escrow_info().await;
        assert_eq!(info.escrow_address, ESCROW);
        assert_eq!(info.balance, Some(Amount::from_units(42)));
        assert_eq!(info.fee_rate_percent, 3);
        assert!(!info.configured);
    }
}
