//! # Deposit Verification Service
//!
//! Application service implementing `DepositGuardApi`.
//!
//! Verification order is load-bearing:
//!
//! 1. Reject a missing id (unless permissive)
//! 2. Reject an already-consumed id — BEFORE any ledger lookup
//! 3. Look the transaction up on the ledger
//! 4. Check kind, sender, receiver, and amount against the claim
//! 5. Atomically consume the id, then report success
//!
//! Step 5 and the success verdict are one unit: of two concurrent
//! verifications presenting the same id, the insert decides the winner and
//! the loser fails with `DuplicateTransaction`.

use crate::ports::{DepositGuardApi, DepositLedger, UsedTransactionSet};
use async_trait::async_trait;
use shared_types::{Amount, DepositError, LedgerError, TransactionKind, VerifiedDeposit};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Whether deposits without an on-chain transaction are acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepositPolicy {
    /// Every funding request must name a verifiable ledger transaction.
    Strict,
    /// A funding request without a transaction id is accepted unverified.
    /// Development only; carries no double-spend guarantee.
    Permissive,
}

/// Double-Spend Guard service.
pub struct DepositGuard {
    ledger: Arc<dyn DepositLedger>,
    used: Arc<dyn UsedTransactionSet>,
    escrow_address: String,
    policy: DepositPolicy,
}

impl DepositGuard {
    /// Creates a guard verifying deposits into `escrow_address`.
    pub fn new(
        ledger: Arc<dyn DepositLedger>,
        used: Arc<dyn UsedTransactionSet>,
        escrow_address: impl Into<String>,
        policy: DepositPolicy,
    ) -> Self {
        if policy == DepositPolicy::Permissive {
            warn!("Deposit guard running in PERMISSIVE mode; funding is not verified on-chain");
        }
        Self {
            ledger,
            used,
            escrow_address: escrow_address.into(),
            policy,
        }
    }

    /// The configured deposit policy.
    pub fn policy(&self) -> DepositPolicy {
        self.policy
    }

    fn check_record(
        &self,
        record: &shared_types::LedgerRecord,
        sender: &str,
        min_amount: Amount,
    ) -> Result<(), DepositError> {
        if record.kind != TransactionKind::Payment {
            return Err(DepositError::NotAPayment(record.tx_id.clone()));
        }
        if record.sender != sender {
            return Err(DepositError::SenderMismatch {
                expected: sender.to_string(),
                actual: record.sender.clone(),
            });
        }
        if record.receiver != self.escrow_address {
            return Err(DepositError::ReceiverMismatch {
                expected: self.escrow_address.clone(),
                actual: record.receiver.clone(),
            });
        }
        if record.amount < min_amount {
            return Err(DepositError::AmountTooLow {
                required: min_amount,
                actual: record.amount,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl DepositGuardApi for DepositGuard {
    async fn verify_deposit(
        &self,
        sender: &str,
        min_amount: Amount,
        tx_id: Option<&str>,
    ) -> Result<VerifiedDeposit, DepositError> {
        let tx_id = match tx_id {
            Some(id) if !id.trim().is_empty() => id.trim(),
            _ => {
                return match self.policy {
                    DepositPolicy::Permissive => {
                        warn!(sender, %min_amount, "Accepting unverified deposit (permissive)");
                        Ok(VerifiedDeposit {
                            tx_id: None,
                            amount: min_amount,
                            on_chain: false,
                        })
                    }
                    DepositPolicy::Strict => Err(DepositError::MissingTransactionId),
                };
            }
        };

        // Known duplicates must never reach the ledger gateway.
        if self.used.contains(tx_id)? {
            warn!(%tx_id, "Rejected reused funding transaction");
            return Err(DepositError::DuplicateTransaction(tx_id.to_string()));
        }

        let record = self.ledger.lookup_transaction(tx_id).await.map_err(|e| match e {
            LedgerError::NotFound(id) => DepositError::TransactionNotFound(id),
            LedgerError::Unconfirmed(id) => DepositError::TransactionUnconfirmed(id),
            other => DepositError::Ledger(other.to_string()),
        })?;
        if !record.is_confirmed() {
            return Err(DepositError::TransactionUnconfirmed(tx_id.to_string()));
        }
        debug!(%tx_id, sender = %record.sender, %record.amount, "Funding transaction found");

        self.check_record(&record, sender, min_amount)?;

        // Consume the id; the loser of a concurrent race fails here.
        if !self.used.insert_if_absent(tx_id)? {
            warn!(%tx_id, "Lost verification race for funding transaction");
            return Err(DepositError::DuplicateTransaction(tx_id.to_string()));
        }

        info!(%tx_id, sender, amount = %record.amount, "Deposit verified and consumed");
        Ok(VerifiedDeposit {
            tx_id: Some(tx_id.to_string()),
            amount: record.amount,
            on_chain: true,
        })
    }
}
