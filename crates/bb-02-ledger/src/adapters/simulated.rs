//! In-process simulated ledger.
//!
//! Stands in for the real payment network in development and tests. Keeps a
//! full transaction log and per-account balances so that deposit
//! verification and settlement behave exactly as they would against the
//! network, minus latency.
//!
//! Failure injection (`set_fail_submissions`) lets tests exercise the
//! settlement atomicity contract: a failed payout must leave task state
//! untouched.

use crate::ports::LedgerGateway;
use async_trait::async_trait;
use parking_lot::Mutex;
use sha2::{Digest, Sha256};
use shared_types::{
    Amount, LedgerError, LedgerRecord, PaymentReceipt, TransactionKind, TxId, WalletAddress,
};
use std::collections::HashMap;
use tracing::{debug, info};

/// Round reported for every confirmed simulated transaction.
const SIMULATED_ROUND: u64 = 1;

struct SimState {
    transactions: HashMap<TxId, LedgerRecord>,
    balances: HashMap<WalletAddress, u64>,
    sequence: u64,
    fail_submissions: bool,
    payments_submitted: u64,
}

/// Simulated payment network holding balances and a transaction log.
pub struct SimulatedLedger {
    escrow_address: WalletAddress,
    state: Mutex<SimState>,
}

impl SimulatedLedger {
    /// Creates an empty simulated network with the given escrow account.
    pub fn new(escrow_address: impl Into<String>) -> Self {
        Self {
            escrow_address: escrow_address.into(),
            state: Mutex::new(SimState {
                transactions: HashMap::new(),
                balances: HashMap::new(),
                sequence: 0,
                fail_submissions: false,
                payments_submitted: 0,
            }),
        }
    }

    /// The escrow account this ledger was built around.
    pub fn escrow_address(&self) -> &str {
        &self.escrow_address
    }

    /// Records a confirmed deposit `sender -> escrow` and returns its id.
    pub fn seed_deposit(&self, sender: &str, amount: Amount) -> TxId {
        let mut state = self.state.lock();
        let tx_id = Self::next_tx_id(&mut state, "DEP", sender);
        let record = LedgerRecord {
            tx_id: tx_id.clone(),
            kind: TransactionKind::Payment,
            sender: sender.to_string(),
            receiver: self.escrow_address.clone(),
            amount,
            confirmed_round: Some(SIMULATED_ROUND),
            note: Some("Bounty escrow deposit".to_string()),
        };
        *state.balances.entry(self.escrow_address.clone()).or_insert(0) += amount.micros();
        state.transactions.insert(tx_id.clone(), record);
        debug!(%tx_id, sender, %amount, "Seeded escrow deposit");
        tx_id
    }

    /// Records an arbitrary transaction verbatim (mismatch / unconfirmed
    /// scenarios in tests).
    pub fn seed_transaction(&self, record: LedgerRecord) {
        let mut state = self.state.lock();
        state.transactions.insert(record.tx_id.clone(), record);
    }

    /// Credits an account out of thin air.
    pub fn credit(&self, address: &str, amount: Amount) {
        let mut state = self.state.lock();
        *state.balances.entry(address.to_string()).or_insert(0) += amount.micros();
    }

    /// Makes every subsequent `submit_payment` fail with `Unavailable`.
    pub fn set_fail_submissions(&self, fail: bool) {
        self.state.lock().fail_submissions = fail;
    }

    /// Number of payments successfully submitted from escrow.
    pub fn payments_submitted(&self) -> u64 {
        self.state.lock().payments_submitted
    }

    fn next_tx_id(state: &mut SimState, prefix: &str, seed: &str) -> TxId {
        state.sequence += 1;
        let mut hasher = Sha256::new();
        hasher.update(state.sequence.to_le_bytes());
        hasher.update(seed.as_bytes());
        let digest = hasher.finalize();
        format!("{}-{}", prefix, hex::encode_upper(&digest[..12]))
    }
}

#[async_trait]
impl LedgerGateway for SimulatedLedger {
    async fn lookup_transaction(&self, tx_id: &str) -> Result<LedgerRecord, LedgerError> {
        let state = self.state.lock();
        state
            .transactions
            .get(tx_id)
            .cloned()
            .ok_or_else(|| LedgerError::NotFound(tx_id.to_string()))
    }

    async fn submit_payment(
        &self,
        receiver: &str,
        amount: Amount,
        note: &str,
    ) -> Result<PaymentReceipt, LedgerError> {
        let mut state = self.state.lock();
        if state.fail_submissions {
            return Err(LedgerError::Unavailable(
                "simulated network outage".to_string(),
            ));
        }

        let escrow_balance = state
            .balances
            .get(self.escrow_address.as_str())
            .copied()
            .unwrap_or(0);
        if escrow_balance < amount.micros() {
            return Err(LedgerError::Rejected(format!(
                "escrow balance {} below payment {}",
                Amount::from_micros(escrow_balance),
                amount
            )));
        }

        let tx_id = Self::next_tx_id(&mut state, "PAY", receiver);
        *state
            .balances
            .get_mut(self.escrow_address.as_str())
            .expect("escrow balance checked above") -= amount.micros();
        *state.balances.entry(receiver.to_string()).or_insert(0) += amount.micros();
        state.transactions.insert(
            tx_id.clone(),
            LedgerRecord {
                tx_id: tx_id.clone(),
                kind: TransactionKind::Payment,
                sender: self.escrow_address.clone(),
                receiver: receiver.to_string(),
                amount,
                confirmed_round: Some(SIMULATED_ROUND),
                note: Some(note.to_string()),
            },
        );
        state.payments_submitted += 1;
        info!(%tx_id, receiver, %amount, "Simulated payment confirmed");
        Ok(PaymentReceipt { tx_id, amount })
    }

    async fn account_balance(&self, address: &str) -> Result<Amount, LedgerError> {
        let state = self.state.lock();
        Ok(Amount::from_micros(
            state.balances.get(address).copied().unwrap_or(0),
        ))
    }
}
