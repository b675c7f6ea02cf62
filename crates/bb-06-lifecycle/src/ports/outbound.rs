//! Outbound (Driven) ports for the Task Lifecycle Controller.
//!
//! Each port is the controller's own narrow view of a collaborator; the
//! runtime bridges them onto the owning subsystem's service.

use crate::domain::{ProofScore, ScoreError};
use async_trait::async_trait;
use shared_types::{
    Amount, DepositError, EscrowInfo, Refund, Settlement, SettlementError, StorageError, Task,
    VerifiedDeposit, WalletRole,
};

/// Durable task records.
pub trait TaskRepositoryPort: Send + Sync {
    /// Inserts a new task; the identifier must be fresh.
    fn insert(&self, task: &Task) -> Result<(), StorageError>;

    /// Fetches a task by identifier.
    fn get(&self, id: &str) -> Result<Option<Task>, StorageError>;

    /// Read-modify-write on an existing task.
    fn update(
        &self,
        id: &str,
        mutate: &mut dyn FnMut(&mut Task),
    ) -> Result<Task, StorageError>;

    /// All tasks, newest first.
    fn list(&self) -> Result<Vec<Task>, StorageError>;
}

/// Deposit verification (the Double-Spend Guard).
#[async_trait]
pub trait DepositGuardPort: Send + Sync {
    async fn verify_deposit(
        &self,
        sender: &str,
        min_amount: Amount,
        tx_id: Option<&str>,
    ) -> Result<VerifiedDeposit, DepositError>;
}

/// Fund movement (the Settlement Engine).
#[async_trait]
pub trait SettlementPort: Send + Sync {
    async fn release(
        &self,
        worker_wallet: &str,
        amount: Amount,
    ) -> Result<Settlement, SettlementError>;

    async fn refund(
        &self,
        recipient_wallet: &str,
        amount: Amount,
    ) -> Result<Refund, SettlementError>;

    async fn escrow_info(&self) -> EscrowInfo;
}

/// External proof-scoring capability.
#[async_trait]
pub trait ProofScorer: Send + Sync {
    /// Scores `proof_url` as evidence that `description` was completed.
    async fn score(&self, description: &str, proof_url: &str)
        -> Result<ProofScore, ScoreError>;
}

/// Advisory wallet-role storage.
pub trait RolePort: Send + Sync {
    fn set_role(&self, wallet: &str, role: WalletRole) -> Result<(), StorageError>;
    fn get_role(&self, wallet: &str) -> Result<Option<WalletRole>, StorageError>;
}

/// Injectable clock; tests pin it, the runtime uses the system clock.
pub trait TimeSource: Send + Sync {
    /// Milliseconds since the UNIX epoch.
    fn now_ms(&self) -> u64;
}
