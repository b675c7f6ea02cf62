//! Inbound (Driving) port for the Task Lifecycle Controller.

use crate::domain::{CreateTaskRequest, LifecycleError, ProofScore, SubmitProofRequest};
use async_trait::async_trait;
use bb_01_identity::AuthHeaders;
use serde::{Deserialize, Serialize};
use shared_types::{EscrowInfo, Refund, Settlement, Task, WalletRole};

/// A completed task together with its settlement receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettledTask {
    pub task: Task,
    pub settlement: Settlement,
}

/// A cancelled or expired task together with its refund receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundedTask {
    pub task: Task,
    pub refund: Refund,
}

/// Every operation the transport layer can invoke. Authentication material
/// travels with each call; the controller establishes identity before
/// evaluating any authorization rule.
#[async_trait]
pub trait TaskLifecycleApi: Send + Sync {
    /// Funds and creates a task. The funding deposit must verify before
    /// the task exists; the task becomes visible already `OPEN`.
    async fn create_task(
        &self,
        request: CreateTaskRequest,
        headers: &AuthHeaders,
    ) -> Result<Task, LifecycleError>;

    /// Binds `worker_wallet` to an `OPEN` task. Creators cannot claim
    /// their own tasks; of two racing claims exactly one wins.
    async fn claim_task(
        &self,
        task_id: &str,
        worker_wallet: &str,
        headers: &AuthHeaders,
    ) -> Result<Task, LifecycleError>;

    /// Stores proof of completion on a `CLAIMED` task (worker only) and
    /// moves it to `SUBMITTED`. With `ai_verify`, a PASS verdict releases
    /// payment and auto-completes; any scoring failure leaves the task
    /// `SUBMITTED` without failing the request.
    async fn submit_proof(
        &self,
        request: SubmitProofRequest,
        headers: &AuthHeaders,
    ) -> Result<Task, LifecycleError>;

    /// Creator approval of a `SUBMITTED` task: releases payment, then
    /// completes. The task stays `SUBMITTED` if settlement fails.
    async fn approve_task(
        &self,
        task_id: &str,
        headers: &AuthHeaders,
    ) -> Result<SettledTask, LifecycleError>;

    /// Manual release by the creator of a `CLAIMED` or `SUBMITTED` task
    /// with a bound worker.
    async fn release_payment(
        &self,
        task_id: &str,
        headers: &AuthHeaders,
    ) -> Result<SettledTask, LifecycleError>;

    /// Cancels an unclaimed (`OPEN`) task: full refund, no fee.
    async fn cancel_task(
        &self,
        task_id: &str,
        headers: &AuthHeaders,
    ) -> Result<RefundedTask, LifecycleError>;

    /// Freezes a `CLAIMED` or `SUBMITTED` task. Creator or worker only.
    async fn dispute_task(
        &self,
        task_id: &str,
        reason: &str,
        headers: &AuthHeaders,
    ) -> Result<Task, LifecycleError>;

    /// Refunds a task whose deadline has passed (creator only). Allowed
    /// from any non-terminal state, including `DISPUTED`.
    async fn expire_task(
        &self,
        task_id: &str,
        headers: &AuthHeaders,
    ) -> Result<RefundedTask, LifecycleError>;

    /// Scores a `SUBMITTED` task's proof without changing state. Unlike
    /// the inline path, a scoring failure is this operation's error.
    async fn ai_verify_task(
        &self,
        task_id: &str,
        headers: &AuthHeaders,
    ) -> Result<ProofScore, LifecycleError>;

    /// Fetches one task.
    async fn get_task(&self, task_id: &str) -> Result<Task, LifecycleError>;

    /// All tasks, newest first.
    async fn list_tasks(&self) -> Result<Vec<Task>, LifecycleError>;

    /// Escrow account snapshot.
    async fn escrow_info(&self) -> Result<EscrowInfo, LifecycleError>;

    /// Declares the advisory role of `wallet` (owner only).
    async fn set_wallet_role(
        &self,
        wallet: &str,
        role: WalletRole,
        headers: &AuthHeaders,
    ) -> Result<(), LifecycleError>;

    /// The declared role of `wallet`, if any.
    async fn get_wallet_role(&self, wallet: &str)
        -> Result<Option<WalletRole>, LifecycleError>;
}
