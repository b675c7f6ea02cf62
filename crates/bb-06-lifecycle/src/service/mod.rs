//! # Task Lifecycle Service
//!
//! Application service implementing `TaskLifecycleApi`. Orchestrates the
//! Identity Verifier, Double-Spend Guard, Settlement Engine, Task Store,
//! and the optional proof scorer behind one state machine.
//!
//! ## Transition discipline
//!
//! Every mutating operation follows the same shape:
//!
//! 1. Validate input and establish the caller's identity
//! 2. Take the task's lock
//! 3. Load the task and check the state precondition
//! 4. Check authorization against the required wallet
//! 5. Perform the settlement side effect, if any
//! 6. Persist the new state ONLY after the side effect confirmed
//!
//! Step 6 after step 5 is the atomicity contract: a failed or timed-out
//! settlement leaves the stored status untouched and surfaces a retryable
//! error.

use crate::domain::{
    validate_wallet, CreateTaskRequest, LifecycleError, ProofScore, SubmitProofRequest,
    TaskLockMap,
};
use crate::ports::{
    DepositGuardPort, ProofScorer, RefundedTask, RolePort, SettledTask, SettlementPort,
    TaskLifecycleApi, TaskRepositoryPort, TimeSource,
};
use async_trait::async_trait;
use bb_01_identity::{AuthHeaders, IdentityApi};
use shared_types::{Caller, EscrowInfo, Task, TaskStatus, WalletRole};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Task Lifecycle Controller.
pub struct TaskLifecycleService {
    identity: Arc<dyn IdentityApi>,
    tasks: Arc<dyn TaskRepositoryPort>,
    deposits: Arc<dyn DepositGuardPort>,
    settlement: Arc<dyn SettlementPort>,
    scorer: Arc<dyn ProofScorer>,
    roles: Arc<dyn RolePort>,
    clock: Arc<dyn TimeSource>,
    locks: TaskLockMap,
}

impl TaskLifecycleService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        identity: Arc<dyn IdentityApi>,
        tasks: Arc<dyn TaskRepositoryPort>,
        deposits: Arc<dyn DepositGuardPort>,
        settlement: Arc<dyn SettlementPort>,
        scorer: Arc<dyn ProofScorer>,
        roles: Arc<dyn RolePort>,
        clock: Arc<dyn TimeSource>,
    ) -> Self {
        Self {
            identity,
            tasks,
            deposits,
            settlement,
            scorer,
            roles,
            clock,
            locks: TaskLockMap::new(),
        }
    }

    fn authenticate(&self, headers: &AuthHeaders) -> Result<Caller, LifecycleError> {
        Ok(self.identity.authenticate(headers)?)
    }

    /// Requires the caller to control `wallet`.
    ///
    /// An anonymous caller passes: it can only exist under the permissive
    /// identity strategy, which is unreachable in a production
    /// configuration (fail closed at startup).
    fn require_owner(caller: &Caller, wallet: &str, action: &str) -> Result<(), LifecycleError> {
        match caller {
            Caller::Anonymous => Ok(()),
            Caller::Wallet(addr) if addr == wallet => Ok(()),
            Caller::Wallet(_) => Err(LifecycleError::AuthorizationFailed(format!(
                "only the {action} wallet may perform this operation"
            ))),
        }
    }

    /// Requires the caller to be the task's creator or bound worker;
    /// returns the matched wallet.
    fn require_participant(caller: &Caller, task: &Task) -> Result<String, LifecycleError> {
        let wallet = caller.wallet().ok_or_else(|| {
            LifecycleError::AuthorizationFailed(
                "a verified wallet identity is required".to_string(),
            )
        })?;
        if task.is_creator(wallet) || task.is_worker(wallet) {
            Ok(wallet.to_string())
        } else {
            Err(LifecycleError::AuthorizationFailed(
                "only the task's creator or worker may perform this operation".to_string(),
            ))
        }
    }

    fn load(&self, task_id: &str) -> Result<Task, LifecycleError> {
        self.tasks
            .get(task_id)?
            .ok_or_else(|| LifecycleError::NotFound(task_id.to_string()))
    }

    fn new_task_id() -> String {
        Uuid::new_v4().simple().to_string()[..8].to_string()
    }

    /// Shared release-then-complete tail of `approve_task` and
    /// `release_payment`. Caller holds the task lock and has already
    /// checked the state precondition.
    async fn settle_release(&self, task: &Task) -> Result<SettledTask, LifecycleError> {
        let worker = task.worker_wallet.clone().ok_or_else(|| {
            LifecycleError::precondition(task.status, "No worker is bound to this task")
        })?;

        let settlement = self.settlement.release(&worker, task.amount).await?;
        let task = self.tasks.update(&task.id, &mut |t| {
            t.status = TaskStatus::Completed;
            t.tx_id = Some(settlement.tx_id.clone());
        })?;
        info!(
            task_id = %task.id,
            worker = %worker,
            payout = %settlement.worker_payout,
            fee = %settlement.platform_fee,
            "Bounty released, task completed"
        );
        Ok(SettledTask { task, settlement })
    }
}

#[async_trait]
impl TaskLifecycleApi for TaskLifecycleService {
    async fn create_task(
        &self,
        request: CreateTaskRequest,
        headers: &AuthHeaders,
    ) -> Result<Task, LifecycleError> {
        request.validate()?;
        let caller = self.authenticate(headers)?;
        Self::require_owner(&caller, request.creator_wallet.trim(), "creator")?;

        // Funding must verify before the task exists; the guard consumes
        // the transaction id exactly once across all tasks.
        let deposit = self
            .deposits
            .verify_deposit(
                request.creator_wallet.trim(),
                request.amount,
                request.tx_id.as_deref(),
            )
            .await?;

        let task = Task {
            id: Self::new_task_id(),
            title: request.title.trim().to_string(),
            description: request.description.trim().to_string(),
            amount: request.amount,
            creator_wallet: request.creator_wallet.trim().to_string(),
            worker_wallet: None,
            status: TaskStatus::Open,
            proof_url: None,
            created_at: self.clock.now_ms(),
            deadline: request.deadline,
            tx_id: deposit.tx_id,
            dispute_reason: None,
            disputed_by: None,
        };
        self.tasks.insert(&task)?;
        info!(
            task_id = %task.id,
            creator = %task.creator_wallet,
            amount = %task.amount,
            on_chain = deposit.on_chain,
            "Task created, escrow funded"
        );
        Ok(task)
    }

    async fn claim_task(
        &self,
        task_id: &str,
        worker_wallet: &str,
        headers: &AuthHeaders,
    ) -> Result<Task, LifecycleError> {
        let worker_wallet = worker_wallet.trim();
        validate_wallet(worker_wallet, "worker_wallet")?;
        let caller = self.authenticate(headers)?;
        Self::require_owner(&caller, worker_wallet, "claiming worker")?;

        let lock = self.locks.handle(task_id);
        let _guard = lock.lock().await;

        let task = self.load(task_id)?;
        if task.status != TaskStatus::Open {
            return Err(LifecycleError::precondition(
                task.status,
                "Task is not open for claiming",
            ));
        }
        if task.creator_wallet == worker_wallet {
            return Err(LifecycleError::ValidationFailed(
                "a task cannot be claimed by its own creator".to_string(),
            ));
        }

        let task = self.tasks.update(task_id, &mut |t| {
            t.worker_wallet = Some(worker_wallet.to_string());
            t.status = TaskStatus::Claimed;
        })?;
        info!(task_id, worker = worker_wallet, "Task claimed");
        Ok(task)
    }

    async fn submit_proof(
        &self,
        request: SubmitProofRequest,
        headers: &AuthHeaders,
    ) -> Result<Task, LifecycleError> {
        request.validate()?;
        let caller = self.authenticate(headers)?;

        let lock = self.locks.handle(&request.task_id);
        let _guard = lock.lock().await;

        let task = self.load(&request.task_id)?;
        if task.status != TaskStatus::Claimed {
            return Err(LifecycleError::precondition(
                task.status,
                "Task has no active claim to submit proof for",
            ));
        }
        let worker = task
            .worker_wallet
            .clone()
            .ok_or_else(|| LifecycleError::precondition(task.status, "No worker is bound"))?;
        Self::require_owner(&caller, &worker, "worker")?;

        let proof_url = request.proof_url.trim().to_string();
        let mut task = self.tasks.update(&request.task_id, &mut |t| {
            t.proof_url = Some(proof_url.clone());
            t.status = TaskStatus::Submitted;
        })?;
        info!(task_id = %task.id, worker = %worker, "Proof submitted");

        if request.ai_verify {
            // Scoring is best-effort: any failure here leaves the task
            // SUBMITTED and the request still succeeds.
            match self.scorer.score(&task.description, &proof_url).await {
                Ok(score) if score.passed() => {
                    info!(task_id = %task.id, score = score.score, "Proof passed auto-verification");
                    match self.settle_release(&task).await {
                        Ok(settled) => task = settled.task,
                        Err(e) => {
                            warn!(task_id = %task.id, error = %e, "Auto-release failed; task stays submitted");
                        }
                    }
                }
                Ok(score) => {
                    info!(
                        task_id = %task.id,
                        score = score.score,
                        reasoning = %score.reasoning,
                        "Proof failed auto-verification; awaiting manual approval"
                    );
                }
                Err(e) => {
                    warn!(task_id = %task.id, error = %e, "Proof scoring unavailable; awaiting manual approval");
                }
            }
        }
        Ok(task)
    }

    async fn approve_task(
        &self,
        task_id: &str,
        headers: &AuthHeaders,
    ) -> Result<SettledTask, LifecycleError> {
        let caller = self.authenticate(headers)?;

        let lock = self.locks.handle(task_id);
        let _guard = lock.lock().await;

        let task = self.load(task_id)?;
        if task.status != TaskStatus::Submitted {
            return Err(LifecycleError::precondition(
                task.status,
                "Only a submitted task can be approved",
            ));
        }
        Self::require_owner(&caller, &task.creator_wallet, "creator")?;

        self.settle_release(&task).await
    }

    async fn release_payment(
        &self,
        task_id: &str,
        headers: &AuthHeaders,
    ) -> Result<SettledTask, LifecycleError> {
        let caller = self.authenticate(headers)?;

        let lock = self.locks.handle(task_id);
        let _guard = lock.lock().await;

        let task = self.load(task_id)?;
        if !matches!(task.status, TaskStatus::Claimed | TaskStatus::Submitted) {
            return Err(LifecycleError::precondition(
                task.status,
                "Payment can only be released for a claimed or submitted task",
            ));
        }
        Self::require_owner(&caller, &task.creator_wallet, "creator")?;

        self.settle_release(&task).await
    }

    async fn cancel_task(
        &self,
        task_id: &str,
        headers: &AuthHeaders,
    ) -> Result<RefundedTask, LifecycleError> {
        let caller = self.authenticate(headers)?;

        let lock = self.locks.handle(task_id);
        let _guard = lock.lock().await;

        let task = self.load(task_id)?;
        if task.status != TaskStatus::Open {
            return Err(LifecycleError::precondition(
                task.status,
                "Only an unclaimed task can be cancelled",
            ));
        }
        Self::require_owner(&caller, &task.creator_wallet, "creator")?;

        let refund = self
            .settlement
            .refund(&task.creator_wallet, task.amount)
            .await?;
        let task = self.tasks.update(task_id, &mut |t| {
            t.status = TaskStatus::Cancelled;
            t.tx_id = Some(refund.tx_id.clone());
        })?;
        info!(task_id, amount = %refund.amount, "Task cancelled, escrow refunded");
        Ok(RefundedTask { task, refund })
    }

    async fn dispute_task(
        &self,
        task_id: &str,
        reason: &str,
        headers: &AuthHeaders,
    ) -> Result<Task, LifecycleError> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(LifecycleError::ValidationFailed(
                "a dispute reason is required".to_string(),
            ));
        }
        let caller = self.authenticate(headers)?;

        let lock = self.locks.handle(task_id);
        let _guard = lock.lock().await;

        let task = self.load(task_id)?;
        if !matches!(task.status, TaskStatus::Claimed | TaskStatus::Submitted) {
            return Err(LifecycleError::precondition(
                task.status,
                "Only a claimed or submitted task can be disputed",
            ));
        }
        let disputant = Self::require_participant(&caller, &task)?;

        let task = self.tasks.update(task_id, &mut |t| {
            t.status = TaskStatus::Disputed;
            t.dispute_reason = Some(reason.to_string());
            t.disputed_by = Some(disputant.clone());
        })?;
        warn!(task_id, disputed_by = %disputant, "Task disputed; escrow frozen");
        Ok(task)
    }

    async fn expire_task(
        &self,
        task_id: &str,
        headers: &AuthHeaders,
    ) -> Result<RefundedTask, LifecycleError> {
        let caller = self.authenticate(headers)?;

        let lock = self.locks.handle(task_id);
        let _guard = lock.lock().await;

        let task = self.load(task_id)?;
        if task.status.is_terminal() {
            return Err(LifecycleError::precondition(
                task.status,
                "Task is already settled",
            ));
        }
        Self::require_owner(&caller, &task.creator_wallet, "creator")?;

        let deadline = task.deadline.ok_or_else(|| {
            LifecycleError::ValidationFailed("task has no deadline".to_string())
        })?;
        if self.clock.now_ms() <= deadline {
            return Err(LifecycleError::precondition(
                task.status,
                "Deadline has not passed yet",
            ));
        }

        let refund = self
            .settlement
            .refund(&task.creator_wallet, task.amount)
            .await?;
        let task = self.tasks.update(task_id, &mut |t| {
            t.status = TaskStatus::Expired;
            t.tx_id = Some(refund.tx_id.clone());
        })?;
        info!(task_id, amount = %refund.amount, "Task expired, escrow refunded");
        Ok(RefundedTask { task, refund })
    }

    async fn ai_verify_task(
        &self,
        task_id: &str,
        headers: &AuthHeaders,
    ) -> Result<ProofScore, LifecycleError> {
        self.authenticate(headers)?;

        let task = self.load(task_id)?;
        if task.status != TaskStatus::Submitted {
            return Err(LifecycleError::precondition(
                task.status,
                "Only a submitted task can be scored",
            ));
        }
        let proof_url = task.proof_url.as_deref().unwrap_or_default();
        let score = self.scorer.score(&task.description, proof_url).await?;
        info!(task_id, score = score.score, verdict = ?score.verdict, "Proof scored");
        Ok(score)
    }

    async fn get_task(&self, task_id: &str) -> Result<Task, LifecycleError> {
        self.load(task_id)
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, LifecycleError> {
        Ok(self.tasks.list()?)
    }

    async fn escrow_info(&self) -> Result<EscrowInfo, LifecycleError> {
        Ok(self.settlement.escrow_info().await)
    }

    async fn set_wallet_role(
        &self,
        wallet: &str,
        role: WalletRole,
        headers: &AuthHeaders,
    ) -> Result<(), LifecycleError> {
        let wallet = wallet.trim();
        validate_wallet(wallet, "wallet")?;
        let caller = self.authenticate(headers)?;
        Self::require_owner(&caller, wallet, "owning")?;
        self.roles.set_role(wallet, role)?;
        Ok(())
    }

    async fn get_wallet_role(
        &self,
        wallet: &str,
    ) -> Result<Option<WalletRole>, LifecycleError> {
        Ok(self.roles.get_role(wallet.trim())?)
    }
}
