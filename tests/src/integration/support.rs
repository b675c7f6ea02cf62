//! Shared fixtures: a fully wired in-memory node.

use bb_01_identity::AuthHeaders;
use bb_02_ledger::SimulatedLedger;
use bb_06_lifecycle::{CreateTaskRequest, TaskLifecycleApi, TaskLifecycleService};
use node_runtime::{AppContainer, NodeConfig};
use shared_types::{Amount, Task, TxId};
use std::sync::Arc;

pub const CREATOR: &str = "CREATOR_WALLET_1";
pub const WORKER: &str = "WORKER_WALLET_1";
pub const OUTSIDER: &str = "OUTSIDER_WALLET_1";

/// A wired node over the in-memory store and simulated ledger, with strict
/// deposits so every funding path runs the real double-spend guard.
pub struct TestNode {
    pub container: AppContainer,
}

impl TestNode {
    pub fn new() -> Self {
        Self::with_config(Self::config())
    }

    pub fn with_config(config: NodeConfig) -> Self {
        Self {
            container: AppContainer::new(config).expect("container wires"),
        }
    }

    /// Development defaults, minus the file store, plus strict deposits.
    pub fn config() -> NodeConfig {
        let mut config = NodeConfig::default();
        config.storage.file_backed = false;
        config.escrow.strict_deposits = true;
        config
    }

    pub fn lifecycle(&self) -> Arc<TaskLifecycleService> {
        Arc::clone(&self.container.lifecycle)
    }

    pub fn ledger(&self) -> &Arc<SimulatedLedger> {
        self.container
            .simulated_ledger
            .as_ref()
            .expect("simulated ledger")
    }

    /// Records a confirmed escrow deposit on the simulated network.
    pub fn seed_deposit(&self, sender: &str, amount: Amount) -> TxId {
        self.ledger().seed_deposit(sender, amount)
    }

    /// Seeds a deposit and creates the matching task.
    pub async fn funded_task(&self, units: u64) -> Task {
        let amount = Amount::from_units(units);
        let tx_id = self.seed_deposit(CREATOR, amount);
        self.lifecycle()
            .create_task(create_request(amount, &tx_id), &headers(CREATOR))
            .await
            .expect("task creation")
    }
}

impl Default for TestNode {
    fn default() -> Self {
        Self::new()
    }
}

/// Permissive-mode headers: a bare wallet address.
pub fn headers(wallet: &str) -> AuthHeaders {
    AuthHeaders::of_wallet(wallet)
}

pub fn create_request(amount: Amount, tx_id: &str) -> CreateTaskRequest {
    CreateTaskRequest {
        title: "Translate onboarding guide".to_string(),
        description: "Translate the onboarding guide to Spanish and open a PR".to_string(),
        amount,
        creator_wallet: CREATOR.to_string(),
        deadline: None,
        tx_id: Some(tx_id.to_string()),
    }
}
