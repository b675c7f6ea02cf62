//! # Subsystem Container
//!
//! Builds every subsystem in dependency order (store → ledger → guard /
//! settlement → identity → lifecycle) and hands out the wired Lifecycle
//! Controller.

use crate::adapters::{
    DepositGuardBridge, DepositLedgerBridge, HeuristicScorer, OfflineScorer, PayoutLedgerBridge,
    RoleRegistryBridge, SettlementBridge, SystemTimeSource, TaskRepositoryBridge, UsedTxSetBridge,
};
use crate::container::config::{IdentityMode, LedgerMode, NodeConfig};
use bb_01_identity::IdentityService;
use bb_02_ledger::{LedgerGateway, SimulatedLedger};
use bb_03_deposit_guard::{DepositGuard, DepositPolicy};
use bb_04_task_store::{
    FileBackedKVStore, KeyValueStore, MemoryKVStore, RoleRegistry, TaskRepository, UsedTxRegistry,
};
use bb_05_settlement::{SettlementConfig, SettlementEngine};
use bb_06_lifecycle::{ProofScorer, TaskLifecycleService};
use shared_types::StorageError;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Store file name inside the data directory.
const STORE_FILE: &str = "bounty-board.json";

/// Failures while wiring the container.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// The durable store could not be opened.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Network ledger mode needs an injected gateway adapter.
    #[error(
        "Ledger mode 'network' requires a gateway adapter; \
         construct the container with `with_gateway`"
    )]
    MissingNetworkGateway,
}

/// The wired node: configuration plus the Lifecycle Controller facade.
pub struct AppContainer {
    pub config: NodeConfig,
    /// The core service every transport call lands on.
    pub lifecycle: Arc<TaskLifecycleService>,
    /// Present in simulated ledger mode so development tooling and tests
    /// can seed deposits.
    pub simulated_ledger: Option<Arc<SimulatedLedger>>,
}

impl AppContainer {
    /// Builds the container with the configured (simulated) ledger.
    pub fn new(config: NodeConfig) -> Result<Self, ContainerError> {
        match config.ledger.mode {
            LedgerMode::Simulated => {
                let simulated = Arc::new(SimulatedLedger::new(config.escrow.address.clone()));
                let gateway: Arc<dyn LedgerGateway> = simulated.clone();
                Self::build(config, gateway, Some(simulated))
            }
            // The real network client lives outside this workspace and is
            // injected by the deployment.
            LedgerMode::Network => Err(ContainerError::MissingNetworkGateway),
        }
    }

    /// Builds the container around an externally provided ledger gateway.
    pub fn with_gateway(
        config: NodeConfig,
        gateway: Arc<dyn LedgerGateway>,
    ) -> Result<Self, ContainerError> {
        Self::build(config, gateway, None)
    }

    fn build(
        config: NodeConfig,
        gateway: Arc<dyn LedgerGateway>,
        simulated_ledger: Option<Arc<SimulatedLedger>>,
    ) -> Result<Self, ContainerError> {
        // Level 0: durable storage.
        let store: Arc<dyn KeyValueStore> = if config.storage.file_backed {
            let path = config.storage.data_dir.join(STORE_FILE);
            info!(path = %path.display(), "Using file-backed store");
            Arc::new(FileBackedKVStore::open(path)?)
        } else {
            info!("Using in-memory store");
            Arc::new(MemoryKVStore::new())
        };
        let tasks = Arc::new(TaskRepository::new(Arc::clone(&store)));
        let used_txs = Arc::new(UsedTxRegistry::new(Arc::clone(&store)));
        let roles = Arc::new(RoleRegistry::new(Arc::clone(&store)));

        // Level 1: identity and the escrow subsystems.
        let identity = Arc::new(match config.identity.mode {
            IdentityMode::Strict => IdentityService::strict(),
            IdentityMode::Permissive => IdentityService::permissive(),
        });
        let deposit_policy = if config.escrow.strict_deposits {
            DepositPolicy::Strict
        } else {
            DepositPolicy::Permissive
        };
        let guard = Arc::new(DepositGuard::new(
            Arc::new(DepositLedgerBridge::new(Arc::clone(&gateway))),
            Arc::new(UsedTxSetBridge::new(Arc::clone(&used_txs))),
            config.escrow.address.clone(),
            deposit_policy,
        ));
        let settlement = Arc::new(SettlementEngine::new(
            Arc::new(PayoutLedgerBridge::new(Arc::clone(&gateway))),
            SettlementConfig {
                escrow_address: config.escrow.address.clone(),
                ledger_timeout: config.ledger.timeout(),
                configured: config.ledger.mode == LedgerMode::Network,
            },
        ));
        let scorer: Arc<dyn ProofScorer> = if config.scoring.enabled {
            Arc::new(HeuristicScorer::new(config.scoring.pass_threshold))
        } else {
            Arc::new(OfflineScorer)
        };

        // Level 2: the core.
        let lifecycle = Arc::new(TaskLifecycleService::new(
            identity,
            Arc::new(TaskRepositoryBridge::new(tasks)),
            Arc::new(DepositGuardBridge::new(guard)),
            Arc::new(SettlementBridge::new(settlement)),
            scorer,
            Arc::new(RoleRegistryBridge::new(roles)),
            Arc::new(SystemTimeSource),
        ));
        info!("All subsystems wired");

        Ok(Self {
            config,
            lifecycle,
            simulated_ledger,
        })
    }
}
