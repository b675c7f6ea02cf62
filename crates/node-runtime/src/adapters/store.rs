//! Store-facing port bridges.

use bb_03_deposit_guard::UsedTransactionSet;
use bb_04_task_store::{RoleRegistry, TaskRepository, UsedTxRegistry};
use bb_06_lifecycle::{RolePort, TaskRepositoryPort};
use shared_types::{StorageError, Task, WalletRole};
use std::sync::Arc;

/// The Lifecycle Controller's task repository over bb-04.
pub struct TaskRepositoryBridge {
    repository: Arc<TaskRepository>,
}

impl TaskRepositoryBridge {
    pub fn new(repository: Arc<TaskRepository>) -> Self {
        Self { repository }
    }
}

impl TaskRepositoryPort for TaskRepositoryBridge {
    fn insert(&self, task: &Task) -> Result<(), StorageError> {
        self.repository.insert(task)
    }

    fn get(&self, id: &str) -> Result<Option<Task>, StorageError> {
        self.repository.get(id)
    }

    fn update(
        &self,
        id: &str,
        mutate: &mut dyn FnMut(&mut Task),
    ) -> Result<Task, StorageError> {
        self.repository.update(id, |task| mutate(task))
    }

    fn list(&self) -> Result<Vec<Task>, StorageError> {
        self.repository.list()
    }
}

/// The Double-Spend Guard's used-transaction set over bb-04.
pub struct UsedTxSetBridge {
    registry: Arc<UsedTxRegistry>,
}

impl UsedTxSetBridge {
    pub fn new(registry: Arc<UsedTxRegistry>) -> Self {
        Self { registry }
    }
}

impl UsedTransactionSet for UsedTxSetBridge {
    fn insert_if_absent(&self, tx_id: &str) -> Result<bool, StorageError> {
        self.registry.insert_if_absent(tx_id)
    }

    fn contains(&self, tx_id: &str) -> Result<bool, StorageError> {
        self.registry.contains(tx_id)
    }
}

/// The Lifecycle Controller's role storage over bb-04.
pub struct RoleRegistryBridge {
    registry: Arc<RoleRegistry>,
}

impl RoleRegistryBridge {
    pub fn new(registry: Arc<RoleRegistry>) -> Self {
        Self { registry }
    }
}

impl RolePort for RoleRegistryBridge {
    fn set_role(&self, wallet: &str, role: WalletRole) -> Result<(), StorageError> {
        self.registry.set_role(wallet, role)
    }

    fn get_role(&self, wallet: &str) -> Result<Option<WalletRole>, StorageError> {
        self.registry.get_role(wallet)
    }
}
