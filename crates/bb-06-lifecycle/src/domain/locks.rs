//! Per-task lock map.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex as AsyncMutex;

/// Hands out one async mutex per task identifier.
///
/// The outer map lock is synchronous and held only while cloning out a
/// handle, never across an await point. The async handle is then held for
/// the whole read-check-settle-write sequence, which may span ledger calls
/// lasting seconds, without blocking operations on unrelated tasks.
#[derive(Default)]
pub struct TaskLockMap {
    locks: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl TaskLockMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The lock handle for `task_id`, created on first use.
    pub fn handle(&self, task_id: &str) -> Arc<AsyncMutex<()>> {
        Arc::clone(
            self.locks
                .lock()
                .entry(task_id.to_string())
                .or_default(),
        )
    }

    /// Number of task identifiers ever locked (locks are retained; tasks
    /// are few and never physically deleted in normal operation).
    pub fn len(&self) -> usize {
        self.locks.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.lock().is_empty()
    }
}
