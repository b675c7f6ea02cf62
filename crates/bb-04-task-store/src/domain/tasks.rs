//! Task repository.

use crate::ports::KeyValueStore;
use parking_lot::Mutex;
use shared_types::{StorageError, Task};
use std::sync::Arc;
use tracing::debug;

/// Key prefix for task records.
const PREFIX: &str = "task/";

/// Durable mapping from task identifier to task record.
///
/// Writes go through a repository-level lock so that insert's existence
/// check and update's read-modify-write are indivisible. Callers needing a
/// wider critical section (check status, settle, persist) hold their own
/// per-task lock around these calls.
pub struct TaskRepository {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl TaskRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    fn key(id: &str) -> String {
        format!("{PREFIX}{id}")
    }

    fn decode(key: &str, json: &str) -> Result<Task, StorageError> {
        serde_json::from_str(json).map_err(|e| StorageError::Corrupt {
            key: key.to_string(),
            message: e.to_string(),
        })
    }

    fn encode(task: &Task) -> Result<String, StorageError> {
        serde_json::to_string(task).map_err(|e| StorageError::Serialization(e.to_string()))
    }

    /// Inserts a new task; rejects an already-used identifier.
    pub fn insert(&self, task: &Task) -> Result<(), StorageError> {
        let key = Self::key(&task.id);
        let _guard = self.write_lock.lock();
        if self.store.exists(&key)? {
            return Err(StorageError::Conflict(key));
        }
        self.store.put(&key, &Self::encode(task)?)?;
        debug!(task_id = %task.id, "Task inserted");
        Ok(())
    }

    /// Fetches a task by identifier.
    pub fn get(&self, id: &str) -> Result<Option<Task>, StorageError> {
        let key = Self::key(id);
        match self.store.get(&key)? {
            Some(json) => Ok(Some(Self::decode(&key, &json)?)),
            None => Ok(None),
        }
    }

    /// Read-modify-write on an existing task; returns the stored result.
    ///
    /// # Errors
    /// - `NotFound` if no task has this identifier
    pub fn update<F>(&self, id: &str, mutate: F) -> Result<Task, StorageError>
    where
        F: FnOnce(&mut Task),
    {
        let key = Self::key(id);
        let _guard = self.write_lock.lock();
        let json = self
            .store
            .get(&key)?
            .ok_or_else(|| StorageError::NotFound(key.clone()))?;
        let mut task = Self::decode(&key, &json)?;
        mutate(&mut task);
        self.store.put(&key, &Self::encode(&task)?)?;
        debug!(task_id = %id, status = %task.status, "Task updated");
        Ok(task)
    }

    /// All tasks, newest first.
    pub fn list(&self) -> Result<Vec<Task>, StorageError> {
        let mut tasks = Vec::new();
        for (key, json) in self.store.prefix_scan(PREFIX)? {
            tasks.push(Self::decode(&key, &json)?);
        }
        // Identifier as tie-break keeps the order stable across scans.
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(tasks)
    }

    /// Administrative removal, outside the lifecycle.
    pub fn delete(&self, id: &str) -> Result<bool, StorageError> {
        let _guard = self.write_lock.lock();
        self.store.delete(&Self::key(id))
    }
}
