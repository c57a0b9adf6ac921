//! In-memory task store for tests and embedding.

use camino::{Utf8Path, Utf8PathBuf};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::Task,
    ports::{TaskStore, TaskStoreError, TaskStoreResult, require_path},
};

/// Thread-safe in-memory task store keyed by record path.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    tasks: Arc<RwLock<HashMap<Utf8PathBuf, Task>>>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the lock is poisoned.
    pub fn record_count(&self) -> TaskStoreResult<usize> {
        let tasks = self.tasks.read().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(tasks.len())
    }
}

/// Strips the derived path so loaded tasks match what a file store returns.
fn detached(task: &Task) -> Task {
    let mut copy = task.clone();
    copy.clear_path();
    copy
}

impl TaskStore for InMemoryTaskStore {
    fn store(&self, task: &Task) -> TaskStoreResult<()> {
        let path = require_path(task)?;
        let mut tasks = self.tasks.write().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if tasks.contains_key(path) {
            return Err(TaskStoreError::DuplicateTask(path.to_owned()));
        }
        tasks.insert(path.to_owned(), detached(task));
        Ok(())
    }

    fn update(&self, task: &Task) -> TaskStoreResult<()> {
        let path = require_path(task)?;
        let mut tasks = self.tasks.write().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let slot = tasks
            .get_mut(path)
            .ok_or_else(|| TaskStoreError::NotFound(path.to_owned()))?;
        *slot = detached(task);
        Ok(())
    }

    fn find_by_path(&self, path: &Utf8Path) -> TaskStoreResult<Option<Task>> {
        let tasks = self.tasks.read().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(tasks.get(path).cloned())
    }
}
