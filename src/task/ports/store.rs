//! Record persistence port for tasks.

use crate::task::domain::{Task, TaskId};
use camino::{Utf8Path, Utf8PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task record persistence contract.
///
/// Records are keyed by the task's derived path. Stored bodies exclude the
/// identifier and path; both are derived again after loading.
pub trait TaskStore: Send + Sync {
    /// Stores a new task record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::MissingPath`] when the path has not been
    /// derived, [`TaskStoreError::MissingDirectory`] when the record's
    /// directory does not exist, or [`TaskStoreError::DuplicateTask`] when a
    /// record already exists at the path.
    fn store(&self, task: &Task) -> TaskStoreResult<()>;

    /// Persists changes to an existing task record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::MissingPath`] when the path has not been
    /// derived, [`TaskStoreError::MissingDirectory`] when the record's
    /// directory does not exist, or [`TaskStoreError::NotFound`] when no
    /// record exists.
    fn update(&self, task: &Task) -> TaskStoreResult<()>;

    /// Loads the task record at `path`.
    ///
    /// Returns `None` when no record exists. The returned task has no path
    /// set.
    fn find_by_path(&self, path: &Utf8Path) -> TaskStoreResult<Option<Task>>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The task path has not been derived.
    #[error("task {0} has no storage path")]
    MissingPath(TaskId),

    /// A record already exists at the path.
    #[error("duplicate task record: {0}")]
    DuplicateTask(Utf8PathBuf),

    /// No record exists at the path.
    #[error("task record not found: {0}")]
    NotFound(Utf8PathBuf),

    /// The directory that should hold the record does not exist.
    #[error("task directory does not exist: {0}")]
    MissingDirectory(Utf8PathBuf),

    /// The stored record could not be decoded into a valid task.
    #[error("corrupt task record {path}: {reason}")]
    Corrupt {
        /// Record path.
        path: Utf8PathBuf,
        /// Decoding or validation failure.
        reason: String,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

/// Returns the task's path or [`TaskStoreError::MissingPath`].
///
/// # Errors
///
/// Returns [`TaskStoreError::MissingPath`] when the path is unset.
pub fn require_path(task: &Task) -> TaskStoreResult<&Utf8Path> {
    task.path()
        .ok_or_else(|| TaskStoreError::MissingPath(task.id().clone()))
}
