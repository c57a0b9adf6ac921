//! Service layer for task creation, lookup, and state transitions.

use crate::task::{
    domain::{NewTask, ParseTaskStateError, Task, TaskDomainError, TaskState, parse_priority},
    ports::{ModuleDirResolver, PathResolutionError, TaskStore, TaskStoreError},
};
use camino::{Utf8Path, Utf8PathBuf};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for transitioning a stored task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTaskRequest {
    path: Utf8PathBuf,
    target_state: String,
}

impl TransitionTaskRequest {
    /// Creates a transition request for the record at `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>, target_state: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            target_state: target_state.into(),
        }
    }

    /// Returns the record path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Returns the requested state text.
    #[must_use]
    pub fn target_state(&self) -> &str {
        &self.target_state
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The module directory could not be resolved.
    #[error(transparent)]
    PathResolution(#[from] PathResolutionError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
    /// The requested state text is not a known state.
    #[error(transparent)]
    InvalidState(#[from] ParseTaskStateError),
    /// No task record exists at the path.
    #[error("no task record at {0}")]
    NotFound(Utf8PathBuf),
    /// The record was read from a path other than the one its creation
    /// time derives.
    #[error("task record at {requested} belongs at {derived}")]
    Misplaced {
        /// Path the record was read from.
        requested: Utf8PathBuf,
        /// Path derived from the record's creation time.
        derived: Utf8PathBuf,
    },
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<S, R, C>
where
    S: TaskStore,
    R: ModuleDirResolver,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    resolver: Arc<R>,
    clock: Arc<C>,
}

impl<S, R, C> TaskLifecycleService<S, R, C>
where
    S: TaskStore,
    R: ModuleDirResolver,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(store: Arc<S>, resolver: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            store,
            resolver,
            clock,
        }
    }

    /// Creates, places, and stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when the initial state is terminal, the
    /// module directory cannot be resolved, or the store rejects the record.
    pub fn create(&self, new_task: NewTask) -> TaskLifecycleResult<Task> {
        let mut task = Task::create(new_task, &*self.clock)?;
        task.update_path(&*self.resolver)?;
        self.store.store(&task)?;

        tracing::info!(
            task_id = %task.id(),
            state = %task.state(),
            path = ?task.path(),
            "created task"
        );
        Ok(task)
    }

    /// Loads the task stored at `path` and re-derives its location.
    ///
    /// Returns `Ok(None)` when no record exists.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Misplaced`] when the derived path differs
    /// from `path`, or [`TaskLifecycleError`] when the store or resolver
    /// fails.
    pub fn find(&self, path: &Utf8Path) -> TaskLifecycleResult<Option<Task>> {
        let Some(mut task) = self.store.find_by_path(path)? else {
            return Ok(None);
        };
        task.update_path(&*self.resolver)?;
        if let Some(derived) = task.path().filter(|candidate| *candidate != path) {
            return Err(TaskLifecycleError::Misplaced {
                requested: path.to_owned(),
                derived: derived.to_owned(),
            });
        }
        tracing::debug!(task_id = %task.id(), %path, "loaded task");
        Ok(Some(task))
    }

    /// Transitions the stored task and persists the result.
    ///
    /// Nothing is persisted when the transition is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::InvalidState`] for unknown state text,
    /// [`TaskLifecycleError::NotFound`] when no record exists, or
    /// [`TaskLifecycleError::Domain`] when the transition is not allowed.
    pub fn transition(&self, request: TransitionTaskRequest) -> TaskLifecycleResult<Task> {
        let target = TaskState::try_from(request.target_state())?;
        let mut task = self.load(request.path())?;
        let from = task.state();

        task.transition_to(target, &*self.clock)?;
        self.store.update(&task)?;

        tracing::debug!(
            task_id = %task.id(),
            %from,
            to = %target,
            worked_secs = task.worked().num_seconds(),
            "transitioned task"
        );
        Ok(task)
    }

    /// Validates `priority_text` and persists it on the stored task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] for invalid priority text or
    /// [`TaskLifecycleError::NotFound`] when no record exists.
    pub fn set_priority(
        &self,
        path: &Utf8Path,
        priority_text: &str,
    ) -> TaskLifecycleResult<Task> {
        let priority = parse_priority(priority_text)?;
        let mut task = self.load(path)?;
        task.set_priority(priority);
        self.store.update(&task)?;

        tracing::debug!(task_id = %task.id(), %priority, "updated task priority");
        Ok(task)
    }

    fn load(&self, path: &Utf8Path) -> TaskLifecycleResult<Task> {
        self.find(path)?
            .ok_or_else(|| TaskLifecycleError::NotFound(path.to_owned()))
    }
}
