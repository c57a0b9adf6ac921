//! Error types for task domain validation and parsing.

use super::{TaskId, TaskState};
use thiserror::Error;

/// Errors returned by task domain operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The requested state is not reachable from the current state.
    #[error("cannot transition task {task_id} from {from} to {to}")]
    InvalidTransition {
        /// Task identifier.
        task_id: TaskId,
        /// Current state.
        from: TaskState,
        /// Requested target state.
        to: TaskState,
    },

    /// Priority text did not parse or fell outside `0..=9`.
    #[error("priority must be between 0 and 9, got '{0}'")]
    InvalidPriority(String),

    /// New tasks cannot start in a terminal state.
    #[error("task cannot be created in terminal state {0}")]
    TerminalInitialState(TaskState),

    /// A persisted start stamp disagrees with the persisted state.
    #[error("task in state {state} has inconsistent start stamp (present: {started_present})")]
    StartedStampMismatch {
        /// Persisted state.
        state: TaskState,
        /// Whether a start stamp was present.
        started_present: bool,
    },

    /// A persisted worked duration is negative.
    #[error("worked duration must not be negative")]
    NegativeWorked,
}

/// Error returned while parsing task states from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task state: {0}")]
pub struct ParseTaskStateError(pub String);
