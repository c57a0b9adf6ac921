//! Domain model for task records.
//!
//! The task domain covers the lifecycle state machine with its time
//! accounting, content-derived identity, and storage location derivation.
//! Infrastructure concerns stay outside the domain boundary and are reached
//! through [`crate::task::ports`].

mod error;
mod ids;
mod location;
mod priority;
mod state;
mod task;

pub use error::{ParseTaskStateError, TaskDomainError};
pub use ids::TaskId;
pub use location::{TASK_MODULE, derive_task_path, task_file_name};
pub use priority::{Priority, parse_priority};
pub use state::{TaskState, describe_state_code};
pub use task::{NewTask, PersistedTaskData, Task};
