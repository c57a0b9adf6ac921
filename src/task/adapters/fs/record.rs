//! JSON record body for task files.

use crate::task::domain::{PersistedTaskData, Priority, Task, TaskDomainError, TaskState};
use chrono::{DateTime, FixedOffset, TimeDelta};
use serde::{Deserialize, Serialize};

/// Serialized task body.
///
/// The identifier and path are absent on purpose: both are derived from
/// `created` after loading. Timestamps keep the offset they were stamped
/// with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Creation timestamp.
    pub created: DateTime<FixedOffset>,
    /// Lifecycle state.
    pub state: TaskState,
    /// Due timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<DateTime<FixedOffset>>,
    /// Priority.
    pub priority: Priority,
    /// Description.
    pub description: String,
    /// Notes.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
    /// Start stamp of the current in-progress visit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started: Option<DateTime<FixedOffset>>,
    /// Accumulated in-progress time.
    #[serde(default = "TimeDelta::zero", with = "worked_nanos", skip_serializing_if = "TimeDelta::is_zero")]
    pub worked: TimeDelta,
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            created: task.created(),
            state: task.state(),
            due: task.due(),
            priority: task.priority(),
            description: task.description().to_owned(),
            notes: task.notes().to_owned(),
            started: task.started(),
            worked: task.worked(),
        }
    }
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskDomainError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        Self::from_persisted(PersistedTaskData {
            created: record.created,
            state: record.state,
            due: record.due,
            priority: record.priority,
            description: record.description,
            notes: record.notes,
            started: record.started,
            worked: record.worked,
        })
    }
}

/// Worked duration as integer nanoseconds.
mod worked_nanos {
    use chrono::TimeDelta;
    use serde::{Deserialize, Deserializer, Serializer, de, ser};

    pub(super) fn serialize<S: Serializer>(
        worked: &TimeDelta,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let nanos = worked
            .num_nanoseconds()
            .ok_or_else(|| ser::Error::custom("worked duration exceeds nanosecond range"))?;
        serializer.serialize_i64(nanos)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<TimeDelta, D::Error> {
        let nanos = i64::deserialize(deserializer)?;
        if nanos < 0 {
            return Err(de::Error::custom("worked duration must not be negative"));
        }
        Ok(TimeDelta::nanoseconds(nanos))
    }
}
