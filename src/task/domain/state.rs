//! Task lifecycle states and the transition table.

use super::ParseTaskStateError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Task lifecycle state.
///
/// `Completed` and `Deleted` are terminal: no transition leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    /// Task is assigned but work has not started.
    Assigned,
    /// Task is being worked on; time accrues while in this state.
    InProgress,
    /// Task is waiting on something outside the owner's control.
    Blocked,
    /// Task has been put off until later.
    Deferred,
    /// Task has been completed.
    Completed,
    /// Task is obsolete.
    Deleted,
}

impl TaskState {
    /// Every state, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Assigned,
        Self::InProgress,
        Self::Blocked,
        Self::Deferred,
        Self::Completed,
        Self::Deleted,
    ];

    /// Returns the destinations reachable from this state.
    #[must_use]
    pub const fn allowed_transitions(self) -> &'static [Self] {
        match self {
            Self::Assigned => &[Self::InProgress, Self::Blocked, Self::Deferred, Self::Deleted],
            Self::InProgress => &[Self::Assigned, Self::Blocked, Self::Completed, Self::Deferred],
            Self::Blocked => &[Self::InProgress, Self::Deferred, Self::Deleted],
            Self::Deferred => &[Self::InProgress, Self::Blocked, Self::Deleted],
            Self::Completed | Self::Deleted => &[],
        }
    }

    /// Returns whether transition to `target` is allowed.
    #[must_use]
    pub fn can_transition_to(self, target: Self) -> bool {
        self.allowed_transitions().contains(&target)
    }

    /// Returns whether no transition leaves this state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.allowed_transitions().is_empty()
    }

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assigned => "assigned",
            Self::InProgress => "in_progress",
            Self::Blocked => "blocked",
            Self::Deferred => "deferred",
            Self::Completed => "completed",
            Self::Deleted => "deleted",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Assigned => "assigned",
            Self::InProgress => "in-progress",
            Self::Blocked => "blocked",
            Self::Deferred => "deferred",
            Self::Completed => "complete",
            Self::Deleted => "obsolete",
        }
    }

    /// Returns the numeric code rendered by [`describe_state_code`].
    ///
    /// Codes are a diagnostic form only; records store the names from
    /// [`Self::as_str`].
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::InProgress => 0,
            Self::Assigned => 1,
            Self::Blocked => 2,
            Self::Deferred => 3,
            Self::Completed => 4,
            Self::Deleted => 5,
        }
    }

    /// Looks up a state by numeric code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::InProgress),
            1 => Some(Self::Assigned),
            2 => Some(Self::Blocked),
            3 => Some(Self::Deferred),
            4 => Some(Self::Completed),
            5 => Some(Self::Deleted),
            _ => None,
        }
    }
}

/// Renders a raw state code for diagnostics.
///
/// Unknown codes render as `State(<code>)`.
#[must_use]
pub fn describe_state_code(code: u8) -> Cow<'static, str> {
    TaskState::from_code(code).map_or_else(
        || Cow::Owned(format!("State({code})")),
        |state| Cow::Borrowed(state.label()),
    )
}

impl fmt::Display for TaskState {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

impl TryFrom<&str> for TaskState {
    type Error = ParseTaskStateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "assigned" => Ok(Self::Assigned),
            "in_progress" | "in-progress" => Ok(Self::InProgress),
            "blocked" => Ok(Self::Blocked),
            "deferred" => Ok(Self::Deferred),
            "completed" | "complete" => Ok(Self::Completed),
            "deleted" | "obsolete" => Ok(Self::Deleted),
            _ => Err(ParseTaskStateError(value.to_owned())),
        }
    }
}
