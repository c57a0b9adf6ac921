//! Task aggregate root.

use super::{Priority, TaskDomainError, TaskId, TaskState, derive_task_path};
use crate::task::ports::{ModuleDirResolver, PathResolutionError};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, FixedOffset, TimeDelta};
use mockable::Clock;

/// Parameters for creating a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    description: String,
    priority: Priority,
    due: Option<DateTime<FixedOffset>>,
    notes: String,
    initial_state: TaskState,
}

impl NewTask {
    /// Creates parameters for a task that starts in progress.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            priority: Priority::default(),
            due: None,
            notes: String::new(),
            initial_state: TaskState::InProgress,
        }
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due timestamp.
    #[must_use]
    pub const fn with_due(mut self, due: DateTime<FixedOffset>) -> Self {
        self.due = Some(due);
        self
    }

    /// Sets free-text notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Sets the state the task starts in.
    #[must_use]
    pub const fn with_initial_state(mut self, state: TaskState) -> Self {
        self.initial_state = state;
        self
    }
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted creation timestamp.
    pub created: DateTime<FixedOffset>,
    /// Persisted lifecycle state.
    pub state: TaskState,
    /// Persisted due timestamp.
    pub due: Option<DateTime<FixedOffset>>,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted description.
    pub description: String,
    /// Persisted notes.
    pub notes: String,
    /// Persisted start stamp of the current in-progress visit.
    pub started: Option<DateTime<FixedOffset>>,
    /// Persisted accumulated in-progress time.
    pub worked: TimeDelta,
}

/// Task aggregate root.
///
/// `started` is set exactly when the state is [`TaskState::InProgress`], and
/// `worked` never decreases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    created: DateTime<FixedOffset>,
    state: TaskState,
    due: Option<DateTime<FixedOffset>>,
    priority: Priority,
    description: String,
    notes: String,
    started: Option<DateTime<FixedOffset>>,
    worked: TimeDelta,
    path: Option<Utf8PathBuf>,
}

impl Task {
    /// Creates a new task stamped with the clock's local time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TerminalInitialState`] when the requested
    /// initial state is terminal.
    pub fn create(new_task: NewTask, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        Self::create_at(new_task, local_now(clock))
    }

    /// Creates a new task stamped with `created`.
    ///
    /// The offset of `created` is kept; it selects the year directory and
    /// file name, and is part of the identifier text.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TerminalInitialState`] when the requested
    /// initial state is terminal.
    pub fn create_at(
        new_task: NewTask,
        created: DateTime<FixedOffset>,
    ) -> Result<Self, TaskDomainError> {
        if new_task.initial_state.is_terminal() {
            return Err(TaskDomainError::TerminalInitialState(
                new_task.initial_state,
            ));
        }

        let started = (new_task.initial_state == TaskState::InProgress).then_some(created);
        Ok(Self {
            id: TaskId::from_created(created),
            created,
            state: new_task.initial_state,
            due: new_task.due,
            priority: new_task.priority,
            description: new_task.description,
            notes: new_task.notes,
            started,
            worked: TimeDelta::zero(),
            path: None,
        })
    }

    /// Reconstructs a task from persisted fields, re-deriving its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::StartedStampMismatch`] when the start stamp
    /// disagrees with the state, or [`TaskDomainError::NegativeWorked`] when
    /// the worked duration is negative.
    pub fn from_persisted(data: PersistedTaskData) -> Result<Self, TaskDomainError> {
        let started_present = data.started.is_some();
        if started_present != (data.state == TaskState::InProgress) {
            return Err(TaskDomainError::StartedStampMismatch {
                state: data.state,
                started_present,
            });
        }
        if data.worked < TimeDelta::zero() {
            return Err(TaskDomainError::NegativeWorked);
        }

        Ok(Self {
            id: TaskId::from_created(data.created),
            created: data.created,
            state: data.state,
            due: data.due,
            priority: data.priority,
            description: data.description,
            notes: data.notes,
            started: data.started,
            worked: data.worked,
            path: None,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created(&self) -> DateTime<FixedOffset> {
        self.created
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn state(&self) -> TaskState {
        self.state
    }

    /// Returns the due timestamp, if any.
    #[must_use]
    pub const fn due(&self) -> Option<DateTime<FixedOffset>> {
        self.due
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the notes.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Returns when the current in-progress visit started.
    #[must_use]
    pub const fn started(&self) -> Option<DateTime<FixedOffset>> {
        self.started
    }

    /// Returns the accumulated in-progress time of completed visits.
    #[must_use]
    pub const fn worked(&self) -> TimeDelta {
        self.worked
    }

    /// Returns the worked duration including the current in-progress visit
    /// up to `now`.
    ///
    /// Time before the start stamp counts as zero.
    #[must_use]
    pub fn worked_until(&self, now: DateTime<FixedOffset>) -> TimeDelta {
        let Some(started) = self.started else {
            return self.worked;
        };
        let elapsed = (now - started).max(TimeDelta::zero());
        self.worked.checked_add(&elapsed).unwrap_or(TimeDelta::MAX)
    }

    /// Returns the derived record path, if it has been computed.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8Path> {
        self.path.as_deref()
    }

    /// Sets or clears the due timestamp.
    pub const fn set_due(&mut self, due: Option<DateTime<FixedOffset>>) {
        self.due = due;
    }

    /// Sets the priority.
    pub const fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Replaces the notes.
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Moves the task to `target`, accounting for in-progress time.
    ///
    /// Entering [`TaskState::InProgress`] stamps the start time. Leaving it
    /// adds the elapsed time to the worked duration and clears the stamp.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] when the transition is
    /// not allowed. The task is left unchanged.
    pub fn transition_to(
        &mut self,
        target: TaskState,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        if !self.state.can_transition_to(target) {
            return Err(TaskDomainError::InvalidTransition {
                task_id: self.id.clone(),
                from: self.state,
                to: target,
            });
        }

        if target == TaskState::InProgress {
            self.started = Some(local_now(clock));
        } else if self.state == TaskState::InProgress {
            self.worked = self.worked_until(local_now(clock));
            self.started = None;
        }

        self.state = target;
        Ok(())
    }

    /// Forgets the derived path, as for a freshly loaded record.
    pub(crate) fn clear_path(&mut self) {
        self.path = None;
    }

    /// Recomputes the record path from the creation time.
    ///
    /// # Errors
    ///
    /// Returns the resolver's [`PathResolutionError`]; the previous path is
    /// kept in that case.
    pub fn update_path(
        &mut self,
        resolver: &(impl ModuleDirResolver + ?Sized),
    ) -> Result<(), PathResolutionError> {
        self.path = Some(derive_task_path(self.created, resolver)?);
        Ok(())
    }
}

/// Reads the clock's wall time, keeping its UTC offset.
fn local_now(clock: &impl Clock) -> DateTime<FixedOffset> {
    clock.local().fixed_offset()
}
