//! Shared world state for task lifecycle BDD scenarios.

use std::sync::Arc;

use crate::test_helpers::{StaticModuleDirs, SteppingClock, utc_instant};
use overlord::task::{
    adapters::memory::InMemoryTaskStore,
    domain::Task,
    services::{TaskLifecycleError, TaskLifecycleService},
};
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<InMemoryTaskStore, StaticModuleDirs, SteppingClock>;

/// Scenario world for task lifecycle behaviour tests.
pub struct TaskLifecycleWorld {
    pub service: TestTaskService,
    pub clock: Arc<SteppingClock>,
    pub last_task: Option<Task>,
    pub last_transition_result: Option<Result<Task, TaskLifecycleError>>,
}

impl TaskLifecycleWorld {
    /// Creates a world whose clock starts at a fixed instant.
    ///
    /// # Errors
    ///
    /// Returns an error when the start instant is invalid.
    pub fn new() -> eyre::Result<Self> {
        let clock = Arc::new(SteppingClock::new(utc_instant((2024, 3, 5), (7, 8, 9))?));
        let service = TaskLifecycleService::new(
            Arc::new(InMemoryTaskStore::new()),
            Arc::new(StaticModuleDirs::new("/base")),
            Arc::clone(&clock),
        );

        Ok(Self {
            service,
            clock,
            last_task: None,
            last_transition_result: None,
        })
    }

    /// Returns the task under test.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been created yet.
    pub fn task(&self) -> eyre::Result<&Task> {
        self.last_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskLifecycleWorld {
    match TaskLifecycleWorld::new() {
        Ok(world) => world,
        Err(err) => panic!("scenario world setup failed: {err}"),
    }
}
