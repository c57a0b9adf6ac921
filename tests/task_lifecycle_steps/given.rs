//! Given steps for task lifecycle BDD scenarios.

use super::world::TaskLifecycleWorld;
use eyre::WrapErr;
use overlord::task::domain::{NewTask, TaskState};
use rstest_bdd_macros::given;

#[given(r#"a new task "{description}" in state "{state}""#)]
fn new_task_in_state(
    world: &mut TaskLifecycleWorld,
    description: String,
    state: String,
) -> Result<(), eyre::Report> {
    let initial = TaskState::try_from(state.as_str())
        .map_err(|err| eyre::eyre!("invalid initial state in scenario: {err}"))?;
    let created = world
        .service
        .create(NewTask::new(description).with_initial_state(initial))
        .wrap_err("create task for lifecycle scenario")?;
    world.last_task = Some(created);
    Ok(())
}
