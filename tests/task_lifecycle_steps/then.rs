//! Then steps for task lifecycle BDD scenarios.

use super::world::TaskLifecycleWorld;
use chrono::TimeDelta;
use overlord::task::{
    domain::{TaskDomainError, TaskState},
    services::TaskLifecycleError,
};
use rstest_bdd_macros::then;

#[then(r#"the task state is "{state}""#)]
fn task_state_is(world: &TaskLifecycleWorld, state: String) -> Result<(), eyre::Report> {
    let expected_state = TaskState::try_from(state.as_str())
        .map_err(|err| eyre::eyre!("invalid expected state in scenario: {err}"))?;

    let task = world.task()?;
    if task.state() != expected_state {
        return Err(eyre::eyre!(
            "expected state {}, found {}",
            expected_state.as_str(),
            task.state().as_str()
        ));
    }

    Ok(())
}

#[then("the task has a start stamp")]
fn task_has_start_stamp(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.task()?.started().is_some(),
        "expected an in-progress start stamp"
    );
    Ok(())
}

#[then("the task has no start stamp")]
fn task_has_no_start_stamp(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.task()?.started().is_none(),
        "expected the start stamp to be cleared"
    );
    Ok(())
}

#[then("the task has worked {minutes:i64} minutes")]
fn task_has_worked(world: &TaskLifecycleWorld, minutes: i64) -> Result<(), eyre::Report> {
    let worked = world.task()?.worked();
    eyre::ensure!(
        worked == TimeDelta::minutes(minutes),
        "expected {minutes} minutes worked, found {worked}"
    );
    Ok(())
}

#[then("the transition fails with an invalid transition error")]
fn transition_fails_with_invalid_transition(
    world: &TaskLifecycleWorld,
) -> Result<(), eyre::Report> {
    let result = world
        .last_transition_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing transition result"))?;

    if !matches!(
        result,
        Err(TaskLifecycleError::Domain(
            TaskDomainError::InvalidTransition { .. }
        ))
    ) {
        return Err(eyre::eyre!(
            "expected InvalidTransition error, got {result:?}"
        ));
    }

    Ok(())
}

#[then("the transition fails with an invalid state error")]
fn transition_fails_with_invalid_state_error(
    world: &TaskLifecycleWorld,
) -> Result<(), eyre::Report> {
    let result = world
        .last_transition_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing transition result"))?;

    if !matches!(result, Err(TaskLifecycleError::InvalidState(_))) {
        return Err(eyre::eyre!("expected InvalidState error, got {result:?}"));
    }

    Ok(())
}
