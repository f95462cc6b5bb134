//! Then steps for project setup BDD scenarios.

use super::world::{SetupWorld, run_async};
use atelier::board::domain::{Stage, Task};
use atelier::project::services::ProjectSetupError;
use rstest_bdd_macros::then;

#[then(r#"the board has the stages "{first}", "{second}", "{third}" in order"#)]
fn board_has_three_stages(
    world: &SetupWorld,
    first: String,
    second: String,
    third: String,
) -> Result<(), eyre::Report> {
    assert_stage_names(world, &[&first, &second, &third])
}

#[then("the board has the stages {first:string}, {second:string} in order")]
fn board_has_two_stages(
    world: &SetupWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    assert_stage_names(world, &[&first, &second])
}

fn assert_stage_names(world: &SetupWorld, expected: &[&str]) -> Result<(), eyre::Report> {
    let board = world.load_board()?;
    let found: Vec<&str> = board
        .stages()
        .iter()
        .map(|stage| stage.name().as_str())
        .collect();
    if found != expected {
        return Err(eyre::eyre!("expected stages {expected:?}, found {found:?}"));
    }
    let positions: Vec<u32> = board.stages().iter().map(Stage::position).collect();
    let contiguous: Vec<u32> = (0..).take(positions.len()).collect();
    if positions != contiguous {
        return Err(eyre::eyre!(
            "expected contiguous stage positions, found {positions:?}"
        ));
    }
    Ok(())
}

#[then("the board has no tasks")]
fn board_has_no_tasks(world: &SetupWorld) -> Result<(), eyre::Report> {
    let board = world.load_board()?;
    let count = board.all_tasks().len();
    if count != 0 {
        return Err(eyre::eyre!("expected an empty board, found {count} tasks"));
    }
    Ok(())
}

#[then(r#"the stage "{stage_name}" holds the tasks "{first}", "{second}" in order"#)]
fn stage_holds_tasks(
    world: &SetupWorld,
    stage_name: String,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    let board = world.load_board()?;
    let stage_id = board
        .stages()
        .iter()
        .find(|stage| stage.name().as_str() == stage_name)
        .map(Stage::id)
        .ok_or_else(|| eyre::eyre!("stage {stage_name:?} not on board"))?;

    let titles: Vec<&str> = board
        .tasks_in(stage_id)
        .iter()
        .map(|task| task.title().as_str())
        .collect();
    if titles != vec![first.as_str(), second.as_str()] {
        return Err(eyre::eyre!(
            "expected tasks [{first:?}, {second:?}] in stage {stage_name:?}, found {titles:?}"
        ));
    }
    let positions: Vec<u32> = board.tasks_in(stage_id).iter().map(Task::position).collect();
    if positions != vec![0, 1] {
        return Err(eyre::eyre!(
            "expected cloned task positions [0, 1], found {positions:?}"
        ));
    }
    Ok(())
}

#[then("project creation fails because the template is missing")]
fn creation_failed_with_missing_template(world: &SetupWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing creation result in scenario world"))?;
    if !matches!(result, Err(ProjectSetupError::TemplateNotFound(_))) {
        return Err(eyre::eyre!(
            "expected a missing-template error, got {result:?}"
        ));
    }
    Ok(())
}

#[then("the client has no projects")]
fn client_has_no_projects(world: &SetupWorld) -> Result<(), eyre::Report> {
    let projects = run_async(world.service.list_by_client(world.client_id))
        .map_err(|err| eyre::eyre!("project listing failed: {err}"))?;
    if !projects.is_empty() {
        return Err(eyre::eyre!(
            "expected no projects for the client, found {}",
            projects.len()
        ));
    }
    Ok(())
}
