//! Then steps for board movement BDD scenarios.

use super::world::BoardWorld;
use atelier::board::domain::Task;
use rstest_bdd_macros::then;

#[then(r#"the "{stage_name}" stage contains exactly the dragged task at position 0"#)]
fn stage_holds_only_dragged_task(
    world: &BoardWorld,
    stage_name: String,
) -> Result<(), eyre::Report> {
    let dragged = world
        .dragged_task_id
        .ok_or_else(|| eyre::eyre!("missing dragged task in scenario world"))?;
    let stage_id = world.stage_id_by_name(&stage_name)?;
    let board = world.load_board()?;

    let tasks = board.tasks_in(stage_id);
    let ids: Vec<_> = tasks.iter().map(Task::id).collect();
    if ids != vec![dragged] {
        return Err(eyre::eyre!(
            "expected stage {stage_name:?} to hold only the dragged task, found {ids:?}"
        ));
    }
    let position = tasks.first().map(Task::position);
    if position != Some(0) {
        return Err(eyre::eyre!(
            "expected the dragged task at position 0, found {position:?}"
        ));
    }
    Ok(())
}

#[then(r#"the "{stage_name}" stage contains {count:usize} tasks"#)]
fn stage_task_count(
    world: &BoardWorld,
    stage_name: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let stage_id = world.stage_id_by_name(&stage_name)?;
    let board = world.load_board()?;

    let found = board.task_count_in(stage_id);
    if found != count {
        return Err(eyre::eyre!(
            "expected {count} tasks in stage {stage_name:?}, found {found}"
        ));
    }
    Ok(())
}
