//! When steps for board movement BDD scenarios.

use super::world::{BoardWorld, run_async};
use atelier::board::domain::{DragGesture, DropOutcome, DropTarget, PointerPosition, TaskId};
use eyre::WrapErr;
use rstest_bdd_macros::when;

const PRESS_AT: PointerPosition = PointerPosition { x: 24, y: 96 };
const FAR_AWAY: PointerPosition = PointerPosition { x: 480, y: 96 };

fn task_at_position(world: &BoardWorld, position: u32) -> Result<TaskId, eyre::Report> {
    let project_id = world.project_id()?;
    let board = world.load_board()?;
    board
        .all_tasks()
        .iter()
        .find(|task| task.project_id() == project_id && task.position() == position)
        .map(|task| task.id())
        .ok_or_else(|| eyre::eyre!("no task at position {position}"))
}

#[when(r#"the task at position {position:u32} is dragged to the "{stage_name}" stage"#)]
fn drag_task_to_stage(
    world: &mut BoardWorld,
    position: u32,
    stage_name: String,
) -> Result<(), eyre::Report> {
    let task_id = task_at_position(world, position)?;
    let target = world.stage_id_by_name(&stage_name)?;
    let board = world.load_board()?;

    let mut gesture = DragGesture::begin(task_id, PRESS_AT);
    gesture.pointer_moved(&board, FAR_AWAY, Some(DropTarget::Stage(target)));
    let DropOutcome::Committed(command) = gesture.release(&board, Some(DropTarget::Stage(target)))
    else {
        return Err(eyre::eyre!("expected the drop to commit"));
    };

    let project_id = world.project_id()?;
    run_async(world.board_service.move_task(
        project_id,
        command.task_id,
        DropTarget::Stage(command.stage_id),
    ))
    .wrap_err("persist committed move")?;

    world.dragged_task_id = Some(task_id);
    Ok(())
}

#[when(
    r#"the task at position {position:u32} is pressed and released over the "{stage_name}" stage without dragging"#
)]
fn click_task(
    world: &mut BoardWorld,
    position: u32,
    stage_name: String,
) -> Result<(), eyre::Report> {
    let task_id = task_at_position(world, position)?;
    let target = world.stage_id_by_name(&stage_name)?;
    let board = world.load_board()?;

    let gesture = DragGesture::begin(task_id, PRESS_AT);
    let outcome = gesture.release(&board, Some(DropTarget::Stage(target)));
    if outcome != DropOutcome::Cancelled {
        return Err(eyre::eyre!("expected the click to cancel, got {outcome:?}"));
    }
    Ok(())
}

#[when("the task at position {position:u32} is dragged and released outside the board")]
fn drag_task_nowhere(world: &mut BoardWorld, position: u32) -> Result<(), eyre::Report> {
    let task_id = task_at_position(world, position)?;
    let board = world.load_board()?;

    let mut gesture = DragGesture::begin(task_id, PRESS_AT);
    gesture.pointer_moved(&board, FAR_AWAY, None);
    let outcome = gesture.release(&board, None);
    if outcome != DropOutcome::Cancelled {
        return Err(eyre::eyre!("expected the drag to cancel, got {outcome:?}"));
    }
    Ok(())
}
