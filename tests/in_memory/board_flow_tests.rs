//! In-memory integration tests for board assembly and the mutation protocol.

use super::helpers::{Platform, platform};
use atelier::board::domain::{
    DragGesture, DropOutcome, DropTarget, PointerPosition, Stage, StageId, Task, blocked_count,
    overdue_count, project_progress,
};
use atelier::board::services::TaskEdit;
use chrono::NaiveDate;
use rstest::rstest;

fn stage_id_by_name(stages: &[Stage], name: &str) -> StageId {
    stages
        .iter()
        .find(|stage| stage.name().as_str() == name)
        .map(Stage::id)
        .expect("stage present")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn drag_gesture_moves_a_task_between_columns(platform: Platform) {
    let project = platform
        .blank_project("Launch teaser")
        .await
        .expect("project creation should succeed");
    let board = platform
        .board_service
        .load_board(project.id())
        .await
        .expect("board load should succeed");
    let todo = stage_id_by_name(board.stages(), "To Do");
    let done = stage_id_by_name(board.stages(), "Done");

    let mut created = Vec::new();
    for title in ["Write script", "Record voiceover", "Edit cut"] {
        created.push(
            platform
                .create_task(project.id(), todo, title)
                .await
                .expect("task creation should succeed"),
        );
    }
    let dragged = created.get(1).map(Task::id).expect("second task present");

    // Re-fetch so the gesture resolves against the persisted snapshot.
    let board = platform
        .board_service
        .load_board(project.id())
        .await
        .expect("board load should succeed");
    let mut gesture = DragGesture::begin(dragged, PointerPosition { x: 40, y: 40 });
    let tentative = gesture.pointer_moved(
        &board,
        PointerPosition { x: 400, y: 40 },
        Some(DropTarget::Stage(done)),
    );
    assert_eq!(tentative, Some(done));

    let DropOutcome::Committed(command) = gesture.release(&board, Some(DropTarget::Stage(done)))
    else {
        panic!("drop should commit");
    };
    platform
        .board_service
        .move_task(project.id(), command.task_id, DropTarget::Stage(done))
        .await
        .expect("move should succeed");

    let after = platform
        .board_service
        .load_board(project.id())
        .await
        .expect("board load should succeed");
    let done_ids: Vec<_> = after.tasks_in(done).iter().map(Task::id).collect();
    assert_eq!(done_ids, vec![dragged]);
    assert_eq!(after.task_count_in(todo), 2);
    let moved = after.task(dragged).expect("moved task present");
    assert_eq!(moved.position(), 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_metrics_reflect_edits_and_moves(platform: Platform) {
    let project = platform
        .blank_project("Metrics sample")
        .await
        .expect("project creation should succeed");
    let board = platform
        .board_service
        .load_board(project.id())
        .await
        .expect("board load should succeed");
    let todo = stage_id_by_name(board.stages(), "To Do");
    let done = stage_id_by_name(board.stages(), "Done");

    let first = platform
        .create_task(project.id(), todo, "Concept")
        .await
        .expect("task creation should succeed");
    let second = platform
        .create_task(project.id(), todo, "Production")
        .await
        .expect("task creation should succeed");

    let today = NaiveDate::from_ymd_opt(2026, 8, 30).expect("valid date");
    platform
        .board_service
        .edit_task(
            first.id(),
            TaskEdit::new()
                .with_due_date(NaiveDate::from_ymd_opt(2026, 8, 1).expect("valid date"))
                .blocking("waiting on brand assets"),
        )
        .await
        .expect("edit should succeed");
    platform
        .board_service
        .move_task(project.id(), second.id(), DropTarget::Stage(done))
        .await
        .expect("move should succeed");

    let after = platform
        .board_service
        .load_board(project.id())
        .await
        .expect("board load should succeed");
    let tasks = after.all_tasks();

    assert_eq!(project_progress(&after), 50);
    assert_eq!(overdue_count(tasks.iter().copied(), today), 1);
    assert_eq!(blocked_count(tasks.iter().copied()), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_task_compacts_nothing_but_keeps_order(platform: Platform) {
    let project = platform
        .blank_project("Cleanup")
        .await
        .expect("project creation should succeed");
    let board = platform
        .board_service
        .load_board(project.id())
        .await
        .expect("board load should succeed");
    let todo = stage_id_by_name(board.stages(), "To Do");

    let mut ids = Vec::new();
    for title in ["A", "B", "C"] {
        ids.push(
            platform
                .create_task(project.id(), todo, title)
                .await
                .expect("task creation should succeed")
                .id(),
        );
    }
    let removed = ids.get(1).copied().expect("second task present");

    platform
        .board_service
        .delete_task(removed)
        .await
        .expect("delete should succeed");

    let after = platform
        .board_service
        .load_board(project.id())
        .await
        .expect("board load should succeed");
    let remaining: Vec<_> = after
        .tasks_in(todo)
        .iter()
        .map(|task| (task.id(), task.position()))
        .collect();
    // Positions keep their gap; relative order is intact.
    assert_eq!(
        remaining,
        vec![
            (ids.first().copied().expect("first id"), 0),
            (ids.get(2).copied().expect("third id"), 2),
        ]
    );
}
