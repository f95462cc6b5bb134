//! Aggregate derivations over board snapshots.
//!
//! Pure functions with no I/O: callers pass the board state (or a task
//! collection) plus any reference date, so every derivation is
//! deterministic under test.

use super::{BoardState, Task};
use chrono::NaiveDate;

/// Computes project completion as an integer percentage in `0..=100`.
///
/// Progress is the rounded fraction of tasks sitting in the final
/// (highest-position) stage. An empty board reports zero.
#[must_use]
pub fn project_progress(board: &BoardState) -> u8 {
    let total = board.all_tasks().len();
    if total == 0 {
        return 0;
    }
    let done = board
        .final_stage()
        .map_or(0, |stage| board.task_count_in(stage.id()));
    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "half-up rounding to a whole percentage"
    )]
    let percent = (done * 100 + total / 2) / total;
    u8::try_from(percent).unwrap_or(100)
}

/// Counts tasks with a due date strictly before `today`.
///
/// The comparison is date-only; a task due today is not overdue.
#[must_use]
pub fn overdue_count<'a>(tasks: impl IntoIterator<Item = &'a Task>, today: NaiveDate) -> usize {
    tasks
        .into_iter()
        .filter(|task| task.due_date().is_some_and(|due| due < today))
        .count()
}

/// Counts tasks carrying the blocked flag.
#[must_use]
pub fn blocked_count<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> usize {
    tasks.into_iter().filter(|task| task.is_blocked()).count()
}
