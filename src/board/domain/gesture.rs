//! Drag-and-drop gesture model for the board mutation protocol.
//!
//! A [`DragGesture`] tracks one pressed task through the `Pressed ->
//! Dragging -> {cancelled | committed}` state machine. The pointer must
//! travel an activation distance before a press becomes a drag, so plain
//! clicks never move tasks. While dragging, [`DragGesture::pointer_moved`]
//! reports the tentative target stage so callers can apply an optimistic
//! [`BoardState::preview_move`]; nothing is persisted until the drop is
//! committed and the resulting [`MoveCommand`] is handed to the service
//! layer.

use super::{BoardState, StageId, Task, TaskId};

/// Squared pointer travel (in pixels) required before a press activates a
/// drag. Eight pixels of travel in any direction activates.
const ACTIVATION_DISTANCE_SQUARED: i64 = 64;

/// A pointer location in board-surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerPosition {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

/// The element currently under the pointer during a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// The pointer is over a stage column's empty drop zone.
    Stage(StageId),
    /// The pointer is over a task card.
    Task(TaskId),
}

/// The single persisted write produced by a committed drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCommand {
    /// The dragged task.
    pub task_id: TaskId,
    /// The stage the task lands in.
    pub stage_id: StageId,
    /// The zero-based position the task lands at within that stage.
    pub position: u32,
}

/// Outcome of releasing the pointer at the end of a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The gesture produced no move: the press never activated, or the drop
    /// target could not be resolved. The board reverts to persisted state on
    /// the next fetch.
    Cancelled,
    /// The gesture resolved to a move to persist.
    Committed(MoveCommand),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GesturePhase {
    Pressed,
    Dragging,
}

/// Pointer-driven drag state machine for a single pressed task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragGesture {
    task_id: TaskId,
    pressed_at: PointerPosition,
    phase: GesturePhase,
}

impl DragGesture {
    /// Starts a gesture for a task pressed at the given pointer location.
    #[must_use]
    pub const fn begin(task_id: TaskId, pressed_at: PointerPosition) -> Self {
        Self {
            task_id,
            pressed_at,
            phase: GesturePhase::Pressed,
        }
    }

    /// Returns the pressed task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns whether the press has activated into a drag.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging)
    }

    /// Feeds pointer motion into the gesture.
    ///
    /// Returns the tentative target stage when the gesture is an active drag
    /// and the stage under the pointer differs from the task's current
    /// stage. Callers apply [`BoardState::preview_move`] with that stage for
    /// live feedback; persisted storage is untouched.
    pub fn pointer_moved(
        &mut self,
        board: &BoardState,
        at: PointerPosition,
        over: Option<DropTarget>,
    ) -> Option<StageId> {
        if self.phase == GesturePhase::Pressed {
            if distance_squared(self.pressed_at, at) < ACTIVATION_DISTANCE_SQUARED {
                return None;
            }
            self.phase = GesturePhase::Dragging;
        }

        let tentative = resolve_target_stage(board, self.task_id, over?)?;
        let current = board.task(self.task_id)?.stage_id();
        (tentative != current).then_some(tentative)
    }

    /// Releases the pointer, ending the gesture.
    ///
    /// A press that never activated is a click, not a drop. An unresolvable
    /// target (`over` is `None`, or the target ids are no longer on the
    /// board) cancels the gesture with no persisted side effect.
    #[must_use]
    pub fn release(self, board: &BoardState, over: Option<DropTarget>) -> DropOutcome {
        if !self.is_dragging() {
            return DropOutcome::Cancelled;
        }
        over.and_then(|target| resolve_drop(board, self.task_id, target))
            .map_or(DropOutcome::Cancelled, DropOutcome::Committed)
    }
}

/// Resolves a drop target into the move to persist.
///
/// The target stage is the stage under the pointer, or the owning stage of
/// the task card under the pointer. The landing position follows the board
/// protocol: a stage's empty area appends after the stage's other tasks; a
/// task card takes that card's index within the target stage's list
/// excluding the dragged task, ties resolved by list order.
///
/// Returns `None` when the dragged task or the target is not on the board.
#[must_use]
pub fn resolve_drop(
    board: &BoardState,
    task_id: TaskId,
    over: DropTarget,
) -> Option<MoveCommand> {
    board.task(task_id)?;
    let stage_id = resolve_target_stage(board, task_id, over)?;
    let position = drop_position(board, task_id, stage_id, over)?;
    Some(MoveCommand {
        task_id,
        stage_id,
        position,
    })
}

/// Resolves the stage a drop target belongs to.
#[must_use]
pub fn resolve_target_stage(
    board: &BoardState,
    task_id: TaskId,
    over: DropTarget,
) -> Option<StageId> {
    match over {
        DropTarget::Stage(stage_id) => board.stage(stage_id).map(super::Stage::id),
        DropTarget::Task(over_id) if over_id == task_id => {
            board.task(task_id).map(Task::stage_id)
        }
        DropTarget::Task(over_id) => board.task(over_id).map(Task::stage_id),
    }
}

fn drop_position(
    board: &BoardState,
    task_id: TaskId,
    stage_id: StageId,
    over: DropTarget,
) -> Option<u32> {
    let siblings: Vec<&Task> = board
        .tasks_in(stage_id)
        .iter()
        .filter(|task| task.id() != task_id)
        .collect();

    let index = match over {
        DropTarget::Stage(_) => siblings.len(),
        DropTarget::Task(over_id) if over_id == task_id => {
            // Dropped back onto itself: keep the slot it already occupies.
            let current = board.task(task_id)?.position();
            siblings
                .iter()
                .filter(|task| task.position() < current)
                .count()
        }
        DropTarget::Task(over_id) => siblings
            .iter()
            .position(|task| task.id() == over_id)?,
    };

    u32::try_from(index).ok()
}

fn distance_squared(from: PointerPosition, to: PointerPosition) -> i64 {
    let dx = i64::from(to.x) - i64::from(from.x);
    let dy = i64::from(to.y) - i64::from(from.y);
    dx * dx + dy * dy
}
