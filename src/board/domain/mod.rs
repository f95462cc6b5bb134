//! Domain model for project kanban boards.
//!
//! The board domain models stage columns, the tasks they own, the ordering
//! invariants between them, the drag-gesture protocol that moves tasks, and
//! the pure aggregate derivations computed over a board snapshot. All
//! infrastructure concerns are kept outside the domain boundary.

mod error;
mod gesture;
mod ids;
mod metrics;
mod name;
mod priority;
mod stage;
mod state;
mod task;

pub use error::{BoardDomainError, ParseTaskPriorityError};
pub use gesture::{
    DragGesture, DropOutcome, DropTarget, MoveCommand, PointerPosition, resolve_drop,
    resolve_target_stage,
};
pub use ids::{ProjectId, StageId, TaskId};
pub use metrics::{blocked_count, overdue_count, project_progress};
pub use name::{StageName, TaskTitle};
pub use priority::TaskPriority;
pub use stage::{PersistedStageData, Stage};
pub use state::BoardState;
pub use task::{PersistedTaskData, Task};
