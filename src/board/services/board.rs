//! Service layer for board reads and the board mutation protocol.
//!
//! [`BoardService`] is the commit side of the drag protocol and the CRUD
//! surface for tasks. Every write is a single-record persistence call; the
//! caller resynchronises by fetching a fresh [`BoardState`] afterwards.

use crate::board::{
    domain::{
        BoardDomainError, BoardState, DropTarget, ProjectId, StageId, Task, TaskId,
        TaskPriority, TaskTitle, resolve_drop,
    },
    ports::{BoardRepository, BoardRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a board task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    project_id: ProjectId,
    stage_id: StageId,
    title: String,
    description: Option<String>,
    priority: Option<TaskPriority>,
    due_date: Option<NaiveDate>,
    visible_to_client: bool,
}

impl CreateTaskRequest {
    /// Creates a request with required task fields.
    ///
    /// Optional attributes default to no description, medium priority, no
    /// due date, and client-portal visibility.
    #[must_use]
    pub fn new(
        project_id: ProjectId,
        stage_id: StageId,
        title: impl Into<String>,
    ) -> Self {
        Self {
            project_id,
            stage_id,
            title: title.into(),
            description: None,
            priority: None,
            due_date: None,
            visible_to_client: true,
        }
    }

    /// Sets the long-form description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority level.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets whether the client portal may display the task.
    #[must_use]
    pub const fn with_client_visibility(mut self, visible: bool) -> Self {
        self.visible_to_client = visible;
        self
    }
}

/// Partial patch applied to an existing task.
///
/// Unset fields leave the task untouched; every applied edit refreshes the
/// task's `updated_at`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskEdit {
    title: Option<String>,
    description: Option<Option<String>>,
    priority: Option<TaskPriority>,
    due_date: Option<Option<NaiveDate>>,
    blocked: Option<BlockChange>,
    visible_to_client: Option<bool>,
}

/// Change to a task's blocked state carried by a [`TaskEdit`].
#[derive(Debug, Clone, PartialEq, Eq)]
enum BlockChange {
    Block(String),
    Unblock,
}

impl TaskEdit {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the long-form description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    /// Clears the long-form description.
    #[must_use]
    pub fn clearing_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    /// Replaces the priority level.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replaces the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(Some(due_date));
        self
    }

    /// Clears the due date.
    #[must_use]
    pub const fn clearing_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }

    /// Marks the task blocked with a reason.
    #[must_use]
    pub fn blocking(mut self, reason: impl Into<String>) -> Self {
        self.blocked = Some(BlockChange::Block(reason.into()));
        self
    }

    /// Clears the blocked flag.
    #[must_use]
    pub fn unblocking(mut self) -> Self {
        self.blocked = Some(BlockChange::Unblock);
        self
    }

    /// Sets whether the client portal may display the task.
    #[must_use]
    pub const fn with_client_visibility(mut self, visible: bool) -> Self {
        self.visible_to_client = Some(visible);
        self
    }
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] BoardRepositoryError),
    /// The task is not on the project's board.
    #[error("task not on board: {0}")]
    UnknownTask(TaskId),
    /// The stage the task was created under is not on the project's board.
    #[error("stage not on board: {0}")]
    UnknownStage(StageId),
    /// A drop could not be resolved against the current board.
    #[error("failed to move task {0}: drop target is not on the board")]
    UnknownDropTarget(TaskId),
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Board read/write orchestration service.
#[derive(Clone)]
pub struct BoardService<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> BoardService<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new board service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Fetches a project's full board snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn load_board(&self, project_id: ProjectId) -> BoardServiceResult<BoardState> {
        let stages = self.repository.list_stages(project_id).await?;
        let tasks = self.repository.list_tasks(project_id).await?;
        Ok(BoardState::from_parts(stages, tasks))
    }

    /// Creates a task at the end of a stage.
    ///
    /// The new task's position is the count of tasks already in the target
    /// stage, keeping per-stage positions contiguous from zero.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when the title fails
    /// validation, [`BoardServiceError::UnknownStage`] when the stage is not
    /// on the project's board, or [`BoardServiceError::Repository`] when
    /// persistence rejects the write.
    pub async fn create_task(&self, request: CreateTaskRequest) -> BoardServiceResult<Task> {
        let CreateTaskRequest {
            project_id,
            stage_id,
            title,
            description,
            priority,
            due_date,
            visible_to_client,
        } = request;

        let task_title = TaskTitle::new(title)?;
        let board = self.load_board(project_id).await?;
        if board.stage(stage_id).is_none() {
            return Err(BoardServiceError::UnknownStage(stage_id));
        }
        let position = u32::try_from(board.task_count_in(stage_id))
            .map_err(BoardRepositoryError::persistence)?;

        let mut task = Task::new(project_id, stage_id, task_title, position, &*self.clock);
        if let Some(text) = description {
            task.set_description(Some(text), &*self.clock);
        }
        if let Some(level) = priority {
            task.set_priority(level, &*self.clock);
        }
        if let Some(date) = due_date {
            task.set_due_date(Some(date), &*self.clock);
        }
        if !visible_to_client {
            task.set_client_visibility(false, &*self.clock);
        }

        self.repository.insert_task(&task).await?;
        Ok(task)
    }

    /// Applies a partial edit to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::UnknownTask`] when the task does not
    /// exist, [`BoardServiceError::Domain`] when a patched value fails
    /// validation, or [`BoardServiceError::Repository`] when persistence
    /// rejects the write.
    pub async fn edit_task(&self, task_id: TaskId, edit: TaskEdit) -> BoardServiceResult<Task> {
        let mut task = self.find_task_or_error(task_id).await?;

        let TaskEdit {
            title,
            description,
            priority,
            due_date,
            blocked,
            visible_to_client,
        } = edit;

        if let Some(new_title) = title {
            task.rename(TaskTitle::new(new_title)?, &*self.clock);
        }
        if let Some(text) = description {
            task.set_description(text, &*self.clock);
        }
        if let Some(level) = priority {
            task.set_priority(level, &*self.clock);
        }
        if let Some(date) = due_date {
            task.set_due_date(date, &*self.clock);
        }
        match blocked {
            Some(BlockChange::Block(reason)) => task.block(reason, &*self.clock)?,
            Some(BlockChange::Unblock) => task.unblock(&*self.clock),
            None => {}
        }
        if let Some(visible) = visible_to_client {
            task.set_client_visibility(visible, &*self.clock);
        }

        self.repository.update_task(&task).await?;
        Ok(task)
    }

    /// Commits a drop: resolves the target against the current board and
    /// persists the move as a single update on the dragged task.
    ///
    /// Sibling rows are never patched; callers resynchronise with
    /// [`BoardService::load_board`], whose position sort absorbs any gap
    /// left in the source stage. Dropping a task onto its current slot
    /// persists the same stage and position (only `updated_at` changes).
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::UnknownTask`] when the task is not on
    /// the project's board, [`BoardServiceError::UnknownDropTarget`] when
    /// the drop target cannot be resolved, or
    /// [`BoardServiceError::Repository`] when persistence rejects the write.
    pub async fn move_task(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
        over: DropTarget,
    ) -> BoardServiceResult<Task> {
        let board = self.load_board(project_id).await?;
        let mut task = board
            .task(task_id)
            .cloned()
            .ok_or(BoardServiceError::UnknownTask(task_id))?;

        let command = resolve_drop(&board, task_id, over)
            .ok_or(BoardServiceError::UnknownDropTarget(task_id))?;

        task.move_to(command.stage_id, command.position, &*self.clock);
        self.repository.update_task(&task).await?;
        Ok(task)
    }

    /// Deletes a task.
    ///
    /// Former siblings keep their positions; the gap is absorbed by the next
    /// board fetch's position sort.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when the task does not
    /// exist or persistence fails.
    pub async fn delete_task(&self, task_id: TaskId) -> BoardServiceResult<()> {
        self.repository.delete_task(task_id).await?;
        Ok(())
    }

    async fn find_task_or_error(&self, task_id: TaskId) -> BoardServiceResult<Task> {
        self.repository
            .find_task_by_id(task_id)
            .await?
            .ok_or(BoardServiceError::UnknownTask(task_id))
    }
}
