//! Repository port for board stage and task persistence.

use crate::board::domain::{ProjectId, Stage, StageId, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board repository operations.
pub type BoardRepositoryResult<T> = Result<T, BoardRepositoryError>;

/// Board persistence contract: stages and tasks scoped to a project.
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// Returns a project's stages, ascending by column position.
    async fn list_stages(&self, project_id: ProjectId) -> BoardRepositoryResult<Vec<Stage>>;

    /// Returns a project's tasks, ascending by position.
    ///
    /// Ordering is per the stored position values; grouping into stages is
    /// left to the caller.
    async fn list_tasks(&self, project_id: ProjectId) -> BoardRepositoryResult<Vec<Task>>;

    /// Stores a new stage.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::DuplicateStage`] when the stage ID
    /// already exists.
    async fn insert_stage(&self, stage: &Stage) -> BoardRepositoryResult<()>;

    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn insert_task(&self, task: &Task) -> BoardRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_task_by_id(&self, id: TaskId) -> BoardRepositoryResult<Option<Task>>;

    /// Persists changes to an existing task (title, stage, position,
    /// metadata, timestamps). The write covers the single record only; no
    /// sibling rows are touched.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::TaskNotFound`] when the task does not
    /// exist.
    async fn update_task(&self, task: &Task) -> BoardRepositoryResult<()>;

    /// Deletes a task by identifier.
    ///
    /// Remaining siblings keep their positions; any resulting gap is
    /// tolerated because board assembly orders by relative position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::TaskNotFound`] when the task does not
    /// exist.
    async fn delete_task(&self, id: TaskId) -> BoardRepositoryResult<()>;

    /// Deletes every stage and task belonging to a project.
    ///
    /// Used by the admin hard-delete path; deleting an unknown project is a
    /// no-op.
    async fn delete_project_board(&self, project_id: ProjectId) -> BoardRepositoryResult<()>;
}

/// Errors returned by board repository implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardRepositoryError {
    /// A stage with the same identifier already exists.
    #[error("duplicate stage identifier: {0}")]
    DuplicateStage(StageId),

    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardRepositoryError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
