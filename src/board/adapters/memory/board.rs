//! In-memory repository for board tests and the in-process runtime.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{ProjectId, Stage, StageId, Task, TaskId},
    ports::{BoardRepository, BoardRepositoryError, BoardRepositoryResult},
};

/// Thread-safe in-memory board repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardRepository {
    state: Arc<RwLock<InMemoryBoardState>>,
}

#[derive(Debug, Default)]
struct InMemoryBoardState {
    stages: HashMap<StageId, Stage>,
    tasks: HashMap<TaskId, Task>,
}

impl InMemoryBoardRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> BoardRepositoryError {
    BoardRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl BoardRepository for InMemoryBoardRepository {
    async fn list_stages(&self, project_id: ProjectId) -> BoardRepositoryResult<Vec<Stage>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut stages: Vec<Stage> = state
            .stages
            .values()
            .filter(|stage| stage.project_id() == project_id)
            .cloned()
            .collect();
        stages.sort_by_key(Stage::position);
        Ok(stages)
    }

    async fn list_tasks(&self, project_id: ProjectId) -> BoardRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut tasks: Vec<Task> = state
            .tasks
            .values()
            .filter(|task| task.project_id() == project_id)
            .cloned()
            .collect();
        tasks.sort_by_key(|task| (task.position(), task.created_at(), task.id().into_inner()));
        Ok(tasks)
    }

    async fn insert_stage(&self, stage: &Stage) -> BoardRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.stages.contains_key(&stage.id()) {
            return Err(BoardRepositoryError::DuplicateStage(stage.id()));
        }
        state.stages.insert(stage.id(), stage.clone());
        Ok(())
    }

    async fn insert_task(&self, task: &Task) -> BoardRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.tasks.contains_key(&task.id()) {
            return Err(BoardRepositoryError::DuplicateTask(task.id()));
        }
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_task_by_id(&self, id: TaskId) -> BoardRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn update_task(&self, task: &Task) -> BoardRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if !state.tasks.contains_key(&task.id()) {
            return Err(BoardRepositoryError::TaskNotFound(task.id()));
        }
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn delete_task(&self, id: TaskId) -> BoardRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.tasks.remove(&id).is_none() {
            return Err(BoardRepositoryError::TaskNotFound(id));
        }
        Ok(())
    }

    async fn delete_project_board(&self, project_id: ProjectId) -> BoardRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state.stages.retain(|_, stage| stage.project_id() != project_id);
        state.tasks.retain(|_, task| task.project_id() != project_id);
        Ok(())
    }
}
