//! Board state container and pure reducers.
//!
//! [`BoardState`] is an explicit snapshot of one project's board: the ordered
//! stage columns plus each stage's ordered task list. All mutations go
//! through pure reducers that return a new state, so board logic is callable
//! from any UI layer or from tests without a rendering harness.
//!
//! Reducers never touch `updated_at`; lifecycle timestamps are owned by the
//! persistence path and arrive with the next fetched snapshot.

use super::{ProjectId, Stage, StageId, Task, TaskId};
use std::collections::HashMap;

/// Immutable snapshot of a project's kanban board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardState {
    stages: Vec<Stage>,
    tasks_by_stage: HashMap<StageId, Vec<Task>>,
}

impl BoardState {
    /// Assembles a board snapshot from fetched stage and task rows.
    ///
    /// Stages are ordered by column position. Tasks are grouped under their
    /// owning stage and ordered by position; the sort is stable, so tasks
    /// sharing a position (possible between a cross-stage move and the
    /// sibling renumbering that a later fetch reflects) keep their fetched
    /// relative order.
    #[must_use]
    pub fn from_parts(mut stages: Vec<Stage>, tasks: Vec<Task>) -> Self {
        stages.sort_by_key(Stage::position);
        let mut tasks_by_stage: HashMap<StageId, Vec<Task>> = HashMap::new();
        for task in tasks {
            tasks_by_stage.entry(task.stage_id()).or_default().push(task);
        }
        for stage_tasks in tasks_by_stage.values_mut() {
            stage_tasks.sort_by_key(Task::position);
        }
        Self {
            stages,
            tasks_by_stage,
        }
    }

    /// Returns the stages in column order.
    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Returns the stage with the given identifier, if present.
    #[must_use]
    pub fn stage(&self, stage_id: StageId) -> Option<&Stage> {
        self.stages.iter().find(|stage| stage.id() == stage_id)
    }

    /// Returns the final (highest-position) stage, if the board has any.
    #[must_use]
    pub fn final_stage(&self) -> Option<&Stage> {
        self.stages.last()
    }

    /// Returns the tasks of one stage in position order.
    #[must_use]
    pub fn tasks_in(&self, stage_id: StageId) -> &[Task] {
        self.tasks_by_stage
            .get(&stage_id)
            .map_or(&[], Vec::as_slice)
    }

    /// Returns the number of tasks in one stage.
    #[must_use]
    pub fn task_count_in(&self, stage_id: StageId) -> usize {
        self.tasks_in(stage_id).len()
    }

    /// Returns every task on the board in a deterministic order: stage
    /// columns left to right, tasks within a column by position, then any
    /// groups whose stage is not (or no longer) on the board.
    #[must_use]
    pub fn all_tasks(&self) -> Vec<&Task> {
        let mut ordered: Vec<&Task> = Vec::new();
        for stage in &self.stages {
            ordered.extend(self.tasks_in(stage.id()));
        }
        let mut orphan_stage_ids: Vec<StageId> = self
            .tasks_by_stage
            .keys()
            .filter(|stage_id| self.stage(**stage_id).is_none())
            .copied()
            .collect();
        orphan_stage_ids.sort_by_key(|stage_id| stage_id.into_inner());
        for stage_id in orphan_stage_ids {
            ordered.extend(self.tasks_in(stage_id));
        }
        ordered
    }

    /// Returns the task with the given identifier, if present.
    #[must_use]
    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.all_tasks().into_iter().find(|task| task.id() == task_id)
    }

    /// Returns the owning project of the board, if it has any stages.
    #[must_use]
    pub fn project_id(&self) -> Option<ProjectId> {
        self.stages.first().map(Stage::project_id)
    }

    /// Reducer: adds a newly created task to its stage's list.
    #[must_use]
    pub fn apply_create(&self, task: Task) -> Self {
        let mut next = self.clone();
        let stage_tasks = next.tasks_by_stage.entry(task.stage_id()).or_default();
        stage_tasks.push(task);
        stage_tasks.sort_by_key(Task::position);
        next
    }

    /// Reducer: reassigns a task to a stage and position.
    ///
    /// Both affected stage lists are re-sorted by position. Siblings are not
    /// renumbered; the source stage may be left with a gap, and a task
    /// dropped onto an occupied position sorts adjacent to the occupant.
    /// This mirrors the persisted contract, where only the moved record is
    /// written.
    #[must_use]
    pub fn apply_move(&self, task_id: TaskId, stage_id: StageId, position: u32) -> Self {
        self.rebuild_with(|task| {
            if task.id() == task_id {
                task.relocate(stage_id, position);
            }
        })
    }

    /// Reducer: removes a task without renumbering its former siblings.
    #[must_use]
    pub fn apply_delete(&self, task_id: TaskId) -> Self {
        let mut next = self.clone();
        for stage_tasks in next.tasks_by_stage.values_mut() {
            stage_tasks.retain(|task| task.id() != task_id);
        }
        next
    }

    /// Reducer: optimistic drag preview reassigning only the stage.
    ///
    /// Used while a drag gesture is in flight to give live visual feedback
    /// before anything is persisted. The position is left untouched; the
    /// committed move (or the next fetched snapshot) supersedes the preview.
    #[must_use]
    pub fn preview_move(&self, task_id: TaskId, stage_id: StageId) -> Self {
        let position = match self.task(task_id) {
            Some(task) => task.position(),
            None => return self.clone(),
        };
        self.apply_move(task_id, stage_id, position)
    }

    /// Rebuilds the grouped task map after mutating tasks in place.
    fn rebuild_with(&self, mutate: impl Fn(&mut Task)) -> Self {
        let mut tasks: Vec<Task> = self.all_tasks().into_iter().cloned().collect();
        for task in &mut tasks {
            mutate(task);
        }
        Self::from_parts(self.stages.clone(), tasks)
    }
}
