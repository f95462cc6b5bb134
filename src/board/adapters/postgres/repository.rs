//! `PostgreSQL` repository implementation for board persistence.

use super::{
    models::{NewStageRow, NewTaskRow, StageRow, TaskChangeset, TaskRow},
    schema::{project_stages, project_tasks},
};
use crate::board::{
    domain::{
        PersistedStageData, PersistedTaskData, ProjectId, Stage, StageId, StageName, Task, TaskId,
        TaskPriority, TaskTitle,
    },
    ports::{BoardRepository, BoardRepositoryError, BoardRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by board adapters.
pub type BoardPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed board repository.
#[derive(Debug, Clone)]
pub struct PostgresBoardRepository {
    pool: BoardPgPool,
}

impl PostgresBoardRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> BoardRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> BoardRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(BoardRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(BoardRepositoryError::persistence)?
    }
}

#[async_trait]
impl BoardRepository for PostgresBoardRepository {
    async fn list_stages(&self, project_id: ProjectId) -> BoardRepositoryResult<Vec<Stage>> {
        self.run_blocking(move |connection| {
            let rows = project_stages::table
                .filter(project_stages::project_id.eq(project_id.into_inner()))
                .order(project_stages::position.asc())
                .select(StageRow::as_select())
                .load::<StageRow>(connection)
                .map_err(BoardRepositoryError::persistence)?;
            rows.into_iter().map(row_to_stage).collect()
        })
        .await
    }

    async fn list_tasks(&self, project_id: ProjectId) -> BoardRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = project_tasks::table
                .filter(project_tasks::project_id.eq(project_id.into_inner()))
                .order((project_tasks::position.asc(), project_tasks::created_at.asc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(BoardRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn insert_stage(&self, stage: &Stage) -> BoardRepositoryResult<()> {
        let stage_id = stage.id();
        let new_row = stage_to_new_row(stage)?;
        self.run_blocking(move |connection| {
            diesel::insert_into(project_stages::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        BoardRepositoryError::DuplicateStage(stage_id)
                    }
                    _ => BoardRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn insert_task(&self, task: &Task) -> BoardRepositoryResult<()> {
        let task_id = task.id();
        let new_row = task_to_new_row(task)?;
        self.run_blocking(move |connection| {
            diesel::insert_into(project_tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        BoardRepositoryError::DuplicateTask(task_id)
                    }
                    _ => BoardRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_task_by_id(&self, id: TaskId) -> BoardRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = project_tasks::table
                .filter(project_tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(BoardRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn update_task(&self, task: &Task) -> BoardRepositoryResult<()> {
        let task_id = task.id();
        let changeset = task_to_changeset(task)?;
        self.run_blocking(move |connection| {
            let updated = diesel::update(
                project_tasks::table.filter(project_tasks::id.eq(task_id.into_inner())),
            )
            .set(&changeset)
            .execute(connection)
            .map_err(BoardRepositoryError::persistence)?;

            if updated == 0 {
                return Err(BoardRepositoryError::TaskNotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete_task(&self, id: TaskId) -> BoardRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(
                project_tasks::table.filter(project_tasks::id.eq(id.into_inner())),
            )
            .execute(connection)
            .map_err(BoardRepositoryError::persistence)?;

            if deleted == 0 {
                return Err(BoardRepositoryError::TaskNotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn delete_project_board(&self, project_id: ProjectId) -> BoardRepositoryResult<()> {
        self.run_blocking(move |connection| {
            diesel::delete(
                project_tasks::table
                    .filter(project_tasks::project_id.eq(project_id.into_inner())),
            )
            .execute(connection)
            .map_err(BoardRepositoryError::persistence)?;
            diesel::delete(
                project_stages::table
                    .filter(project_stages::project_id.eq(project_id.into_inner())),
            )
            .execute(connection)
            .map_err(BoardRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }
}

fn stage_to_new_row(stage: &Stage) -> BoardRepositoryResult<NewStageRow> {
    Ok(NewStageRow {
        id: stage.id().into_inner(),
        project_id: stage.project_id().into_inner(),
        name: stage.name().as_str().to_owned(),
        position: i32::try_from(stage.position()).map_err(BoardRepositoryError::persistence)?,
    })
}

fn task_to_new_row(task: &Task) -> BoardRepositoryResult<NewTaskRow> {
    Ok(NewTaskRow {
        id: task.id().into_inner(),
        project_id: task.project_id().into_inner(),
        stage_id: task.stage_id().into_inner(),
        title: task.title().as_str().to_owned(),
        description: task.description().map(str::to_owned),
        position: i32::try_from(task.position()).map_err(BoardRepositoryError::persistence)?,
        priority: task.priority().as_str().to_owned(),
        due_date: task.due_date(),
        is_blocked: task.is_blocked(),
        blocked_reason: task.blocked_reason().map(str::to_owned),
        visible_to_client: task.visible_to_client(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    })
}

fn task_to_changeset(task: &Task) -> BoardRepositoryResult<TaskChangeset> {
    Ok(TaskChangeset {
        stage_id: task.stage_id().into_inner(),
        title: task.title().as_str().to_owned(),
        description: Some(task.description().map(str::to_owned)),
        position: i32::try_from(task.position()).map_err(BoardRepositoryError::persistence)?,
        priority: task.priority().as_str().to_owned(),
        due_date: Some(task.due_date()),
        is_blocked: task.is_blocked(),
        blocked_reason: Some(task.blocked_reason().map(str::to_owned)),
        visible_to_client: task.visible_to_client(),
        updated_at: task.updated_at(),
    })
}

fn row_to_stage(row: StageRow) -> BoardRepositoryResult<Stage> {
    let StageRow {
        id,
        project_id,
        name,
        position,
    } = row;

    let data = PersistedStageData {
        id: StageId::from_uuid(id),
        project_id: ProjectId::from_uuid(project_id),
        name: StageName::new(name).map_err(BoardRepositoryError::invalid_persisted_data)?,
        position: u32::try_from(position).map_err(BoardRepositoryError::invalid_persisted_data)?,
    };
    Ok(Stage::from_persisted(data))
}

fn row_to_task(row: TaskRow) -> BoardRepositoryResult<Task> {
    let TaskRow {
        id,
        project_id,
        stage_id,
        title,
        description,
        position,
        priority,
        due_date,
        is_blocked,
        blocked_reason,
        visible_to_client,
        created_at,
        updated_at,
    } = row;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        project_id: ProjectId::from_uuid(project_id),
        stage_id: StageId::from_uuid(stage_id),
        title: TaskTitle::new(title).map_err(BoardRepositoryError::invalid_persisted_data)?,
        description,
        position: u32::try_from(position).map_err(BoardRepositoryError::invalid_persisted_data)?,
        priority: TaskPriority::try_from(priority.as_str())
            .map_err(BoardRepositoryError::invalid_persisted_data)?,
        due_date,
        is_blocked,
        blocked_reason,
        visible_to_client,
        created_at,
        updated_at,
    };
    Ok(Task::from_persisted(data))
}
