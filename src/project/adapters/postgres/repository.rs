//! `PostgreSQL` repository implementations for project and template storage.

use super::{
    models::{NewProjectRow, ProjectChangeset, ProjectRow, TemplateRow, TemplateStageRow,
        TemplateTaskRow},
    schema::{projects, template_stages, template_tasks, workflow_templates},
};
use crate::board::domain::{StageName, TaskPriority, TaskTitle};
use crate::project::{
    domain::{
        ClientId, PersistedProjectData, Project, ProjectId, ProjectKind, ProjectName,
        ProjectStatus, Template, TemplateId, TemplateStage, TemplateStageId, TemplateTask,
        TemplateTaskId,
    },
    ports::{
        ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult, TemplateRepository,
        TemplateRepositoryError, TemplateRepositoryResult,
    },
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by project adapters.
pub type ProjectPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed project repository.
#[derive(Debug, Clone)]
pub struct PostgresProjectRepository {
    pool: ProjectPgPool,
}

impl PostgresProjectRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ProjectPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ProjectRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ProjectRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ProjectRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ProjectRepositoryError::persistence)?
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn insert(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let project_id = project.id();
        let new_row = project_to_new_row(project);
        self.run_blocking(move |connection| {
            diesel::insert_into(projects::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ProjectRepositoryError::DuplicateProject(project_id)
                    }
                    _ => ProjectRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let project_id = project.id();
        let changeset = project_to_changeset(project);
        self.run_blocking(move |connection| {
            let updated =
                diesel::update(projects::table.filter(projects::id.eq(project_id.into_inner())))
                    .set(&changeset)
                    .execute(connection)
                    .map_err(ProjectRepositoryError::persistence)?;
            if updated == 0 {
                return Err(ProjectRepositoryError::NotFound(project_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        self.run_blocking(move |connection| {
            let row = projects::table
                .filter(projects::id.eq(id.into_inner()))
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(connection)
                .optional()
                .map_err(ProjectRepositoryError::persistence)?;
            row.map(row_to_project).transpose()
        })
        .await
    }

    async fn list_by_client(&self, client_id: ClientId) -> ProjectRepositoryResult<Vec<Project>> {
        self.run_blocking(move |connection| {
            let rows = projects::table
                .filter(projects::client_id.eq(client_id.into_inner()))
                .order(projects::created_at.desc())
                .select(ProjectRow::as_select())
                .load::<ProjectRow>(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            rows.into_iter().map(row_to_project).collect()
        })
        .await
    }

    async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted =
                diesel::delete(projects::table.filter(projects::id.eq(id.into_inner())))
                    .execute(connection)
                    .map_err(ProjectRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(ProjectRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

/// `PostgreSQL`-backed template repository.
#[derive(Debug, Clone)]
pub struct PostgresTemplateRepository {
    pool: ProjectPgPool,
}

impl PostgresTemplateRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ProjectPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TemplateRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TemplateRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TemplateRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TemplateRepositoryError::persistence)?
    }
}

#[async_trait]
impl TemplateRepository for PostgresTemplateRepository {
    async fn find_by_id(&self, id: TemplateId) -> TemplateRepositoryResult<Option<Template>> {
        self.run_blocking(move |connection| {
            let row = workflow_templates::table
                .filter(workflow_templates::id.eq(id.into_inner()))
                .select(TemplateRow::as_select())
                .first::<TemplateRow>(connection)
                .optional()
                .map_err(TemplateRepositoryError::persistence)?;
            row.map(row_to_template).transpose()
        })
        .await
    }

    async fn list_stages(
        &self,
        template_id: TemplateId,
    ) -> TemplateRepositoryResult<Vec<TemplateStage>> {
        self.run_blocking(move |connection| {
            let rows = template_stages::table
                .filter(template_stages::template_id.eq(template_id.into_inner()))
                .order(template_stages::position.asc())
                .select(TemplateStageRow::as_select())
                .load::<TemplateStageRow>(connection)
                .map_err(TemplateRepositoryError::persistence)?;
            rows.into_iter().map(row_to_template_stage).collect()
        })
        .await
    }

    async fn list_tasks_for_stages(
        &self,
        stage_ids: &[TemplateStageId],
    ) -> TemplateRepositoryResult<Vec<TemplateTask>> {
        let ids: Vec<uuid::Uuid> = stage_ids.iter().map(|id| id.into_inner()).collect();
        self.run_blocking(move |connection| {
            let rows = template_tasks::table
                .filter(template_tasks::stage_id.eq_any(&ids))
                .select(TemplateTaskRow::as_select())
                .load::<TemplateTaskRow>(connection)
                .map_err(TemplateRepositoryError::persistence)?;
            rows.into_iter().map(row_to_template_task).collect()
        })
        .await
    }
}

fn project_to_new_row(project: &Project) -> NewProjectRow {
    NewProjectRow {
        id: project.id().into_inner(),
        client_id: project.client_id().into_inner(),
        template_id: project.template_id().map(TemplateId::into_inner),
        name: project.name().as_str().to_owned(),
        kind: project.kind().as_str().to_owned(),
        status: project.status().as_str().to_owned(),
        start_date: project.start_date(),
        target_date: project.target_date(),
        created_at: project.created_at(),
        updated_at: project.updated_at(),
    }
}

fn project_to_changeset(project: &Project) -> ProjectChangeset {
    ProjectChangeset {
        name: project.name().as_str().to_owned(),
        kind: project.kind().as_str().to_owned(),
        status: project.status().as_str().to_owned(),
        start_date: Some(project.start_date()),
        target_date: Some(project.target_date()),
        updated_at: project.updated_at(),
    }
}

fn row_to_project(row: ProjectRow) -> ProjectRepositoryResult<Project> {
    let ProjectRow {
        id,
        client_id,
        template_id,
        name,
        kind,
        status,
        start_date,
        target_date,
        created_at,
        updated_at,
    } = row;

    let data = PersistedProjectData {
        id: ProjectId::from_uuid(id),
        client_id: ClientId::from_uuid(client_id),
        template_id: template_id.map(TemplateId::from_uuid),
        name: ProjectName::new(name).map_err(ProjectRepositoryError::invalid_persisted_data)?,
        kind: ProjectKind::try_from(kind.as_str())
            .map_err(ProjectRepositoryError::invalid_persisted_data)?,
        status: ProjectStatus::try_from(status.as_str())
            .map_err(ProjectRepositoryError::invalid_persisted_data)?,
        start_date,
        target_date,
        created_at,
        updated_at,
    };
    Ok(Project::from_persisted(data))
}

fn row_to_template(row: TemplateRow) -> TemplateRepositoryResult<Template> {
    let TemplateRow {
        id,
        name,
        description,
    } = row;
    Ok(Template::new(
        TemplateId::from_uuid(id),
        StageName::new(name).map_err(TemplateRepositoryError::invalid_persisted_data)?,
        description,
    ))
}

fn row_to_template_stage(row: TemplateStageRow) -> TemplateRepositoryResult<TemplateStage> {
    let TemplateStageRow {
        id,
        template_id,
        name,
        position,
    } = row;
    Ok(TemplateStage::new(
        TemplateStageId::from_uuid(id),
        TemplateId::from_uuid(template_id),
        StageName::new(name).map_err(TemplateRepositoryError::invalid_persisted_data)?,
        u32::try_from(position).map_err(TemplateRepositoryError::invalid_persisted_data)?,
    ))
}

fn row_to_template_task(row: TemplateTaskRow) -> TemplateRepositoryResult<TemplateTask> {
    let TemplateTaskRow {
        id,
        stage_id,
        title,
        position,
        priority,
    } = row;
    Ok(TemplateTask::new(
        TemplateTaskId::from_uuid(id),
        TemplateStageId::from_uuid(stage_id),
        TaskTitle::new(title).map_err(TemplateRepositoryError::invalid_persisted_data)?,
        u32::try_from(position).map_err(TemplateRepositoryError::invalid_persisted_data)?,
        TaskPriority::try_from(priority.as_str())
            .map_err(TemplateRepositoryError::invalid_persisted_data)?,
    ))
}
