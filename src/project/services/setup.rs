//! Service layer for project creation, template instantiation, and
//! lifecycle edits.
//!
//! Creating a project seeds its board in the same flow: either the default
//! three-stage set, or a structural clone of a workflow template's stages
//! and tasks re-keyed to project-scoped identifiers. Cloning builds a
//! transient `TemplateStageId -> StageId` map that is discarded once the
//! template's tasks have been attached; it is never persisted.

use crate::board::{
    domain::{BoardDomainError, Stage, StageId, StageName, Task},
    ports::{BoardRepository, BoardRepositoryError},
};
use crate::project::{
    domain::{
        ClientId, Project, ProjectDomainError, ProjectId, ProjectKind, ProjectName,
        TemplateId, TemplateStageId,
    },
    ports::{
        ProjectRepository, ProjectRepositoryError, TemplateRepository, TemplateRepositoryError,
    },
};
use chrono::NaiveDate;
use mockable::Clock;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Stage names seeded onto a blank project's board, in column order.
pub const DEFAULT_STAGE_NAMES: [&str; 3] = ["To Do", "In Progress", "Done"];

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    client_id: ClientId,
    name: String,
    kind: ProjectKind,
    template_id: Option<TemplateId>,
    start_date: Option<NaiveDate>,
    target_date: Option<NaiveDate>,
}

impl CreateProjectRequest {
    /// Creates a request with required project fields.
    ///
    /// Without further options the project starts blank: the default stage
    /// set is seeded and no schedule is set.
    #[must_use]
    pub fn new(client_id: ClientId, name: impl Into<String>, kind: ProjectKind) -> Self {
        Self {
            client_id,
            name: name.into(),
            kind,
            template_id: None,
            start_date: None,
            target_date: None,
        }
    }

    /// Clones the given workflow template instead of the default stages.
    #[must_use]
    pub const fn from_template(mut self, template_id: TemplateId) -> Self {
        self.template_id = Some(template_id);
        self
    }

    /// Sets the start date.
    #[must_use]
    pub const fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Sets the target date.
    #[must_use]
    pub const fn with_target_date(mut self, target_date: NaiveDate) -> Self {
        self.target_date = Some(target_date);
        self
    }
}

/// Service-level errors for project setup and lifecycle operations.
#[derive(Debug, Error)]
pub enum ProjectSetupError {
    /// Project domain validation failed.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),
    /// Board domain validation failed while seeding stages or tasks.
    #[error(transparent)]
    BoardDomain(#[from] BoardDomainError),
    /// Project repository operation failed.
    #[error(transparent)]
    Projects(#[from] ProjectRepositoryError),
    /// Template repository operation failed.
    #[error(transparent)]
    Templates(#[from] TemplateRepositoryError),
    /// Board repository operation failed while seeding stages or tasks.
    #[error(transparent)]
    Board(#[from] BoardRepositoryError),
    /// The requested workflow template does not exist.
    #[error("workflow template not found: {0}")]
    TemplateNotFound(TemplateId),
}

/// Result type for project setup service operations.
pub type ProjectSetupResult<T> = Result<T, ProjectSetupError>;

/// Project creation and lifecycle orchestration service.
#[derive(Clone)]
pub struct ProjectSetupService<P, T, B, C>
where
    P: ProjectRepository,
    T: TemplateRepository,
    B: BoardRepository,
    C: Clock + Send + Sync,
{
    projects: Arc<P>,
    templates: Arc<T>,
    boards: Arc<B>,
    clock: Arc<C>,
}

impl<P, T, B, C> ProjectSetupService<P, T, B, C>
where
    P: ProjectRepository,
    T: TemplateRepository,
    B: BoardRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new project setup service.
    #[must_use]
    pub const fn new(projects: Arc<P>, templates: Arc<T>, boards: Arc<B>, clock: Arc<C>) -> Self {
        Self {
            projects,
            templates,
            boards,
            clock,
        }
    }

    /// Creates a project and seeds its board.
    ///
    /// With no template, the board gets the default stages `To Do`,
    /// `In Progress`, `Done` at positions 0 to 2 and no tasks. With a
    /// template, the template's stages and tasks are cloned in order,
    /// re-keyed to new project-scoped identifiers.
    ///
    /// The template is resolved before anything is written, so an unknown
    /// template leaves no partial state. Failures while seeding stages or
    /// tasks abort the flow fail-fast; records created before the failure
    /// remain, as the store offers no cross-record transaction.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectSetupError::Domain`] when the name fails validation,
    /// [`ProjectSetupError::TemplateNotFound`] when the template does not
    /// exist, or a repository error when persistence rejects a write.
    pub async fn create_project(
        &self,
        request: CreateProjectRequest,
    ) -> ProjectSetupResult<Project> {
        let CreateProjectRequest {
            client_id,
            name,
            kind,
            template_id,
            start_date,
            target_date,
        } = request;

        let project_name = ProjectName::new(name)?;
        if let Some(id) = template_id {
            self.templates
                .find_by_id(id)
                .await?
                .ok_or(ProjectSetupError::TemplateNotFound(id))?;
        }

        let mut project = Project::new(client_id, project_name, kind, template_id, &*self.clock);
        if start_date.is_some() || target_date.is_some() {
            project.set_schedule(start_date, target_date, &*self.clock)?;
        }
        self.projects.insert(&project).await?;

        match template_id {
            Some(id) => self.clone_template(id, project.id()).await?,
            None => self.seed_default_stages(project.id()).await?,
        }

        Ok(project)
    }

    /// Marks a project completed.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectSetupError::Projects`] when the project is not found
    /// or persistence fails.
    pub async fn complete_project(&self, id: ProjectId) -> ProjectSetupResult<Project> {
        let mut project = self.find_by_id_or_error(id).await?;
        project.complete(&*self.clock);
        self.projects.update(&project).await?;
        Ok(project)
    }

    /// Archives a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectSetupError::Projects`] when the project is not found
    /// or persistence fails.
    pub async fn archive_project(&self, id: ProjectId) -> ProjectSetupResult<Project> {
        let mut project = self.find_by_id_or_error(id).await?;
        project.archive(&*self.clock);
        self.projects.update(&project).await?;
        Ok(project)
    }

    /// Returns a project to `Active` status.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectSetupError::Projects`] when the project is not found
    /// or persistence fails.
    pub async fn reactivate_project(&self, id: ProjectId) -> ProjectSetupResult<Project> {
        let mut project = self.find_by_id_or_error(id).await?;
        project.reactivate(&*self.clock);
        self.projects.update(&project).await?;
        Ok(project)
    }

    /// Replaces a project's start and target dates.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectSetupError::Domain`] when the target falls before
    /// the start, or [`ProjectSetupError::Projects`] when the project is not
    /// found or persistence fails.
    pub async fn set_schedule(
        &self,
        id: ProjectId,
        start_date: Option<NaiveDate>,
        target_date: Option<NaiveDate>,
    ) -> ProjectSetupResult<Project> {
        let mut project = self.find_by_id_or_error(id).await?;
        project.set_schedule(start_date, target_date, &*self.clock)?;
        self.projects.update(&project).await?;
        Ok(project)
    }

    /// Finds a project by identifier.
    ///
    /// Returns `Ok(None)` when no project has the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectSetupError::Projects`] when persistence lookup
    /// fails.
    pub async fn find_by_id(&self, id: ProjectId) -> ProjectSetupResult<Option<Project>> {
        Ok(self.projects.find_by_id(id).await?)
    }

    /// Returns a client's projects, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectSetupError::Projects`] when persistence lookup
    /// fails.
    pub async fn list_by_client(&self, client_id: ClientId) -> ProjectSetupResult<Vec<Project>> {
        Ok(self.projects.list_by_client(client_id).await?)
    }

    /// Hard-deletes a project together with its board.
    ///
    /// The admin-only path: board rows go first so a failure cannot leave a
    /// project record pointing at a half-deleted board.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectSetupError::Board`] or
    /// [`ProjectSetupError::Projects`] when persistence fails.
    pub async fn delete_project(&self, id: ProjectId) -> ProjectSetupResult<()> {
        self.boards.delete_project_board(id).await?;
        self.projects.delete(id).await?;
        Ok(())
    }

    /// Clones a template's stages and tasks onto a fresh project board.
    ///
    /// Stages are created in template position order; each records its
    /// mapping from template stage to new project stage. Template tasks are
    /// then attached through that map in fetched order. A template task
    /// whose stage is missing from the map is orphaned data and is skipped
    /// silently; every other failure aborts the clone.
    async fn clone_template(
        &self,
        template_id: TemplateId,
        project_id: ProjectId,
    ) -> ProjectSetupResult<()> {
        let template_stages = self.templates.list_stages(template_id).await?;
        let stage_ids: Vec<TemplateStageId> =
            template_stages.iter().map(|stage| stage.id()).collect();
        let template_tasks = self.templates.list_tasks_for_stages(&stage_ids).await?;

        let mut stage_map: HashMap<TemplateStageId, StageId> = HashMap::new();
        for template_stage in &template_stages {
            let stage = Stage::new(
                project_id,
                template_stage.name().clone(),
                template_stage.position(),
            );
            self.boards.insert_stage(&stage).await?;
            stage_map.insert(template_stage.id(), stage.id());
        }

        for template_task in &template_tasks {
            let Some(&stage_id) = stage_map.get(&template_task.stage_id()) else {
                continue;
            };
            let mut task = Task::new(
                project_id,
                stage_id,
                template_task.title().clone(),
                template_task.position(),
                &*self.clock,
            );
            task.set_priority(template_task.priority(), &*self.clock);
            self.boards.insert_task(&task).await?;
        }

        Ok(())
    }

    /// Seeds the default stage set onto a blank project's board.
    async fn seed_default_stages(&self, project_id: ProjectId) -> ProjectSetupResult<()> {
        for (position, name) in (0u32..).zip(DEFAULT_STAGE_NAMES) {
            let stage = Stage::new(project_id, StageName::new(name)?, position);
            self.boards.insert_stage(&stage).await?;
        }
        Ok(())
    }

    async fn find_by_id_or_error(&self, id: ProjectId) -> ProjectSetupResult<Project> {
        self.projects
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProjectRepositoryError::NotFound(id).into())
    }
}
