//! Shared test helpers for in-memory repository integration tests.

use atelier::board::{
    adapters::memory::InMemoryBoardRepository,
    domain::{StageId, Task},
    services::{BoardService, BoardServiceResult, CreateTaskRequest},
};
use atelier::project::{
    adapters::memory::{InMemoryProjectRepository, InMemoryTemplateRepository},
    domain::{ClientId, Project, ProjectId, ProjectKind},
    services::{CreateProjectRequest, ProjectSetupError, ProjectSetupService},
};
use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;

/// The platform wired against shared in-memory repositories.
pub struct Platform {
    /// Board repository shared by both services.
    pub boards: Arc<InMemoryBoardRepository>,
    /// Template repository, seedable through its inherent `seed` method.
    pub templates: InMemoryTemplateRepository,
    /// Board read/write service.
    pub board_service: BoardService<InMemoryBoardRepository, DefaultClock>,
    /// Project creation and lifecycle service.
    pub setup_service: ProjectSetupService<
        InMemoryProjectRepository,
        InMemoryTemplateRepository,
        InMemoryBoardRepository,
        DefaultClock,
    >,
}

/// Provides freshly wired services over shared repositories for each test.
#[fixture]
pub fn platform() -> Platform {
    let boards = Arc::new(InMemoryBoardRepository::new());
    let templates = InMemoryTemplateRepository::new();
    let clock = Arc::new(DefaultClock);
    let board_service = BoardService::new(Arc::clone(&boards), Arc::clone(&clock));
    let setup_service = ProjectSetupService::new(
        Arc::new(InMemoryProjectRepository::new()),
        Arc::new(templates.clone()),
        Arc::clone(&boards),
        clock,
    );
    Platform {
        boards,
        templates,
        board_service,
        setup_service,
    }
}

impl Platform {
    /// Creates a blank project seeded with the default stage set.
    ///
    /// # Errors
    ///
    /// Returns an error when project creation fails.
    pub async fn blank_project(&self, name: &str) -> Result<Project, ProjectSetupError> {
        self.setup_service
            .create_project(CreateProjectRequest::new(
                ClientId::new(),
                name,
                ProjectKind::Campaign,
            ))
            .await
    }

    /// Creates a task at the end of the given stage.
    ///
    /// # Errors
    ///
    /// Returns an error when task creation fails.
    pub async fn create_task(
        &self,
        project_id: ProjectId,
        stage_id: StageId,
        title: &str,
    ) -> BoardServiceResult<Task> {
        self.board_service
            .create_task(CreateTaskRequest::new(project_id, stage_id, title))
            .await
    }
}
