//! Shared world state for project setup BDD scenarios.

use std::sync::Arc;

use atelier::board::{adapters::memory::InMemoryBoardRepository, domain::BoardState};
use atelier::project::{
    adapters::memory::{InMemoryProjectRepository, InMemoryTemplateRepository},
    domain::{ClientId, Project, TemplateId},
    services::{ProjectSetupError, ProjectSetupService},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Setup service type used by the BDD world.
pub type TestSetupService = ProjectSetupService<
    InMemoryProjectRepository,
    InMemoryTemplateRepository,
    InMemoryBoardRepository,
    DefaultClock,
>;

/// Scenario world for project setup behaviour tests.
pub struct SetupWorld {
    pub service: TestSetupService,
    pub templates: InMemoryTemplateRepository,
    pub boards: Arc<InMemoryBoardRepository>,
    pub client_id: ClientId,
    pub template_id: Option<TemplateId>,
    pub last_result: Option<Result<Project, ProjectSetupError>>,
}

impl SetupWorld {
    /// Creates a world with empty pending scenario state.
    #[must_use]
    pub fn new() -> Self {
        let templates = InMemoryTemplateRepository::new();
        let boards = Arc::new(InMemoryBoardRepository::new());
        let service = ProjectSetupService::new(
            Arc::new(InMemoryProjectRepository::new()),
            Arc::new(templates.clone()),
            Arc::clone(&boards),
            Arc::new(DefaultClock),
        );
        Self {
            service,
            templates,
            boards,
            client_id: ClientId::new(),
            template_id: None,
            last_result: None,
        }
    }

    /// Returns the most recently created project.
    ///
    /// # Errors
    ///
    /// Returns an error when no creation has happened or it failed.
    pub fn created_project(&self) -> Result<&Project, eyre::Report> {
        self.last_result
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing creation result in scenario world"))?
            .as_ref()
            .map_err(|err| eyre::eyre!("unexpected project creation failure: {err}"))
    }

    /// Fetches the created project's persisted board snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error when no project exists or the board cannot load.
    pub fn load_board(&self) -> Result<BoardState, eyre::Report> {
        use atelier::board::ports::BoardRepository;

        let project_id = self.created_project()?.id();
        let stages = run_async(self.boards.list_stages(project_id))
            .map_err(|err| eyre::eyre!("stage listing failed: {err}"))?;
        let tasks = run_async(self.boards.list_tasks(project_id))
            .map_err(|err| eyre::eyre!("task listing failed: {err}"))?;
        Ok(BoardState::from_parts(stages, tasks))
    }
}

impl Default for SetupWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> SetupWorld {
    SetupWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
