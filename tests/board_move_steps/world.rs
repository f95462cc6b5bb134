//! Shared world state for board movement BDD scenarios.

use std::sync::Arc;

use atelier::board::{
    adapters::memory::InMemoryBoardRepository,
    domain::{BoardState, StageId, TaskId},
    services::BoardService,
};
use atelier::project::{
    adapters::memory::{InMemoryProjectRepository, InMemoryTemplateRepository},
    domain::ProjectId,
    services::ProjectSetupService,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Board service type used by the BDD world.
pub type TestBoardService = BoardService<InMemoryBoardRepository, DefaultClock>;

/// Project setup service type used by the BDD world.
pub type TestSetupService = ProjectSetupService<
    InMemoryProjectRepository,
    InMemoryTemplateRepository,
    InMemoryBoardRepository,
    DefaultClock,
>;

/// Scenario world for board movement behaviour tests.
pub struct BoardWorld {
    pub board_service: TestBoardService,
    pub setup_service: TestSetupService,
    pub project_id: Option<ProjectId>,
    pub created_task_ids: Vec<TaskId>,
    pub dragged_task_id: Option<TaskId>,
}

impl BoardWorld {
    /// Creates a world with empty pending scenario state.
    #[must_use]
    pub fn new() -> Self {
        let boards = Arc::new(InMemoryBoardRepository::new());
        let clock = Arc::new(DefaultClock);
        let board_service = BoardService::new(Arc::clone(&boards), Arc::clone(&clock));
        let setup_service = ProjectSetupService::new(
            Arc::new(InMemoryProjectRepository::new()),
            Arc::new(InMemoryTemplateRepository::new()),
            boards,
            clock,
        );
        Self {
            board_service,
            setup_service,
            project_id: None,
            created_task_ids: Vec::new(),
            dragged_task_id: None,
        }
    }

    /// Returns the scenario's project identifier.
    ///
    /// # Errors
    ///
    /// Returns an error when no project has been created yet.
    pub fn project_id(&self) -> Result<ProjectId, eyre::Report> {
        self.project_id
            .ok_or_else(|| eyre::eyre!("missing project in scenario world"))
    }

    /// Fetches the current persisted board snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error when no project exists or the board cannot load.
    pub fn load_board(&self) -> Result<BoardState, eyre::Report> {
        let project_id = self.project_id()?;
        run_async(self.board_service.load_board(project_id))
            .map_err(|err| eyre::eyre!("board load failed: {err}"))
    }

    /// Resolves a stage by display name against the persisted board.
    ///
    /// # Errors
    ///
    /// Returns an error when the stage is not on the board.
    pub fn stage_id_by_name(&self, name: &str) -> Result<StageId, eyre::Report> {
        let board = self.load_board()?;
        board
            .stages()
            .iter()
            .find(|stage| stage.name().as_str() == name)
            .map(atelier::board::domain::Stage::id)
            .ok_or_else(|| eyre::eyre!("stage {name:?} not on board"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
