//! Application services orchestrating project domain logic and ports.

mod setup;

pub use setup::{
    CreateProjectRequest, DEFAULT_STAGE_NAMES, ProjectSetupError, ProjectSetupResult,
    ProjectSetupService,
};
