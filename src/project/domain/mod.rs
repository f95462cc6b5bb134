//! Domain model for client projects and workflow templates.
//!
//! The project domain models the project lifecycle (status, schedule,
//! template provenance) and the read-only template blueprints cloned into
//! new projects. All infrastructure concerns are kept outside the domain
//! boundary.

mod error;
mod ids;
mod kind;
mod name;
mod project;
mod status;
mod template;

pub use crate::board::domain::ProjectId;
pub use error::{ParseProjectKindError, ParseProjectStatusError, ProjectDomainError};
pub use ids::{ClientId, TemplateId, TemplateStageId, TemplateTaskId};
pub use kind::ProjectKind;
pub use name::ProjectName;
pub use project::{PersistedProjectData, Project};
pub use status::ProjectStatus;
pub use template::{Template, TemplateStage, TemplateTask};
