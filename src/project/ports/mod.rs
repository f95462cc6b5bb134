//! Port contracts for project and template persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by project services.

pub mod repository;
pub mod template;

pub use repository::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult};
pub use template::{TemplateRepository, TemplateRepositoryError, TemplateRepositoryResult};
