//! In-memory adapters for project and template persistence.

mod project;
mod template;

pub use project::InMemoryProjectRepository;
pub use template::InMemoryTemplateRepository;
