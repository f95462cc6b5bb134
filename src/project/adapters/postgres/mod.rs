//! `PostgreSQL` adapters for project and template persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresProjectRepository, PostgresTemplateRepository, ProjectPgPool};
