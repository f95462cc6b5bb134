//! Diesel row models for project and template persistence.

use super::schema::{projects, template_stages, template_tasks, workflow_templates};
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for project records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    /// Project identifier.
    pub id: uuid::Uuid,
    /// Owning client identifier.
    pub client_id: uuid::Uuid,
    /// Source template, if any.
    pub template_id: Option<uuid::Uuid>,
    /// Project display name.
    pub name: String,
    /// Work category.
    pub kind: String,
    /// Lifecycle status.
    pub status: String,
    /// Optional start date.
    pub start_date: Option<NaiveDate>,
    /// Optional target date.
    pub target_date: Option<NaiveDate>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for project records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = projects)]
pub struct NewProjectRow {
    /// Project identifier.
    pub id: uuid::Uuid,
    /// Owning client identifier.
    pub client_id: uuid::Uuid,
    /// Source template, if any.
    pub template_id: Option<uuid::Uuid>,
    /// Project display name.
    pub name: String,
    /// Work category.
    pub kind: String,
    /// Lifecycle status.
    pub status: String,
    /// Optional start date.
    pub start_date: Option<NaiveDate>,
    /// Optional target date.
    pub target_date: Option<NaiveDate>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Update changeset for project records.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = projects)]
pub struct ProjectChangeset {
    /// Project display name.
    pub name: String,
    /// Work category.
    pub kind: String,
    /// Lifecycle status.
    pub status: String,
    /// Optional start date.
    pub start_date: Option<Option<NaiveDate>>,
    /// Optional target date.
    pub target_date: Option<Option<NaiveDate>>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Query result row for template records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = workflow_templates)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TemplateRow {
    /// Template identifier.
    pub id: uuid::Uuid,
    /// Template display name.
    pub name: String,
    /// Optional template description.
    pub description: Option<String>,
}

/// Query result row for template stage records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = template_stages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TemplateStageRow {
    /// Template stage identifier.
    pub id: uuid::Uuid,
    /// Owning template identifier.
    pub template_id: uuid::Uuid,
    /// Stage display name.
    pub name: String,
    /// Zero-based column position.
    pub position: i32,
}

/// Query result row for template task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = template_tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TemplateTaskRow {
    /// Template task identifier.
    pub id: uuid::Uuid,
    /// Owning template stage identifier.
    pub stage_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Zero-based position within the owning stage.
    pub position: i32,
    /// Priority level.
    pub priority: String,
}
