//! Diesel row models for board persistence.

use super::schema::{project_stages, project_tasks};
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for stage records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = project_stages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StageRow {
    /// Stage identifier.
    pub id: uuid::Uuid,
    /// Owning project identifier.
    pub project_id: uuid::Uuid,
    /// Stage display name.
    pub name: String,
    /// Zero-based column position.
    pub position: i32,
}

/// Insert model for stage records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = project_stages)]
pub struct NewStageRow {
    /// Stage identifier.
    pub id: uuid::Uuid,
    /// Owning project identifier.
    pub project_id: uuid::Uuid,
    /// Stage display name.
    pub name: String,
    /// Zero-based column position.
    pub position: i32,
}

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = project_tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning project identifier.
    pub project_id: uuid::Uuid,
    /// Owning stage identifier.
    pub stage_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional long-form description.
    pub description: Option<String>,
    /// Zero-based position within the owning stage.
    pub position: i32,
    /// Priority level.
    pub priority: String,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Blocked flag.
    pub is_blocked: bool,
    /// Optional blocked reason.
    pub blocked_reason: Option<String>,
    /// Client-portal visibility flag.
    pub visible_to_client: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = project_tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning project identifier.
    pub project_id: uuid::Uuid,
    /// Owning stage identifier.
    pub stage_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional long-form description.
    pub description: Option<String>,
    /// Zero-based position within the owning stage.
    pub position: i32,
    /// Priority level.
    pub priority: String,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Blocked flag.
    pub is_blocked: bool,
    /// Optional blocked reason.
    pub blocked_reason: Option<String>,
    /// Client-portal visibility flag.
    pub visible_to_client: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Update changeset for task records.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = project_tasks)]
pub struct TaskChangeset {
    /// Owning stage identifier.
    pub stage_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional long-form description.
    pub description: Option<Option<String>>,
    /// Zero-based position within the owning stage.
    pub position: i32,
    /// Priority level.
    pub priority: String,
    /// Optional due date.
    pub due_date: Option<Option<NaiveDate>>,
    /// Blocked flag.
    pub is_blocked: bool,
    /// Optional blocked reason.
    pub blocked_reason: Option<Option<String>>,
    /// Client-portal visibility flag.
    pub visible_to_client: bool,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
