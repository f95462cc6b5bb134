//! Task aggregate: a unit of work owned by exactly one stage.

use super::{BoardDomainError, ProjectId, StageId, TaskId, TaskPriority, TaskTitle};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A unit of work belonging to one stage within one project.
///
/// Within one stage, task positions are unique and contiguous from zero,
/// independent of other stages. Moving a task across stages reassigns
/// `stage_id` and `position` on the moved record only; the source stage may
/// hold a position gap until the next full board fetch, which sorts by
/// position regardless of gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    stage_id: StageId,
    title: TaskTitle,
    description: Option<String>,
    position: u32,
    priority: TaskPriority,
    due_date: Option<NaiveDate>,
    is_blocked: bool,
    blocked_reason: Option<String>,
    visible_to_client: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owning project identifier.
    pub project_id: ProjectId,
    /// Persisted owning stage identifier.
    pub stage_id: StageId,
    /// Persisted task title.
    pub title: TaskTitle,
    /// Persisted long-form description, if any.
    pub description: Option<String>,
    /// Persisted zero-based position within the owning stage.
    pub position: u32,
    /// Persisted priority level.
    pub priority: TaskPriority,
    /// Persisted due date, if any.
    pub due_date: Option<NaiveDate>,
    /// Persisted blocked flag.
    pub is_blocked: bool,
    /// Persisted blocked reason, if any.
    pub blocked_reason: Option<String>,
    /// Persisted client-portal visibility flag.
    pub visible_to_client: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task at the given position within a stage.
    ///
    /// New tasks default to medium priority, unblocked, no due date, and
    /// visible to the client portal.
    #[must_use]
    pub fn new(
        project_id: ProjectId,
        stage_id: StageId,
        title: TaskTitle,
        position: u32,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            project_id,
            stage_id,
            title,
            description: None,
            position,
            priority: TaskPriority::default(),
            due_date: None,
            is_blocked: false,
            blocked_reason: None,
            visible_to_client: true,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            stage_id: data.stage_id,
            title: data.title,
            description: data.description,
            position: data.position,
            priority: data.priority,
            due_date: data.due_date,
            is_blocked: data.is_blocked,
            blocked_reason: data.blocked_reason,
            visible_to_client: data.visible_to_client,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning project identifier.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the owning stage identifier.
    #[must_use]
    pub const fn stage_id(&self) -> StageId {
        self.stage_id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the long-form description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the zero-based position within the owning stage.
    #[must_use]
    pub const fn position(&self) -> u32 {
        self.position
    }

    /// Returns the priority level.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns whether the task is blocked.
    #[must_use]
    pub const fn is_blocked(&self) -> bool {
        self.is_blocked
    }

    /// Returns the blocked reason, if any.
    #[must_use]
    pub fn blocked_reason(&self) -> Option<&str> {
        self.blocked_reason.as_deref()
    }

    /// Returns whether the client portal may display this task.
    #[must_use]
    pub const fn visible_to_client(&self) -> bool {
        self.visible_to_client
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the task title.
    pub fn rename(&mut self, title: TaskTitle, clock: &impl Clock) {
        self.title = title;
        self.touch(clock);
    }

    /// Replaces the long-form description.
    pub fn set_description(&mut self, description: Option<String>, clock: &impl Clock) {
        self.description = description;
        self.touch(clock);
    }

    /// Replaces the priority level.
    pub fn set_priority(&mut self, priority: TaskPriority, clock: &impl Clock) {
        self.priority = priority;
        self.touch(clock);
    }

    /// Replaces the due date.
    pub fn set_due_date(&mut self, due_date: Option<NaiveDate>, clock: &impl Clock) {
        self.due_date = due_date;
        self.touch(clock);
    }

    /// Marks the task blocked with an explanatory reason.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyBlockedReason`] when the reason is
    /// empty after trimming.
    pub fn block(
        &mut self,
        reason: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), BoardDomainError> {
        let text = reason.into();
        if text.trim().is_empty() {
            return Err(BoardDomainError::EmptyBlockedReason);
        }
        self.is_blocked = true;
        self.blocked_reason = Some(text);
        self.touch(clock);
        Ok(())
    }

    /// Clears the blocked flag and its reason.
    pub fn unblock(&mut self, clock: &impl Clock) {
        self.is_blocked = false;
        self.blocked_reason = None;
        self.touch(clock);
    }

    /// Sets whether the client portal may display this task.
    pub fn set_client_visibility(&mut self, visible: bool, clock: &impl Clock) {
        self.visible_to_client = visible;
        self.touch(clock);
    }

    /// Reassigns the task to a stage and position.
    ///
    /// This updates the moved record only; sibling positions in the source
    /// and destination stages are left to the next full board fetch.
    pub fn move_to(&mut self, stage_id: StageId, position: u32, clock: &impl Clock) {
        self.stage_id = stage_id;
        self.position = position;
        self.touch(clock);
    }

    /// Reassigns stage and position without touching `updated_at`.
    ///
    /// Reserved for pure board-state reducers, which model persisted rows
    /// and leave lifecycle timestamps to the persistence path.
    pub(crate) const fn relocate(&mut self, stage_id: StageId, position: u32) {
        self.stage_id = stage_id;
        self.position = position;
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
