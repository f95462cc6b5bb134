//! Project aggregate root.

use super::{ClientId, ProjectDomainError, ProjectKind, ProjectName, ProjectStatus, TemplateId};
use crate::board::domain::ProjectId;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A unit of trackable work for a client.
///
/// Projects are created `Active`, either blank (the default stage set is
/// seeded alongside) or from a workflow template (stages and tasks cloned).
/// The optional template identifier records provenance only; the clone is
/// fully detached from its source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    client_id: ClientId,
    template_id: Option<TemplateId>,
    name: ProjectName,
    kind: ProjectKind,
    status: ProjectStatus,
    start_date: Option<NaiveDate>,
    target_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted project identifier.
    pub id: ProjectId,
    /// Persisted owning client identifier.
    pub client_id: ClientId,
    /// Persisted source template, if the project was cloned from one.
    pub template_id: Option<TemplateId>,
    /// Persisted display name.
    pub name: ProjectName,
    /// Persisted work category.
    pub kind: ProjectKind,
    /// Persisted lifecycle status.
    pub status: ProjectStatus,
    /// Persisted start date, if any.
    pub start_date: Option<NaiveDate>,
    /// Persisted target date, if any.
    pub target_date: Option<NaiveDate>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new project with `Active` status and no schedule.
    #[must_use]
    pub fn new(
        client_id: ClientId,
        name: ProjectName,
        kind: ProjectKind,
        template_id: Option<TemplateId>,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: ProjectId::new(),
            client_id,
            template_id,
            name,
            kind,
            status: ProjectStatus::Active,
            start_date: None,
            target_date: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: data.id,
            client_id: data.client_id,
            template_id: data.template_id,
            name: data.name,
            kind: data.kind,
            status: data.status,
            start_date: data.start_date,
            target_date: data.target_date,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the owning client identifier.
    #[must_use]
    pub const fn client_id(&self) -> ClientId {
        self.client_id
    }

    /// Returns the source template, if the project was cloned from one.
    #[must_use]
    pub const fn template_id(&self) -> Option<TemplateId> {
        self.template_id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &ProjectName {
        &self.name
    }

    /// Returns the work category.
    #[must_use]
    pub const fn kind(&self) -> ProjectKind {
        self.kind
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the start date, if any.
    #[must_use]
    pub const fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    /// Returns the target date, if any.
    #[must_use]
    pub const fn target_date(&self) -> Option<NaiveDate> {
        self.target_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Marks the project completed.
    pub fn complete(&mut self, clock: &impl Clock) {
        self.status = ProjectStatus::Completed;
        self.touch(clock);
    }

    /// Archives the project, hiding it from default listings.
    pub fn archive(&mut self, clock: &impl Clock) {
        self.status = ProjectStatus::Archived;
        self.touch(clock);
    }

    /// Returns the project to `Active` status.
    pub fn reactivate(&mut self, clock: &impl Clock) {
        self.status = ProjectStatus::Active;
        self.touch(clock);
    }

    /// Replaces the start and target dates.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::TargetBeforeStart`] when both dates are
    /// set and the target falls before the start.
    pub fn set_schedule(
        &mut self,
        start_date: Option<NaiveDate>,
        target_date: Option<NaiveDate>,
        clock: &impl Clock,
    ) -> Result<(), ProjectDomainError> {
        if let (Some(start), Some(target)) = (start_date, target_date)
            && target < start
        {
            return Err(ProjectDomainError::TargetBeforeStart { start, target });
        }
        self.start_date = start_date;
        self.target_date = target_date;
        self.touch(clock);
        Ok(())
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
