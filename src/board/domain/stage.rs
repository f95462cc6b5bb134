//! Stage aggregate: an ordered column on a project's board.

use super::{ProjectId, StageId, StageName};
use serde::{Deserialize, Serialize};

/// An ordered column on a project's kanban board.
///
/// Within one project, stage positions are unique and contiguous from zero.
/// The creation paths (default seeding and template instantiation) assign
/// positions in order; individual records are not re-validated against their
/// siblings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    id: StageId,
    project_id: ProjectId,
    name: StageName,
    position: u32,
}

/// Parameter object for reconstructing a persisted stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedStageData {
    /// Persisted stage identifier.
    pub id: StageId,
    /// Persisted owning project identifier.
    pub project_id: ProjectId,
    /// Persisted display name.
    pub name: StageName,
    /// Persisted zero-based column position.
    pub position: u32,
}

impl Stage {
    /// Creates a new stage at the given column position.
    #[must_use]
    pub fn new(project_id: ProjectId, name: StageName, position: u32) -> Self {
        Self {
            id: StageId::new(),
            project_id,
            name,
            position,
        }
    }

    /// Reconstructs a stage from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedStageData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            name: data.name,
            position: data.position,
        }
    }

    /// Returns the stage identifier.
    #[must_use]
    pub const fn id(&self) -> StageId {
        self.id
    }

    /// Returns the owning project identifier.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &StageName {
        &self.name
    }

    /// Returns the zero-based column position.
    #[must_use]
    pub const fn position(&self) -> u32 {
        self.position
    }
}
