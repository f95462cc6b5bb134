//! Workflow template blueprints.
//!
//! Templates are read-only: the platform clones them into new projects but
//! never edits them through this domain. Template stages and tasks mirror
//! the shape of board stages and tasks, scoped to a template instead of a
//! project.

use super::{TemplateId, TemplateStageId, TemplateTaskId};
use crate::board::domain::{StageName, TaskPriority, TaskTitle};
use serde::{Deserialize, Serialize};

/// A reusable workflow blueprint of ordered stages and their tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    id: TemplateId,
    name: StageName,
    description: Option<String>,
}

impl Template {
    /// Creates a template blueprint.
    #[must_use]
    pub const fn new(id: TemplateId, name: StageName, description: Option<String>) -> Self {
        Self {
            id,
            name,
            description,
        }
    }

    /// Returns the template identifier.
    #[must_use]
    pub const fn id(&self) -> TemplateId {
        self.id
    }

    /// Returns the template name.
    #[must_use]
    pub const fn name(&self) -> &StageName {
        &self.name
    }

    /// Returns the template description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// An ordered stage column within a workflow template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateStage {
    id: TemplateStageId,
    template_id: TemplateId,
    name: StageName,
    position: u32,
}

impl TemplateStage {
    /// Creates a template stage at the given column position.
    #[must_use]
    pub const fn new(
        id: TemplateStageId,
        template_id: TemplateId,
        name: StageName,
        position: u32,
    ) -> Self {
        Self {
            id,
            template_id,
            name,
            position,
        }
    }

    /// Returns the template stage identifier.
    #[must_use]
    pub const fn id(&self) -> TemplateStageId {
        self.id
    }

    /// Returns the owning template identifier.
    #[must_use]
    pub const fn template_id(&self) -> TemplateId {
        self.template_id
    }

    /// Returns the display name cloned onto project stages.
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

/// A task blueprint within a template stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateTask {
    id: TemplateTaskId,
    stage_id: TemplateStageId,
    title: TaskTitle,
    position: u32,
    priority: TaskPriority,
}

impl TemplateTask {
    /// Creates a template task at the given position within its stage.
    #[must_use]
    pub const fn new(
        id: TemplateTaskId,
        stage_id: TemplateStageId,
        title: TaskTitle,
        position: u32,
        priority: TaskPriority,
    ) -> Self {
        Self {
            id,
            stage_id,
            title,
            position,
            priority,
        }
    }

    /// Returns the template task identifier.
    #[must_use]
    pub const fn id(&self) -> TemplateTaskId {
        self.id
    }

    /// Returns the owning template stage identifier.
    #[must_use]
    pub const fn stage_id(&self) -> TemplateStageId {
        self.stage_id
    }

    /// Returns the title cloned onto project tasks.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the zero-based position within the owning stage.
    #[must_use]
    pub const fn position(&self) -> u32 {
        self.position
    }

    /// Returns the priority cloned onto project tasks.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }
}
