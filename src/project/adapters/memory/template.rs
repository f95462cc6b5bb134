//! In-memory repository for workflow template reads.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::project::{
    domain::{Template, TemplateId, TemplateStage, TemplateStageId, TemplateTask},
    ports::{TemplateRepository, TemplateRepositoryError, TemplateRepositoryResult},
};

/// Thread-safe in-memory template repository.
///
/// Templates are read-only through the port; fixtures seed them with
/// [`InMemoryTemplateRepository::seed`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryTemplateRepository {
    state: Arc<RwLock<InMemoryTemplateState>>,
}

#[derive(Debug, Default)]
struct InMemoryTemplateState {
    templates: HashMap<TemplateId, Template>,
    stages: Vec<TemplateStage>,
    tasks: Vec<TemplateTask>,
}

impl InMemoryTemplateRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a template blueprint with its stages and tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateRepositoryError::Persistence`] when the underlying
    /// lock is poisoned.
    pub fn seed(
        &self,
        template: Template,
        stages: Vec<TemplateStage>,
        tasks: Vec<TemplateTask>,
    ) -> TemplateRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state.templates.insert(template.id(), template);
        state.stages.extend(stages);
        state.tasks.extend(tasks);
        Ok(())
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> TemplateRepositoryError {
    TemplateRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TemplateRepository for InMemoryTemplateRepository {
    async fn find_by_id(&self, id: TemplateId) -> TemplateRepositoryResult<Option<Template>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.templates.get(&id).cloned())
    }

    async fn list_stages(
        &self,
        template_id: TemplateId,
    ) -> TemplateRepositoryResult<Vec<TemplateStage>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut stages: Vec<TemplateStage> = state
            .stages
            .iter()
            .filter(|stage| stage.template_id() == template_id)
            .cloned()
            .collect();
        stages.sort_by_key(TemplateStage::position);
        Ok(stages)
    }

    async fn list_tasks_for_stages(
        &self,
        stage_ids: &[TemplateStageId],
    ) -> TemplateRepositoryResult<Vec<TemplateTask>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let tasks = state
            .tasks
            .iter()
            .filter(|task| stage_ids.contains(&task.stage_id()))
            .cloned()
            .collect();
        Ok(tasks)
    }
}
