//! Repository port for workflow template reads.
//!
//! Templates are read-only from the platform's perspective: this port
//! exposes only the lookups the instantiation algorithm needs. The task
//! lookup is scoped to an explicit stage set, so instantiation never reads
//! tasks outside the template being cloned.

use crate::project::domain::{Template, TemplateId, TemplateStage, TemplateStageId, TemplateTask};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for template repository operations.
pub type TemplateRepositoryResult<T> = Result<T, TemplateRepositoryError>;

/// Workflow template read contract.
#[async_trait]
pub trait TemplateRepository: Send + Sync {
    /// Finds a template by identifier.
    ///
    /// Returns `None` when the template does not exist.
    async fn find_by_id(&self, id: TemplateId) -> TemplateRepositoryResult<Option<Template>>;

    /// Returns a template's stages, ascending by column position.
    async fn list_stages(&self, template_id: TemplateId)
    -> TemplateRepositoryResult<Vec<TemplateStage>>;

    /// Returns the tasks belonging to any of the given template stages.
    ///
    /// Ordering across stages is unspecified; callers regroup by stage.
    async fn list_tasks_for_stages(
        &self,
        stage_ids: &[TemplateStageId],
    ) -> TemplateRepositoryResult<Vec<TemplateTask>>;
}

/// Errors returned by template repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TemplateRepositoryError {
    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TemplateRepositoryError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
