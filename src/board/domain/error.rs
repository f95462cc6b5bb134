//! Error types for board domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The stage name is empty after trimming.
    #[error("stage name must not be empty")]
    EmptyStageName,

    /// The stage name exceeds the 100-character storage limit.
    #[error("stage name exceeds 100 character limit: {0}")]
    StageNameTooLong(String),

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The task title exceeds the 200-character storage limit.
    #[error("task title exceeds 200 character limit: {0}")]
    TaskTitleTooLong(String),

    /// The blocked reason is empty after trimming.
    #[error("blocked reason must not be empty when a task is blocked")]
    EmptyBlockedReason,
}

/// Error returned while parsing task priority from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);
