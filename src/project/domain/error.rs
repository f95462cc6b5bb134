//! Error types for project domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing project domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyProjectName,

    /// The project name exceeds the 200-character storage limit.
    #[error("project name exceeds 200 character limit: {0}")]
    ProjectNameTooLong(String),

    /// The target date falls before the start date.
    #[error("target date {target} falls before start date {start}")]
    TargetBeforeStart {
        /// Requested start date.
        start: chrono::NaiveDate,
        /// Requested target date.
        target: chrono::NaiveDate,
    },
}

/// Error returned while parsing project status from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown project status: {0}")]
pub struct ParseProjectStatusError(pub String);

/// Error returned while parsing project kind from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown project kind: {0}")]
pub struct ParseProjectKindError(pub String);
