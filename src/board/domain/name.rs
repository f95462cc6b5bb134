//! Validated display-name types for stages and tasks.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a stage name, matching the `VARCHAR(100)` column.
const MAX_STAGE_NAME_LENGTH: usize = 100;

/// Maximum length for a task title, matching the `VARCHAR(200)` column.
const MAX_TASK_TITLE_LENGTH: usize = 200;

/// Validated display name for a board stage (e.g. `To Do`, `In Review`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StageName(String);

impl StageName {
    /// Creates a validated stage name.
    ///
    /// The input is trimmed; interior whitespace and casing are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyStageName`] when the value is empty
    /// after trimming, or [`BoardDomainError::StageNameTooLong`] when it
    /// exceeds 100 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyStageName);
        }

        if trimmed.len() > MAX_STAGE_NAME_LENGTH {
            return Err(BoardDomainError::StageNameTooLong(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the stage name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StageName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated title for a board task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated task title.
    ///
    /// The input is trimmed; interior whitespace and casing are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] when the value is empty
    /// after trimming, or [`BoardDomainError::TaskTitleTooLong`] when it
    /// exceeds 200 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyTaskTitle);
        }

        if trimmed.len() > MAX_TASK_TITLE_LENGTH {
            return Err(BoardDomainError::TaskTitleTooLong(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the task title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
