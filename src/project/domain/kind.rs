//! Project category.

use super::ParseProjectKindError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of agency work a project tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectKind {
    /// A time-bound marketing campaign.
    Campaign,
    /// Content production (copy, photo, video).
    Content,
    /// Website or landing-page build.
    Web,
    /// Brand identity work.
    Branding,
    /// Ongoing retainer engagement.
    Retainer,
}

impl ProjectKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Campaign => "campaign",
            Self::Content => "content",
            Self::Web => "web",
            Self::Branding => "branding",
            Self::Retainer => "retainer",
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProjectKind {
    type Error = ParseProjectKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "campaign" => Ok(Self::Campaign),
            "content" => Ok(Self::Content),
            "web" => Ok(Self::Web),
            "branding" => Ok(Self::Branding),
            "retainer" => Ok(Self::Retainer),
            _ => Err(ParseProjectKindError(value.to_owned())),
        }
    }
}
