//! Feedback field validation and list ordering.
//!
//! Validation is limited to presence checks: a field is missing when it is
//! absent, empty, or whitespace-only. Values that pass are stored verbatim.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Entity name used in `NotFound` errors and log lines.
pub const ENTITY_FEEDBACK: &str = "Feedback";

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Require the author identity to be present.
pub fn validate_author_name(name: Option<&str>) -> Result<&str, CoreError> {
    require(name, "Author name is required")
}

/// Require the comment text to be present.
pub fn validate_comment(comment: Option<&str>) -> Result<&str, CoreError> {
    require(comment, "Comment is required")
}

fn require<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, CoreError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(CoreError::Validation(message.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Sort direction
// ---------------------------------------------------------------------------

/// Ordering of the feedback listing by creation time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    /// Newest first.
    #[default]
    Desc,
}

impl SortDirection {
    /// SQL keyword for this direction.
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("asc"),
            Self::Desc => f.write_str("desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            other => Err(format!(
                "Invalid sort direction '{other}'. Must be one of: asc, desc"
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
