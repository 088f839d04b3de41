//! Feedback model and request DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use feedback_core::types::{DbId, Timestamp};

/// A row from the `feedbacks` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: DbId,
    pub name: String,
    pub comment: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for `POST /feedbacks`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateFeedback {
    pub name: Option<String>,
    pub comment: Option<String>,
}

/// Request body for `PUT /feedbacks/{id}`.
///
/// `name` is the caller's claimed author identity; only `comment` is written.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateFeedback {
    pub name: Option<String>,
    pub comment: Option<String>,
}

/// Optional request body for `DELETE /feedbacks/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteFeedback {
    pub name: Option<String>,
}

/// Validated insert payload.
#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub name: String,
    pub comment: String,
}
