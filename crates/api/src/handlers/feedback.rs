//! Handlers for the feedback resource.
//!
//! Every mutating request carries a caller-supplied `name`. Update and delete
//! pass it through the configured [`AuthorVerifier`] before touching the
//! store.
//!
//! [`AuthorVerifier`]: feedback_core::author::AuthorVerifier

use axum::body::Bytes;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::de::DeserializeOwned;

use feedback_core::error::CoreError;
use feedback_core::feedback::{validate_author_name, validate_comment, ENTITY_FEEDBACK};
use feedback_core::types::DbId;
use feedback_db::models::feedback::{
    CreateFeedback, DeleteFeedback, NewFeedback, UpdateFeedback,
};

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ENTITY_FEEDBACK,
        id,
    })
}

/// Parse an optional JSON body; an empty body yields `T::default()`.
fn parse_optional_json<T: DeserializeOwned + Default>(body: &Bytes) -> AppResult<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))
}

/// GET /feedbacks
///
/// List all feedback ordered by creation time in the configured direction.
pub async fn list_feedbacks(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let feedbacks = state.store.list(state.config.sort).await?;
    Ok(Json(feedbacks))
}

/// POST /feedbacks
///
/// Create a feedback record. Both `name` and `comment` are required.
pub async fn create_feedback(
    State(state): State<AppState>,
    payload: Result<Json<CreateFeedback>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let name = validate_author_name(input.name.as_deref())?;
    let comment = validate_comment(input.comment.as_deref())?;

    let feedback = state
        .store
        .create(&NewFeedback {
            name: name.to_string(),
            comment: comment.to_string(),
        })
        .await?;

    tracing::info!(
        feedback_id = feedback.id,
        author = %feedback.name,
        "Feedback created"
    );

    Ok((StatusCode::CREATED, Json(feedback)))
}

/// PUT /feedbacks/{id}
///
/// Overwrite the comment of a feedback record owned by the caller.
pub async fn update_feedback(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<UpdateFeedback>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path?;
    let Json(input) = payload?;
    let comment = validate_comment(input.comment.as_deref())?;

    let existing = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    if let Err(err) = state.verifier.verify(&existing.name, input.name.as_deref()) {
        tracing::warn!(feedback_id = id, "Feedback update rejected: author mismatch");
        return Err(err.into());
    }

    // The row can disappear between the lookup and the write.
    let feedback = state
        .store
        .update_comment(id, comment)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(feedback_id = id, "Feedback updated");

    Ok(Json(feedback))
}

/// DELETE /feedbacks/{id}
///
/// Delete a feedback record owned by the caller. The body `{ "name": ... }`
/// is optional, but without it the ownership check cannot pass.
pub async fn delete_feedback(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path?;
    let input: DeleteFeedback = parse_optional_json(&body)?;

    let existing = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    if let Err(err) = state.verifier.verify(&existing.name, input.name.as_deref()) {
        tracing::warn!(feedback_id = id, "Feedback delete rejected: author mismatch");
        return Err(err.into());
    }

    if !state.store.delete(id).await? {
        return Err(not_found(id));
    }

    tracing::info!(feedback_id = id, "Feedback deleted");

    Ok(Json(MessageResponse {
        message: "Feedback deleted",
    }))
}
