//! Route definitions for the feedback resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::feedback;
use crate::state::AppState;

/// Feedback routes.
///
/// ```text
/// GET    /feedbacks        -> list_feedbacks
/// POST   /feedbacks        -> create_feedback
/// PUT    /feedbacks/{id}   -> update_feedback
/// DELETE /feedbacks/{id}   -> delete_feedback
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/feedbacks",
            get(feedback::list_feedbacks).post(feedback::create_feedback),
        )
        .route(
            "/feedbacks/{id}",
            put(feedback::update_feedback).delete(feedback::delete_feedback),
        )
}
