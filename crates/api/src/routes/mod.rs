pub mod feedback;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /feedbacks            list, create
/// /feedbacks/{id}       update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(feedback::router())
}
