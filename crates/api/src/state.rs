use std::sync::Arc;

use feedback_core::author::AuthorVerifier;
use feedback_db::store::FeedbackStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (everything is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Data-access handle, created once at startup.
    pub store: Arc<dyn FeedbackStore>,
    /// Ownership check applied before update and delete.
    pub verifier: Arc<dyn AuthorVerifier>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
