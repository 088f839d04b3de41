//! Shared response body types for API handlers.
//!
//! Feedback records are returned bare (no envelope); operations without a
//! record to return reply with a [`MessageResponse`].

use serde::Serialize;

/// `{ "message": "..." }` confirmation body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
