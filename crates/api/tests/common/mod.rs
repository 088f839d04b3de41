#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use feedback_api::config::{ServerConfig, StoreConfig};
use feedback_api::router::build_app_router;
use feedback_api::state::AppState;
use feedback_core::author::ExactMatchVerifier;
use feedback_core::feedback::SortDirection;
use feedback_core::types::DbId;
use feedback_db::models::feedback::{Feedback, NewFeedback};
use feedback_db::store::{FeedbackStore, MemoryFeedbackStore};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        sort: SortDirection::Desc,
        store: StoreConfig::Memory,
    }
}

/// Build the full application router over the given store and config.
///
/// Uses the same [`build_app_router`] as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_app_with(store: Arc<dyn FeedbackStore>, config: ServerConfig) -> Router {
    let state = AppState {
        store,
        verifier: Arc::new(ExactMatchVerifier),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Router over a fresh in-memory store. Clone it to send several requests
/// against the same data.
pub fn build_test_app() -> Router {
    build_app_with(Arc::new(MemoryFeedbackStore::new()), test_config())
}

/// Router whose store is unreachable.
pub fn build_failing_app() -> Router {
    build_app_with(Arc::new(FailingStore::Unreachable), test_config())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn delete_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Failing store
// ---------------------------------------------------------------------------

/// A store that never produces a result. Each variant fails every call in
/// its own way.
pub enum FailingStore {
    /// Errors as if the database were down.
    Unreachable,
    /// Never completes.
    Hangs,
    /// Panics inside the handler.
    Panics,
}

impl FailingStore {
    async fn fail<T>(&self) -> Result<T, sqlx::Error> {
        match self {
            FailingStore::Unreachable => Err(sqlx::Error::Protocol(
                "connection refused: secret-host:5432".into(),
            )),
            FailingStore::Hangs => std::future::pending().await,
            FailingStore::Panics => panic!("store exploded at secret-host:5432"),
        }
    }
}

#[async_trait]
impl FeedbackStore for FailingStore {
    fn backend(&self) -> &'static str {
        "failing"
    }

    async fn list(&self, _order: SortDirection) -> Result<Vec<Feedback>, sqlx::Error> {
        self.fail().await
    }

    async fn find_by_id(&self, _id: DbId) -> Result<Option<Feedback>, sqlx::Error> {
        self.fail().await
    }

    async fn create(&self, _input: &NewFeedback) -> Result<Feedback, sqlx::Error> {
        self.fail().await
    }

    async fn update_comment(
        &self,
        _id: DbId,
        _comment: &str,
    ) -> Result<Option<Feedback>, sqlx::Error> {
        self.fail().await
    }

    async fn delete(&self, _id: DbId) -> Result<bool, sqlx::Error> {
        self.fail().await
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        self.fail().await
    }
}
