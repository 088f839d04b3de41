//! Data-access handle for feedback records.
//!
//! Handlers depend on [`FeedbackStore`] rather than on a pool directly. The
//! process builds one store at startup and shares it as
//! `Arc<dyn FeedbackStore>` through application state.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;
use feedback_core::feedback::SortDirection;
use feedback_core::types::{DbId, Timestamp};

use crate::models::feedback::{Feedback, NewFeedback};
use crate::repositories::FeedbackRepo;
use crate::DbPool;

/// Async CRUD surface over feedback records.
///
/// Each method is a single store call; atomicity of individual operations is
/// the backend's responsibility.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;

    async fn list(&self, order: SortDirection) -> Result<Vec<Feedback>, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Feedback>, sqlx::Error>;

    async fn create(&self, input: &NewFeedback) -> Result<Feedback, sqlx::Error>;

    /// Returns `None` if the record does not exist.
    async fn update_comment(
        &self,
        id: DbId,
        comment: &str,
    ) -> Result<Option<Feedback>, sqlx::Error>;

    /// Returns `true` if a record was removed.
    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;

    async fn health_check(&self) -> Result<(), sqlx::Error>;
}

// ---------------------------------------------------------------------------
// PostgreSQL
// ---------------------------------------------------------------------------

/// [`FeedbackStore`] backed by a PostgreSQL pool.
#[derive(Clone)]
pub struct PgFeedbackStore {
    pool: DbPool,
}

impl PgFeedbackStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedbackStore for PgFeedbackStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn list(&self, order: SortDirection) -> Result<Vec<Feedback>, sqlx::Error> {
        FeedbackRepo::list(&self.pool, order).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Feedback>, sqlx::Error> {
        FeedbackRepo::find_by_id(&self.pool, id).await
    }

    async fn create(&self, input: &NewFeedback) -> Result<Feedback, sqlx::Error> {
        FeedbackRepo::create(&self.pool, input).await
    }

    async fn update_comment(
        &self,
        id: DbId,
        comment: &str,
    ) -> Result<Option<Feedback>, sqlx::Error> {
        FeedbackRepo::update_comment(&self.pool, id, comment).await
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        FeedbackRepo::delete(&self.pool, id).await
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

#[derive(Default)]
struct MemoryInner {
    next_id: DbId,
    /// Latest timestamp handed out; keeps creation order monotonic.
    clock: Timestamp,
    rows: BTreeMap<DbId, Feedback>,
}

/// Process-local [`FeedbackStore`] for development and tests.
///
/// Ids start at 1 and are never reused. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryFeedbackStore {
    inner: RwLock<MemoryInner>,
}

impl MemoryFeedbackStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FeedbackStore for MemoryFeedbackStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn list(&self, order: SortDirection) -> Result<Vec<Feedback>, sqlx::Error> {
        let inner = self.inner.read().await;
        let mut rows: Vec<Feedback> = inner.rows.values().cloned().collect();
        rows.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        if order == SortDirection::Desc {
            rows.reverse();
        }
        Ok(rows)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Feedback>, sqlx::Error> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn create(&self, input: &NewFeedback) -> Result<Feedback, sqlx::Error> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let now = Utc::now().max(inner.clock);
        inner.clock = now;
        let row = Feedback {
            id: inner.next_id,
            name: input.name.clone(),
            comment: input.comment.clone(),
            created_at: now,
            updated_at: now,
        };
        inner.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update_comment(
        &self,
        id: DbId,
        comment: &str,
    ) -> Result<Option<Feedback>, sqlx::Error> {
        let mut inner = self.inner.write().await;
        Ok(inner.rows.get_mut(&id).map(|row| {
            row.comment = comment.to_string();
            // Strictly later, at the microsecond precision PostgreSQL keeps.
            row.updated_at = Utc::now().max(row.updated_at + Duration::microseconds(1));
            row.clone()
        }))
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        Ok(self.inner.write().await.rows.remove(&id).is_some())
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}
