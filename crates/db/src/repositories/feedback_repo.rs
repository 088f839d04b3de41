//! Repository for the `feedbacks` table.

use sqlx::PgPool;
use feedback_core::feedback::SortDirection;
use feedback_core::types::DbId;

use crate::models::feedback::{Feedback, NewFeedback};

/// Column list for feedbacks queries.
const COLUMNS: &str = "id, name, comment, created_at, updated_at";

/// Provides CRUD operations for feedback records.
pub struct FeedbackRepo;

impl FeedbackRepo {
    /// List all feedback ordered by creation time, ties broken by id.
    pub async fn list(pool: &PgPool, order: SortDirection) -> Result<Vec<Feedback>, sqlx::Error> {
        let dir = order.as_sql();
        let query =
            format!("SELECT {COLUMNS} FROM feedbacks ORDER BY created_at {dir}, id {dir}");
        sqlx::query_as::<_, Feedback>(&query).fetch_all(pool).await
    }

    /// Find a feedback record by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Feedback>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM feedbacks WHERE id = $1");
        sqlx::query_as::<_, Feedback>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new feedback record, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewFeedback) -> Result<Feedback, sqlx::Error> {
        let query = format!(
            "INSERT INTO feedbacks (name, comment)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(&input.name)
            .bind(&input.comment)
            .fetch_one(pool)
            .await
    }

    /// Overwrite the comment of a record and bump `updated_at`.
    ///
    /// Returns `None` if no row has the given ID.
    pub async fn update_comment(
        pool: &PgPool,
        id: DbId,
        comment: &str,
    ) -> Result<Option<Feedback>, sqlx::Error> {
        let query = format!(
            "UPDATE feedbacks SET
                comment = $2,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(id)
            .bind(comment)
            .fetch_optional(pool)
            .await
    }

    /// Delete a feedback record by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM feedbacks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
