//! Integration tests for `FeedbackRepo` and `PgFeedbackStore` against a real
//! PostgreSQL database.
//!
//! Requires `DATABASE_URL`; run with `cargo test -p feedback-db -- --ignored`.

use sqlx::PgPool;
use feedback_core::feedback::SortDirection;
use feedback_db::models::feedback::NewFeedback;
use feedback_db::repositories::FeedbackRepo;
use feedback_db::store::{FeedbackStore, PgFeedbackStore};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_feedback(name: &str, comment: &str) -> NewFeedback {
    NewFeedback {
        name: name.to_string(),
        comment: comment.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Bootstrap
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_health_check_and_empty_table(pool: PgPool) {
    feedback_db::health_check(&pool).await.unwrap();

    let rows = FeedbackRepo::list(&pool, SortDirection::Desc).await.unwrap();
    assert!(rows.is_empty());
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_create_assigns_id_and_timestamps(pool: PgPool) {
    let row = FeedbackRepo::create(&pool, &new_feedback("Alice", "Great!"))
        .await
        .unwrap();

    assert!(row.id > 0);
    assert_eq!(row.name, "Alice");
    assert_eq!(row.comment, "Great!");
    assert_eq!(row.created_at, row.updated_at);

    let found = FeedbackRepo::find_by_id(&pool, row.id).await.unwrap();
    assert_eq!(found, Some(row));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_list_orders_by_created_at(pool: PgPool) {
    let first = FeedbackRepo::create(&pool, &new_feedback("Alice", "first"))
        .await
        .unwrap();
    let second = FeedbackRepo::create(&pool, &new_feedback("Bob", "second"))
        .await
        .unwrap();

    let asc = FeedbackRepo::list(&pool, SortDirection::Asc).await.unwrap();
    assert_eq!(
        asc.iter().map(|f| f.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );

    let desc = FeedbackRepo::list(&pool, SortDirection::Desc).await.unwrap();
    assert_eq!(
        desc.iter().map(|f| f.id).collect::<Vec<_>>(),
        vec![second.id, first.id]
    );
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_update_comment_only(pool: PgPool) {
    let created = FeedbackRepo::create(&pool, &new_feedback("Alice", "before"))
        .await
        .unwrap();

    let updated = FeedbackRepo::update_comment(&pool, created.id, "after")
        .await
        .unwrap()
        .expect("row should exist");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Alice");
    assert_eq!(updated.comment, "after");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_update_missing_row_returns_none(pool: PgPool) {
    let result = FeedbackRepo::update_comment(&pool, 999_999, "x").await.unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_delete_twice(pool: PgPool) {
    let created = FeedbackRepo::create(&pool, &new_feedback("Alice", "bye"))
        .await
        .unwrap();

    assert!(FeedbackRepo::delete(&pool, created.id).await.unwrap());
    assert!(!FeedbackRepo::delete(&pool, created.id).await.unwrap());
    assert!(FeedbackRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Store handle
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_pg_store_delegates_to_repo(pool: PgPool) {
    let store = PgFeedbackStore::new(pool);
    assert_eq!(store.backend(), "postgres");
    store.health_check().await.unwrap();

    let created = store.create(&new_feedback("Alice", "via store")).await.unwrap();
    let listed = store.list(SortDirection::Asc).await.unwrap();
    assert_eq!(listed, vec![created]);
}
