mod models;

pub use models::*;

use std::str::FromStr;
use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

pub type DbPool = Arc<SqlitePool>;

pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(Arc::new(pool))
}

/// Create the reviews table if it does not exist yet. Idempotent; called once
/// at startup.
pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS reviews (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            request_id TEXT NOT NULL,
            user_id TEXT NOT NULL,
            review_text TEXT NOT NULL,
            sentiment TEXT NOT NULL,
            confidence REAL NOT NULL,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("reviews table checked/created");
    Ok(())
}

pub async fn insert_review(
    pool: &SqlitePool,
    request_id: &str,
    user_id: &str,
    review_text: &str,
    sentiment: &str,
    confidence: f64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO reviews (request_id, user_id, review_text, sentiment, confidence)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(request_id)
    .bind(user_id)
    .bind(review_text)
    .bind(sentiment)
    .bind(confidence)
    .execute(pool)
    .await
    .map_err(|e| {
        tracing::error!(request_id, "failed to insert review: {}", e);
        e
    })?;

    tracing::info!(request_id, user_id, sentiment, confidence, "inserted review");
    Ok(())
}

pub async fn list_reviews(pool: &SqlitePool) -> Result<Vec<ReviewRecord>, sqlx::Error> {
    sqlx::query_as::<_, ReviewRecord>("SELECT * FROM reviews ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn list_reviews_for_user(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Vec<ReviewRecord>, sqlx::Error> {
    sqlx::query_as::<_, ReviewRecord>("SELECT * FROM reviews WHERE user_id = ? ORDER BY id")
        .bind(user_id)
        .fetch_all(pool)
        .await
}

pub async fn count_reviews(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reviews")
        .fetch_one(pool)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_pool() -> (DbPool, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite:{}", dir.path().join("test.db").display());
        let pool = create_pool(&url).await.unwrap();
        create_schema(&pool).await.unwrap();
        (pool, dir)
    }

    #[tokio::test]
    async fn schema_creation_is_idempotent() {
        let (pool, _dir) = test_pool().await;
        create_schema(&pool).await.unwrap();

        insert_review(&pool, "r1", "u1", "fine", "neutral", 0.0)
            .await
            .unwrap();
        assert_eq!(count_reviews(&pool).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn insert_and_list_round_trip() {
        let (pool, _dir) = test_pool().await;

        insert_review(&pool, "r1", "u1", "I love it", "positive", 0.67)
            .await
            .unwrap();
        insert_review(&pool, "r2", "u2", "I hate it", "negative", 0.57)
            .await
            .unwrap();

        let rows = list_reviews(&pool).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].request_id, "r1");
        assert_eq!(rows[0].sentiment, "positive");
        assert!((rows[0].confidence - 0.67).abs() < 1e-9);
        assert_eq!(rows[1].user_id, "u2");
    }

    #[tokio::test]
    async fn user_filter_only_returns_matching_rows() {
        let (pool, _dir) = test_pool().await;

        insert_review(&pool, "r1", "alice", "great", "positive", 0.6)
            .await
            .unwrap();
        insert_review(&pool, "r2", "bob", "bad", "negative", 0.5)
            .await
            .unwrap();
        insert_review(&pool, "r3", "alice", "ok", "neutral", 0.0)
            .await
            .unwrap();

        let rows = list_reviews_for_user(&pool, "alice").await.unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.user_id == "alice"));

        let rows = list_reviews_for_user(&pool, "carol").await.unwrap();
        assert!(rows.is_empty());
    }
}
