//! PostgreSQL implementation of LikeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use petplace_core::error::DomainError;
use petplace_core::traits::{LikeRepository, RepoResult};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of LikeRepository
#[derive(Clone)]
pub struct PgLikeRepository {
    pool: PgPool,
}

impl PgLikeRepository {
    /// Create a new PgLikeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    #[instrument(skip(self))]
    async fn insert(&self, feed_id: i64, user_id: i64) -> RepoResult<()> {
        sqlx::query("INSERT INTO likes (feed_id, user_id) VALUES ($1, $2)")
            .bind(feed_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_unique_violation(e, || DomainError::DuplicateLike))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, feed_id: i64, user_id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM likes WHERE feed_id = $1 AND user_id = $2")
            .bind(feed_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn exists(&self, feed_id: i64, user_id: i64) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM likes WHERE feed_id = $1 AND user_id = $2)",
        )
        .bind(feed_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }
}
