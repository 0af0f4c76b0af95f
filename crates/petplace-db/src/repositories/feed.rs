//! PostgreSQL implementation of FeedRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use petplace_core::entities::Feed;
use petplace_core::traits::{FeedRepository, FeedUpdate, NewFeed, PageQuery, RepoResult};

use crate::models::FeedModel;

use super::error::{feed_not_found, map_db_error};

const FEED_COLUMNS: &str = "id, user_id, content, image_url, view_count, like_count, \
                            created_at, updated_at, deleted_at";

/// PostgreSQL implementation of FeedRepository
#[derive(Clone)]
pub struct PgFeedRepository {
    pool: PgPool,
}

impl PgFeedRepository {
    /// Create a new PgFeedRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedRepository for PgFeedRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Feed>> {
        let result = sqlx::query_as::<_, FeedModel>(&format!(
            "SELECT {FEED_COLUMNS} FROM feeds WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Feed::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, page: &PageQuery) -> RepoResult<Vec<Feed>> {
        let models = sqlx::query_as::<_, FeedModel>(&format!(
            r"
            SELECT {FEED_COLUMNS} FROM feeds
            WHERE deleted_at IS NULL
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Feed::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_by_user(&self, user_id: i64, page: &PageQuery) -> RepoResult<Vec<Feed>> {
        let models = sqlx::query_as::<_, FeedModel>(&format!(
            r"
            SELECT {FEED_COLUMNS} FROM feeds
            WHERE user_id = $1 AND deleted_at IS NULL
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "
        ))
        .bind(user_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Feed::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_popular(&self, limit: u32) -> RepoResult<Vec<Feed>> {
        let models = sqlx::query_as::<_, FeedModel>(&format!(
            r"
            SELECT {FEED_COLUMNS} FROM feeds
            WHERE deleted_at IS NULL
            ORDER BY like_count DESC, created_at DESC
            LIMIT $1
            "
        ))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Feed::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_liked_by(&self, user_id: i64, page: &PageQuery) -> RepoResult<Vec<Feed>> {
        let models = sqlx::query_as::<_, FeedModel>(
            r"
            SELECT f.id, f.user_id, f.content, f.image_url, f.view_count, f.like_count,
                   f.created_at, f.updated_at, f.deleted_at
            FROM feeds f
            JOIN likes l ON l.feed_id = f.id
            WHERE l.user_id = $1 AND f.deleted_at IS NULL
            ORDER BY l.created_at DESC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(user_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Feed::from).collect())
    }

    #[instrument(skip(self, new_feed))]
    async fn create(&self, new_feed: &NewFeed) -> RepoResult<Feed> {
        let model = sqlx::query_as::<_, FeedModel>(&format!(
            r"
            INSERT INTO feeds (user_id, content, image_url)
            VALUES ($1, $2, $3)
            RETURNING {FEED_COLUMNS}
            "
        ))
        .bind(new_feed.user_id)
        .bind(&new_feed.content)
        .bind(&new_feed.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Feed::from(model))
    }

    #[instrument(skip(self, update))]
    async fn update(&self, id: i64, update: &FeedUpdate) -> RepoResult<Feed> {
        let model = sqlx::query_as::<_, FeedModel>(&format!(
            r"
            UPDATE feeds
            SET content = COALESCE($2, content),
                image_url = COALESCE($3, image_url),
                updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING {FEED_COLUMNS}
            "
        ))
        .bind(id)
        .bind(&update.content)
        .bind(&update.image_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model.map(Feed::from).ok_or_else(|| feed_not_found(id))
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            "UPDATE feeds SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(feed_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn increment_view_count(&self, id: i64) -> RepoResult<()> {
        sqlx::query(
            "UPDATE feeds SET view_count = view_count + 1 WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn recount_likes(&self, id: i64) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            UPDATE feeds
            SET like_count = (SELECT COUNT(*) FROM likes WHERE feed_id = $1)
            WHERE id = $1
            RETURNING like_count
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        count.ok_or_else(|| feed_not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgFeedRepository>();
    }
}
