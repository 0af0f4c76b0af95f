//! Like service
//!
//! Likes toggle: liking an already-liked feed removes the like. The unique
//! constraint on (feed_id, user_id) makes concurrent toggles safe, and the
//! denormalized counter is recomputed from the likes table after every
//! change.

use serde_json::json;
use tracing::{info, instrument};

use petplace_core::entities::{NotificationType, RefType};
use petplace_core::traits::PageQuery;
use petplace_core::DomainError;

use crate::dto::{FeedResponse, LikeToggleResponse, PageResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::notification::NotificationService;

/// Like service
pub struct LikeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LikeService<'a> {
    /// Create a new LikeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle the user's like on a feed
    #[instrument(skip(self))]
    pub async fn toggle(&self, user_id: i64, feed_id: i64) -> ServiceResult<LikeToggleResponse> {
        let feed = self
            .ctx
            .feed_repo()
            .find_by_id(feed_id)
            .await?
            .ok_or(DomainError::FeedNotFound(feed_id))?;

        let liked = match self.ctx.like_repo().insert(feed_id, user_id).await {
            Ok(()) => true,
            Err(DomainError::DuplicateLike) => {
                self.ctx.like_repo().delete(feed_id, user_id).await?;
                false
            }
            Err(e) => return Err(ServiceError::from(e)),
        };

        let like_count = self.ctx.feed_repo().recount_likes(feed_id).await?;

        info!(user_id, feed_id, liked, like_count, "Like toggled");

        if liked && feed.user_id != user_id {
            NotificationService::new(self.ctx)
                .notify(
                    feed.user_id,
                    NotificationType::Like,
                    RefType::Feed,
                    feed_id,
                    "Someone liked your post".to_string(),
                    Some(json!({ "feed_id": feed_id })),
                )
                .await;
        }

        Ok(LikeToggleResponse { liked, like_count })
    }

    /// Whether the user has liked a feed
    #[instrument(skip(self))]
    pub async fn has_liked(&self, user_id: i64, feed_id: i64) -> ServiceResult<bool> {
        self.ctx
            .like_repo()
            .exists(feed_id, user_id)
            .await
            .map_err(Into::into)
    }

    /// Feeds the user has liked, most recently liked first
    #[instrument(skip(self))]
    pub async fn list_liked_feeds(
        &self,
        user_id: i64,
        page: PageQuery,
    ) -> ServiceResult<PageResponse<FeedResponse>> {
        let feeds = self.ctx.feed_repo().list_liked_by(user_id, &page).await?;
        Ok(PageResponse::new(
            feeds.into_iter().map(FeedResponse::from).collect(),
            page.page,
            page.size,
        ))
    }
}
