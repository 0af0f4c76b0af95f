//! Feed service

use tracing::{info, instrument, warn};

use petplace_core::traits::{FeedUpdate, NewFeed, PageQuery};
use petplace_core::DomainError;

use crate::dto::{CreateFeedRequest, FeedResponse, PageResponse, UpdateFeedRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Number of posts returned by the popular listing
const POPULAR_FEED_LIMIT: u32 = 10;

/// Feed service
pub struct FeedService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedService<'a> {
    /// Create a new FeedService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a feed post
    #[instrument(skip(self, request))]
    pub async fn create_feed(
        &self,
        user_id: i64,
        request: CreateFeedRequest,
    ) -> ServiceResult<FeedResponse> {
        let feed = self
            .ctx
            .feed_repo()
            .create(&NewFeed {
                user_id,
                content: request.content,
                image_url: request.image_url,
            })
            .await?;

        info!(user_id, feed_id = feed.id, "Feed created");
        Ok(FeedResponse::from(feed))
    }

    /// Get a single post, counting the view.
    ///
    /// The view bump is best-effort; a failed counter update must not hide
    /// the post.
    #[instrument(skip(self))]
    pub async fn get_feed(&self, feed_id: i64) -> ServiceResult<FeedResponse> {
        if let Err(e) = self.ctx.feed_repo().increment_view_count(feed_id).await {
            warn!(feed_id, error = %e, "Failed to bump view count");
        }

        let feed = self
            .ctx
            .feed_repo()
            .find_by_id(feed_id)
            .await?
            .ok_or(DomainError::FeedNotFound(feed_id))?;

        Ok(FeedResponse::from(feed))
    }

    /// List posts, newest first
    #[instrument(skip(self))]
    pub async fn list_feeds(&self, page: PageQuery) -> ServiceResult<PageResponse<FeedResponse>> {
        let feeds = self.ctx.feed_repo().list(&page).await?;
        Ok(PageResponse::new(
            feeds.into_iter().map(FeedResponse::from).collect(),
            page.page,
            page.size,
        ))
    }

    /// List posts by a single author, newest first
    #[instrument(skip(self))]
    pub async fn list_feeds_by_user(
        &self,
        user_id: i64,
        page: PageQuery,
    ) -> ServiceResult<PageResponse<FeedResponse>> {
        let feeds = self.ctx.feed_repo().list_by_user(user_id, &page).await?;
        Ok(PageResponse::new(
            feeds.into_iter().map(FeedResponse::from).collect(),
            page.page,
            page.size,
        ))
    }

    /// List the most-liked posts
    #[instrument(skip(self))]
    pub async fn list_popular(&self) -> ServiceResult<Vec<FeedResponse>> {
        let feeds = self.ctx.feed_repo().list_popular(POPULAR_FEED_LIMIT).await?;
        Ok(feeds.into_iter().map(FeedResponse::from).collect())
    }

    /// Update a post; only the author may do this
    #[instrument(skip(self, request))]
    pub async fn update_feed(
        &self,
        user_id: i64,
        feed_id: i64,
        request: UpdateFeedRequest,
    ) -> ServiceResult<FeedResponse> {
        self.check_authorship(user_id, feed_id).await?;

        let feed = self
            .ctx
            .feed_repo()
            .update(
                feed_id,
                &FeedUpdate {
                    content: request.content,
                    image_url: request.image_url,
                },
            )
            .await?;

        info!(user_id, feed_id, "Feed updated");
        Ok(FeedResponse::from(feed))
    }

    /// Delete a post; only the author may do this
    #[instrument(skip(self))]
    pub async fn delete_feed(&self, user_id: i64, feed_id: i64) -> ServiceResult<()> {
        self.check_authorship(user_id, feed_id).await?;
        self.ctx.feed_repo().soft_delete(feed_id).await?;

        info!(user_id, feed_id, "Feed deleted");
        Ok(())
    }

    async fn check_authorship(&self, user_id: i64, feed_id: i64) -> ServiceResult<()> {
        let feed = self
            .ctx
            .feed_repo()
            .find_by_id(feed_id)
            .await?
            .ok_or(DomainError::FeedNotFound(feed_id))?;

        if !feed.is_authored_by(user_id) {
            return Err(DomainError::NotResourceOwner.into());
        }
        Ok(())
    }
}
