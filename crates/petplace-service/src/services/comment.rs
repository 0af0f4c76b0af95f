//! Comment service
//!
//! Comments support a single level of nesting: a reply's parent must be a
//! top-level comment on the same feed.

use serde_json::json;
use tracing::{info, instrument};

use petplace_core::entities::{NotificationType, RefType};
use petplace_core::traits::{NewComment, PageQuery};
use petplace_core::DomainError;

use crate::dto::{CommentResponse, CreateCommentRequest, PageResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::notification::NotificationService;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a comment or reply on a feed
    #[instrument(skip(self, request))]
    pub async fn create_comment(
        &self,
        user_id: i64,
        feed_id: i64,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let feed = self
            .ctx
            .feed_repo()
            .find_by_id(feed_id)
            .await?
            .ok_or(DomainError::FeedNotFound(feed_id))?;

        let mut reply_to: Option<i64> = None;
        if let Some(parent_id) = request.parent_id {
            let parent = self
                .ctx
                .comment_repo()
                .find_by_id(parent_id)
                .await?
                .ok_or(DomainError::CommentNotFound(parent_id))?;

            if parent.feed_id != feed_id {
                return Err(ServiceError::validation(
                    "Parent comment belongs to a different feed",
                ));
            }
            if parent.is_reply() {
                return Err(DomainError::ReplyTooDeep.into());
            }
            reply_to = Some(parent.user_id);
        }

        let comment = self
            .ctx
            .comment_repo()
            .create(&NewComment {
                feed_id,
                user_id,
                parent_id: request.parent_id,
                content: request.content,
            })
            .await?;

        info!(user_id, feed_id, comment_id = comment.id, "Comment created");

        let notifier = NotificationService::new(self.ctx);
        let data = Some(json!({ "feed_id": feed_id, "comment_id": comment.id }));

        match reply_to {
            // Replies notify the parent comment's author
            Some(parent_author) if parent_author != user_id => {
                notifier
                    .notify(
                        parent_author,
                        NotificationType::Reply,
                        RefType::Comment,
                        comment.id,
                        "Someone replied to your comment".to_string(),
                        data,
                    )
                    .await;
            }
            // Top-level comments notify the feed's author
            None if feed.user_id != user_id => {
                notifier
                    .notify(
                        feed.user_id,
                        NotificationType::Comment,
                        RefType::Feed,
                        feed_id,
                        "Someone commented on your post".to_string(),
                        data,
                    )
                    .await;
            }
            _ => {}
        }

        Ok(CommentResponse::from(comment))
    }

    /// List comments on a feed, oldest first
    #[instrument(skip(self))]
    pub async fn list_comments(&self, feed_id: i64) -> ServiceResult<Vec<CommentResponse>> {
        // 404 for comments on a missing or deleted feed
        self.ctx
            .feed_repo()
            .find_by_id(feed_id)
            .await?
            .ok_or(DomainError::FeedNotFound(feed_id))?;

        let comments = self.ctx.comment_repo().list_by_feed(feed_id).await?;
        Ok(comments.into_iter().map(CommentResponse::from).collect())
    }

    /// List the user's own comments, newest first
    #[instrument(skip(self))]
    pub async fn list_my_comments(
        &self,
        user_id: i64,
        page: PageQuery,
    ) -> ServiceResult<PageResponse<CommentResponse>> {
        let comments = self.ctx.comment_repo().list_by_user(user_id, &page).await?;
        Ok(PageResponse::new(
            comments.into_iter().map(CommentResponse::from).collect(),
            page.page,
            page.size,
        ))
    }

    /// Edit a comment; only the author may do this
    #[instrument(skip(self, content))]
    pub async fn update_comment(
        &self,
        user_id: i64,
        comment_id: i64,
        content: String,
    ) -> ServiceResult<CommentResponse> {
        self.check_authorship(user_id, comment_id).await?;

        let comment = self
            .ctx
            .comment_repo()
            .update_content(comment_id, &content)
            .await?;

        info!(user_id, comment_id, "Comment updated");
        Ok(CommentResponse::from(comment))
    }

    /// Delete a comment; only the author may do this
    #[instrument(skip(self))]
    pub async fn delete_comment(&self, user_id: i64, comment_id: i64) -> ServiceResult<()> {
        self.check_authorship(user_id, comment_id).await?;
        self.ctx.comment_repo().soft_delete(comment_id).await?;

        info!(user_id, comment_id, "Comment deleted");
        Ok(())
    }

    async fn check_authorship(&self, user_id: i64, comment_id: i64) -> ServiceResult<()> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or(DomainError::CommentNotFound(comment_id))?;

        if comment.user_id != user_id {
            return Err(DomainError::NotResourceOwner.into());
        }
        Ok(())
    }
}
