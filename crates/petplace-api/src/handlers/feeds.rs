//! Feed, comment, and like handlers

use axum::{extract::State, Json};
use petplace_service::{
    CommentResponse, CommentService, CreateCommentRequest, CreateFeedRequest, FeedResponse,
    FeedService, LikeService, LikeToggleResponse, PageResponse, UpdateCommentRequest,
    UpdateFeedRequest,
};

use crate::extractors::{AuthUser, CommentIdPath, FeedIdPath, Page, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Post a new feed
///
/// POST /feeds
pub async fn create_feed(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateFeedRequest>,
) -> ApiResult<Created<Json<FeedResponse>>> {
    let service = FeedService::new(state.service_context());
    let response = service.create_feed(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// List feeds, newest first
///
/// GET /feeds
pub async fn list_feeds(
    State(state): State<AppState>,
    _auth: AuthUser,
    page: Page,
) -> ApiResult<Json<PageResponse<FeedResponse>>> {
    let service = FeedService::new(state.service_context());
    let response = service.list_feeds(page.0).await?;
    Ok(Json(response))
}

/// List the most-liked feeds
///
/// GET /feeds/popular
pub async fn list_popular_feeds(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<FeedResponse>>> {
    let service = FeedService::new(state.service_context());
    let response = service.list_popular().await?;
    Ok(Json(response))
}

/// List feeds the current user has liked
///
/// GET /feeds/liked
pub async fn list_liked_feeds(
    State(state): State<AppState>,
    auth: AuthUser,
    page: Page,
) -> ApiResult<Json<PageResponse<FeedResponse>>> {
    let service = LikeService::new(state.service_context());
    let response = service.list_liked_feeds(auth.user_id, page.0).await?;
    Ok(Json(response))
}

/// Get a single feed, counting the view
///
/// GET /feeds/{feed_id}
pub async fn get_feed(
    State(state): State<AppState>,
    _auth: AuthUser,
    path: FeedIdPath,
) -> ApiResult<Json<FeedResponse>> {
    let service = FeedService::new(state.service_context());
    let response = service.get_feed(path.feed_id).await?;
    Ok(Json(response))
}

/// Edit a feed; author only
///
/// PATCH /feeds/{feed_id}
pub async fn update_feed(
    State(state): State<AppState>,
    auth: AuthUser,
    path: FeedIdPath,
    ValidatedJson(request): ValidatedJson<UpdateFeedRequest>,
) -> ApiResult<Json<FeedResponse>> {
    let service = FeedService::new(state.service_context());
    let response = service
        .update_feed(auth.user_id, path.feed_id, request)
        .await?;
    Ok(Json(response))
}

/// Delete a feed; author only
///
/// DELETE /feeds/{feed_id}
pub async fn delete_feed(
    State(state): State<AppState>,
    auth: AuthUser,
    path: FeedIdPath,
) -> ApiResult<NoContent> {
    let service = FeedService::new(state.service_context());
    service.delete_feed(auth.user_id, path.feed_id).await?;
    Ok(NoContent)
}

/// Comment on a feed (or reply to a comment)
///
/// POST /feeds/{feed_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    path: FeedIdPath,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let response = service
        .create_comment(auth.user_id, path.feed_id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// List a feed's comments with replies
///
/// GET /feeds/{feed_id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    _auth: AuthUser,
    path: FeedIdPath,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let response = service.list_comments(path.feed_id).await?;
    Ok(Json(response))
}

/// List the current user's own comments
///
/// GET /comments/me
pub async fn list_my_comments(
    State(state): State<AppState>,
    auth: AuthUser,
    page: Page,
) -> ApiResult<Json<PageResponse<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let response = service.list_my_comments(auth.user_id, page.0).await?;
    Ok(Json(response))
}

/// Edit a comment; author only
///
/// PATCH /comments/{comment_id}
pub async fn update_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    path: CommentIdPath,
    ValidatedJson(request): ValidatedJson<UpdateCommentRequest>,
) -> ApiResult<Json<CommentResponse>> {
    let service = CommentService::new(state.service_context());
    let response = service
        .update_comment(auth.user_id, path.comment_id, request.content)
        .await?;
    Ok(Json(response))
}

/// Delete a comment; author only
///
/// DELETE /comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    path: CommentIdPath,
) -> ApiResult<NoContent> {
    let service = CommentService::new(state.service_context());
    service.delete_comment(auth.user_id, path.comment_id).await?;
    Ok(NoContent)
}

/// Toggle the current user's like on a feed
///
/// POST /feeds/{feed_id}/likes
pub async fn toggle_like(
    State(state): State<AppState>,
    auth: AuthUser,
    path: FeedIdPath,
) -> ApiResult<Json<LikeToggleResponse>> {
    let service = LikeService::new(state.service_context());
    let response = service.toggle(auth.user_id, path.feed_id).await?;
    Ok(Json(response))
}
