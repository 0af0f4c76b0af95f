//! User handlers
//!
//! Endpoints for profile management, password changes, and public profiles.

use axum::{
    extract::{Path, State},
    Json,
};
use petplace_service::{
    AvailabilityResponse, ChangePasswordRequest, FeedResponse, FeedService, PageResponse,
    PublicUserResponse, UpdateProfileRequest, UserResponse, UserService,
};

use crate::extractors::{AuthUser, Page, UserIdPath, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Get the current user's profile
///
/// GET /users/me
pub async fn get_me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_me(auth.user_id).await?;
    Ok(Json(response))
}

/// Check whether a username is taken (no auth, used before signup)
///
/// GET /users/check-username/{username}
pub async fn check_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<AvailabilityResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.check_username(&username).await?;
    Ok(Json(response))
}

/// Check whether a nickname is taken (no auth, used before signup)
///
/// GET /users/check-nickname/{nickname}
pub async fn check_nickname(
    State(state): State<AppState>,
    Path(nickname): Path<String>,
) -> ApiResult<Json<AvailabilityResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.check_nickname(&nickname).await?;
    Ok(Json(response))
}

/// Update the current user's profile
///
/// PATCH /users/me
pub async fn update_me(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_profile(auth.user_id, request).await?;
    Ok(Json(response))
}

/// Change the current user's password
///
/// PUT /users/me/password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<ChangePasswordRequest>,
) -> ApiResult<NoContent> {
    let service = UserService::new(state.service_context());
    service.change_password(auth.user_id, request).await?;
    Ok(NoContent)
}

/// Soft-delete the current user's account
///
/// DELETE /users/me
pub async fn delete_me(State(state): State<AppState>, auth: AuthUser) -> ApiResult<NoContent> {
    let service = UserService::new(state.service_context());
    service.delete_account(auth.user_id).await?;
    Ok(NoContent)
}

/// Get another user's public profile
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    path: UserIdPath,
) -> ApiResult<Json<PublicUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_user(path.user_id).await?;
    Ok(Json(response))
}

/// List a user's feeds
///
/// GET /users/{user_id}/feeds
pub async fn list_user_feeds(
    State(state): State<AppState>,
    _auth: AuthUser,
    path: UserIdPath,
    page: Page,
) -> ApiResult<Json<PageResponse<FeedResponse>>> {
    let service = FeedService::new(state.service_context());
    let response = service.list_feeds_by_user(path.user_id, page.0).await?;
    Ok(Json(response))
}
