//! Notification and device token handlers

use axum::{extract::State, Json};
use petplace_service::{
    NotificationResponse, NotificationService, PageResponse, RegisterDeviceRequest,
    UnreadCountResponse,
};
use serde::Serialize;

use crate::extractors::{AuthUser, NotificationIdPath, Page, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Response body for the bulk mark-read operation
#[derive(Debug, Serialize)]
pub struct MarkAllReadResponse {
    pub updated: u64,
}

/// List the current user's notifications, newest first
///
/// GET /notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
    page: Page,
) -> ApiResult<Json<PageResponse<NotificationResponse>>> {
    let service = NotificationService::new(state.service_context());
    let response = service.list(auth.user_id, page.0).await?;
    Ok(Json(response))
}

/// Mark one notification read; recipient only
///
/// PATCH /notifications/{notification_id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    path: NotificationIdPath,
) -> ApiResult<NoContent> {
    let service = NotificationService::new(state.service_context());
    service.mark_read(auth.user_id, path.notification_id).await?;
    Ok(NoContent)
}

/// Delete one notification; recipient only
///
/// DELETE /notifications/{notification_id}
pub async fn delete_notification(
    State(state): State<AppState>,
    auth: AuthUser,
    path: NotificationIdPath,
) -> ApiResult<NoContent> {
    let service = NotificationService::new(state.service_context());
    service.delete(auth.user_id, path.notification_id).await?;
    Ok(NoContent)
}

/// Mark all of the current user's notifications read
///
/// PATCH /notifications/read-all
pub async fn mark_all_read(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<MarkAllReadResponse>> {
    let service = NotificationService::new(state.service_context());
    let updated = service.mark_all_read(auth.user_id).await?;
    Ok(Json(MarkAllReadResponse { updated }))
}

/// Count unread notifications
///
/// GET /notifications/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UnreadCountResponse>> {
    let service = NotificationService::new(state.service_context());
    let response = service.unread_count(auth.user_id).await?;
    Ok(Json(response))
}

/// Register a device token for push delivery
///
/// POST /notifications/devices
pub async fn register_device(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<RegisterDeviceRequest>,
) -> ApiResult<NoContent> {
    let service = NotificationService::new(state.service_context());
    service.register_device(auth.user_id, &request.token).await?;
    Ok(NoContent)
}

/// Remove a device token
///
/// DELETE /notifications/devices
pub async fn unregister_device(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<RegisterDeviceRequest>,
) -> ApiResult<NoContent> {
    let service = NotificationService::new(state.service_context());
    service
        .unregister_device(auth.user_id, &request.token)
        .await?;
    Ok(NoContent)
}
