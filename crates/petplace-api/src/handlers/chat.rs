//! Direct chat handlers

use axum::{extract::State, Json};
use petplace_service::{
    ChatMessageResponse, ChatRoomResponse, ChatService, OpenChatRoomRequest, PageResponse,
    SendMessageRequest,
};

use crate::extractors::{AuthUser, Page, RoomIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Open (or return) the room with another user
///
/// POST /chat/rooms
pub async fn open_room(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<OpenChatRoomRequest>,
) -> ApiResult<Json<ChatRoomResponse>> {
    let service = ChatService::new(state.service_context());
    let response = service.open_room(auth.user_id, request.other_user_id).await?;
    Ok(Json(response))
}

/// List the current user's chat rooms
///
/// GET /chat/rooms
pub async fn list_rooms(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<ChatRoomResponse>>> {
    let service = ChatService::new(state.service_context());
    let response = service.list_rooms(auth.user_id).await?;
    Ok(Json(response))
}

/// Send a message into a room; participants only
///
/// POST /chat/rooms/{room_id}/messages
pub async fn send_message(
    State(state): State<AppState>,
    auth: AuthUser,
    path: RoomIdPath,
    ValidatedJson(request): ValidatedJson<SendMessageRequest>,
) -> ApiResult<Created<Json<ChatMessageResponse>>> {
    let service = ChatService::new(state.service_context());
    let response = service
        .send_message(auth.user_id, path.room_id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// List a room's messages, newest first; participants only
///
/// GET /chat/rooms/{room_id}/messages
pub async fn list_messages(
    State(state): State<AppState>,
    auth: AuthUser,
    path: RoomIdPath,
    page: Page,
) -> ApiResult<Json<PageResponse<ChatMessageResponse>>> {
    let service = ChatService::new(state.service_context());
    let response = service
        .list_messages(auth.user_id, path.room_id, page.0)
        .await?;
    Ok(Json(response))
}
