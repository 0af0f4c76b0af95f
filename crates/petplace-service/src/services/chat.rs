//! Chat service
//!
//! One room per user pair, keyed by the ordered (low, high) IDs so the
//! same room is found regardless of who opens it.

use tracing::{info, instrument, warn};

use petplace_core::entities::ChatRoom;
use petplace_core::traits::PageQuery;
use petplace_core::DomainError;

use crate::dto::{ChatMessageResponse, ChatRoomResponse, PageResponse, SendMessageRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Chat service
pub struct ChatService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChatService<'a> {
    /// Create a new ChatService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Open the room with another user, creating it if absent
    #[instrument(skip(self))]
    pub async fn open_room(
        &self,
        user_id: i64,
        other_user_id: i64,
    ) -> ServiceResult<ChatRoomResponse> {
        if user_id == other_user_id {
            return Err(DomainError::SelfChatRoom.into());
        }

        // The other user must exist and not be deleted
        self.ctx
            .user_repo()
            .find_by_id(other_user_id)
            .await?
            .ok_or(DomainError::UserNotFound(other_user_id))?;

        let (low, high) = ChatRoom::ordered_pair(user_id, other_user_id);

        let room = match self.ctx.chat_repo().find_room_by_pair(low, high).await? {
            Some(room) => room,
            None => {
                let room = self.ctx.chat_repo().create_room(low, high).await?;
                info!(room_id = room.id, user_id, other_user_id, "Chat room created");
                room
            }
        };

        Ok(ChatRoomResponse::for_viewer(room, user_id))
    }

    /// List the user's rooms, most recent activity first
    #[instrument(skip(self))]
    pub async fn list_rooms(&self, user_id: i64) -> ServiceResult<Vec<ChatRoomResponse>> {
        let rooms = self.ctx.chat_repo().list_rooms_for_user(user_id).await?;
        Ok(rooms
            .into_iter()
            .map(|room| ChatRoomResponse::for_viewer(room, user_id))
            .collect())
    }

    /// Send a message into a room the user participates in
    #[instrument(skip(self, request))]
    pub async fn send_message(
        &self,
        user_id: i64,
        room_id: i64,
        request: SendMessageRequest,
    ) -> ServiceResult<ChatMessageResponse> {
        let room = self.participant_room(user_id, room_id).await?;

        let message = self
            .ctx
            .chat_repo()
            .create_message(room_id, user_id, &request.content)
            .await?;

        info!(room_id, sender_id = user_id, "Message sent");

        // Push to the other participant; delivery failures only get logged
        if let Some(recipient_id) = room.other_participant(user_id) {
            if self.ctx.fcm().is_configured() {
                match self.ctx.device_token_repo().active_tokens(recipient_id).await {
                    Ok(tokens) => {
                        for token in tokens {
                            if let Err(e) = self
                                .ctx
                                .fcm()
                                .send(&token, "New message", &message.content, None)
                                .await
                            {
                                warn!(recipient_id, error = %e, "Chat push failed");
                            }
                        }
                    }
                    Err(e) => warn!(recipient_id, error = %e, "Failed to load device tokens"),
                }
            }
        }

        Ok(ChatMessageResponse::from(message))
    }

    /// List messages in a room, newest first
    #[instrument(skip(self))]
    pub async fn list_messages(
        &self,
        user_id: i64,
        room_id: i64,
        page: PageQuery,
    ) -> ServiceResult<PageResponse<ChatMessageResponse>> {
        self.participant_room(user_id, room_id).await?;

        let messages = self.ctx.chat_repo().list_messages(room_id, &page).await?;
        Ok(PageResponse::new(
            messages.into_iter().map(ChatMessageResponse::from).collect(),
            page.page,
            page.size,
        ))
    }

    async fn participant_room(&self, user_id: i64, room_id: i64) -> ServiceResult<ChatRoom> {
        let room = self
            .ctx
            .chat_repo()
            .find_room_by_id(room_id)
            .await?
            .ok_or(DomainError::RoomNotFound(room_id))?;

        if !room.has_participant(user_id) {
            return Err(DomainError::NotRoomParticipant.into());
        }
        Ok(room)
    }
}
