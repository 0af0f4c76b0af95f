//! Chat model -> entity mappers

use petplace_core::entities::{ChatMessage, ChatRoom};

use crate::models::{ChatMessageModel, ChatRoomModel};

impl From<ChatRoomModel> for ChatRoom {
    fn from(model: ChatRoomModel) -> Self {
        ChatRoom {
            id: model.id,
            user_low_id: model.user_low_id,
            user_high_id: model.user_high_id,
            last_message: model.last_message,
            last_message_at: model.last_message_at,
            created_at: model.created_at,
        }
    }
}

impl From<ChatMessageModel> for ChatMessage {
    fn from(model: ChatMessageModel) -> Self {
        ChatMessage {
            id: model.id,
            room_id: model.room_id,
            sender_id: model.sender_id,
            content: model.content,
            created_at: model.created_at,
        }
    }
}
