//! Chat database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for chat_rooms table
#[derive(Debug, Clone, FromRow)]
pub struct ChatRoomModel {
    pub id: i64,
    pub user_low_id: i64,
    pub user_high_id: i64,
    pub last_message: Option<String>,
    pub last_message_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Database model for chat_messages table
#[derive(Debug, Clone, FromRow)]
pub struct ChatMessageModel {
    pub id: i64,
    pub room_id: i64,
    pub sender_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
