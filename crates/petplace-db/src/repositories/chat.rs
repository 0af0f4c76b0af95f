//! PostgreSQL implementation of ChatRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use petplace_core::entities::{ChatMessage, ChatRoom};
use petplace_core::error::DomainError;
use petplace_core::traits::{ChatRepository, PageQuery, RepoResult};

use crate::models::{ChatMessageModel, ChatRoomModel};

use super::error::{map_db_error, map_unique_violation, room_not_found};

const ROOM_COLUMNS: &str =
    "id, user_low_id, user_high_id, last_message, last_message_at, created_at";
const MESSAGE_COLUMNS: &str = "id, room_id, sender_id, content, created_at";

/// PostgreSQL implementation of ChatRepository
#[derive(Clone)]
pub struct PgChatRepository {
    pool: PgPool,
}

impl PgChatRepository {
    /// Create a new PgChatRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatRepository for PgChatRepository {
    #[instrument(skip(self))]
    async fn find_room_by_id(&self, id: i64) -> RepoResult<Option<ChatRoom>> {
        let result = sqlx::query_as::<_, ChatRoomModel>(&format!(
            "SELECT {ROOM_COLUMNS} FROM chat_rooms WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ChatRoom::from))
    }

    #[instrument(skip(self))]
    async fn find_room_by_pair(
        &self,
        user_low_id: i64,
        user_high_id: i64,
    ) -> RepoResult<Option<ChatRoom>> {
        let result = sqlx::query_as::<_, ChatRoomModel>(&format!(
            "SELECT {ROOM_COLUMNS} FROM chat_rooms WHERE user_low_id = $1 AND user_high_id = $2"
        ))
        .bind(user_low_id)
        .bind(user_high_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ChatRoom::from))
    }

    #[instrument(skip(self))]
    async fn create_room(&self, user_low_id: i64, user_high_id: i64) -> RepoResult<ChatRoom> {
        let model = sqlx::query_as::<_, ChatRoomModel>(&format!(
            r"
            INSERT INTO chat_rooms (user_low_id, user_high_id)
            VALUES ($1, $2)
            RETURNING {ROOM_COLUMNS}
            "
        ))
        .bind(user_low_id)
        .bind(user_high_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::InternalError("chat room already exists for pair".to_string())
            })
        })?;

        Ok(ChatRoom::from(model))
    }

    #[instrument(skip(self))]
    async fn list_rooms_for_user(&self, user_id: i64) -> RepoResult<Vec<ChatRoom>> {
        let models = sqlx::query_as::<_, ChatRoomModel>(&format!(
            r"
            SELECT {ROOM_COLUMNS} FROM chat_rooms
            WHERE user_low_id = $1 OR user_high_id = $1
            ORDER BY last_message_at DESC NULLS LAST, created_at DESC
            "
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(ChatRoom::from).collect())
    }

    #[instrument(skip(self, content))]
    async fn create_message(
        &self,
        room_id: i64,
        sender_id: i64,
        content: &str,
    ) -> RepoResult<ChatMessage> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let model = sqlx::query_as::<_, ChatMessageModel>(&format!(
            r"
            INSERT INTO chat_messages (room_id, sender_id, content)
            VALUES ($1, $2, $3)
            RETURNING {MESSAGE_COLUMNS}
            "
        ))
        .bind(room_id)
        .bind(sender_id)
        .bind(content)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let updated = sqlx::query(
            r"
            UPDATE chat_rooms
            SET last_message = $2, last_message_at = $3
            WHERE id = $1
            ",
        )
        .bind(room_id)
        .bind(content)
        .bind(model.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if updated.rows_affected() == 0 {
            tx.rollback().await.map_err(map_db_error)?;
            return Err(room_not_found(room_id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(ChatMessage::from(model))
    }

    #[instrument(skip(self))]
    async fn list_messages(
        &self,
        room_id: i64,
        page: &PageQuery,
    ) -> RepoResult<Vec<ChatMessage>> {
        let models = sqlx::query_as::<_, ChatMessageModel>(&format!(
            r"
            SELECT {MESSAGE_COLUMNS} FROM chat_messages
            WHERE room_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "
        ))
        .bind(room_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(ChatMessage::from).collect())
    }
}
