//! PostgreSQL implementation of DeviceTokenRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use petplace_core::entities::DeviceToken;
use petplace_core::error::DomainError;
use petplace_core::traits::{DeviceTokenRepository, RepoResult};

use crate::models::DeviceTokenModel;

use super::error::map_db_error;

const TOKEN_COLUMNS: &str = "id, user_id, token, is_active, created_at, updated_at";

/// PostgreSQL implementation of DeviceTokenRepository
#[derive(Clone)]
pub struct PgDeviceTokenRepository {
    pool: PgPool,
}

impl PgDeviceTokenRepository {
    /// Create a new PgDeviceTokenRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DeviceTokenRepository for PgDeviceTokenRepository {
    #[instrument(skip(self, token))]
    async fn upsert(&self, user_id: i64, token: &str) -> RepoResult<DeviceToken> {
        let model = sqlx::query_as::<_, DeviceTokenModel>(&format!(
            r"
            INSERT INTO device_tokens (user_id, token)
            VALUES ($1, $2)
            ON CONFLICT (user_id, token)
            DO UPDATE SET is_active = TRUE, updated_at = NOW()
            RETURNING {TOKEN_COLUMNS}
            "
        ))
        .bind(user_id)
        .bind(token)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(DeviceToken::from(model))
    }

    #[instrument(skip(self, token))]
    async fn deactivate(&self, user_id: i64, token: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE device_tokens
            SET is_active = FALSE, updated_at = NOW()
            WHERE user_id = $1 AND token = $2
            ",
        )
        .bind(user_id)
        .bind(token)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::DeviceTokenNotFound);
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn active_tokens(&self, user_id: i64) -> RepoResult<Vec<String>> {
        let tokens = sqlx::query_scalar::<_, String>(
            "SELECT token FROM device_tokens WHERE user_id = $1 AND is_active = TRUE",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(tokens)
    }
}
