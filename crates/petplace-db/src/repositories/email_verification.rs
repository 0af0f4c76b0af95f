//! PostgreSQL implementation of EmailVerificationRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use petplace_core::entities::EmailVerification;
use petplace_core::error::DomainError;
use petplace_core::traits::{EmailVerificationRepository, RepoResult};

use crate::models::EmailVerificationModel;

use super::error::map_db_error;

const VERIFICATION_COLUMNS: &str = "id, email, code, is_used, expires_at, created_at";

/// PostgreSQL implementation of EmailVerificationRepository
#[derive(Clone)]
pub struct PgEmailVerificationRepository {
    pool: PgPool,
}

impl PgEmailVerificationRepository {
    /// Create a new PgEmailVerificationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmailVerificationRepository for PgEmailVerificationRepository {
    #[instrument(skip(self, code))]
    async fn create(
        &self,
        email: &str,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> RepoResult<EmailVerification> {
        let model = sqlx::query_as::<_, EmailVerificationModel>(&format!(
            r"
            INSERT INTO email_verifications (email, code, expires_at)
            VALUES ($1, $2, $3)
            RETURNING {VERIFICATION_COLUMNS}
            "
        ))
        .bind(email)
        .bind(code)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(EmailVerification::from(model))
    }

    #[instrument(skip(self, code))]
    async fn find_latest(
        &self,
        email: &str,
        code: &str,
    ) -> RepoResult<Option<EmailVerification>> {
        let result = sqlx::query_as::<_, EmailVerificationModel>(&format!(
            r"
            SELECT {VERIFICATION_COLUMNS} FROM email_verifications
            WHERE email = $1 AND code = $2
            ORDER BY created_at DESC
            LIMIT 1
            "
        ))
        .bind(email)
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(EmailVerification::from))
    }

    #[instrument(skip(self))]
    async fn mark_used(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            "UPDATE email_verifications SET is_used = TRUE WHERE id = $1 AND is_used = FALSE",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::VerificationAlreadyUsed);
        }

        Ok(())
    }
}
