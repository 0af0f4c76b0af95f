//! Email verification database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for email_verifications table
#[derive(Debug, Clone, FromRow)]
pub struct EmailVerificationModel {
    pub id: i64,
    pub email: String,
    pub code: String,
    pub is_used: bool,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
