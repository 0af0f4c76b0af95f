//! Device token database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for device_tokens table
#[derive(Debug, Clone, FromRow)]
pub struct DeviceTokenModel {
    pub id: i64,
    pub user_id: i64,
    pub token: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
