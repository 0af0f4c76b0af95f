//! Feed database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for feeds table
#[derive(Debug, Clone, FromRow)]
pub struct FeedModel {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
    pub image_url: Option<String>,
    pub view_count: i64,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
