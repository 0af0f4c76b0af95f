//! Feed entity - a post on the community feed

use chrono::{DateTime, Utc};

/// Feed post entity.
///
/// `like_count` is a denormalized counter recomputed from the likes table
/// after every like or unlike, so it never drifts under concurrent toggles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
    pub image_url: Option<String>,
    pub view_count: i64,
    pub like_count: i64,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Feed {
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Check if `user_id` authored this feed
    #[inline]
    pub fn is_authored_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}
