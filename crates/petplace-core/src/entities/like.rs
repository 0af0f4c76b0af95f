//! Like entity - a user's like on a feed

use chrono::{DateTime, Utc};

/// Like row. Uniqueness of (feed_id, user_id) is enforced by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Like {
    pub id: i64,
    pub feed_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}
