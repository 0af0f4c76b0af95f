//! Refresh token entity - server-side record backing token rotation

use chrono::{DateTime, Utc};

/// Stored refresh token. Tokens are rotated on every refresh: the old row
/// is deleted and a new one inserted in the same operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshToken {
    pub id: i64,
    pub user_id: i64,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl RefreshToken {
    #[inline]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}
