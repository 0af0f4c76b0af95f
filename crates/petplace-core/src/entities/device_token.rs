//! Device token entity - FCM registration token for a user's device

use chrono::{DateTime, Utc};

/// Registered push token. A user may have several active devices; tokens
/// are unique per (user_id, token) and re-registering refreshes the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceToken {
    pub id: i64,
    pub user_id: i64,
    pub token: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
