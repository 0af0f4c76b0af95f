//! Comment entity - comment or single-level reply on a feed

use chrono::{DateTime, Utc};

/// Comment entity. `parent_id` is set for replies; replies to replies
/// are rejected at the service layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub feed_id: i64,
    pub user_id: i64,
    pub parent_id: Option<i64>,
    pub content: String,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    #[inline]
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }

    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    #[inline]
    pub fn is_authored_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_reply() {
        let now = Utc::now();
        let mut comment = Comment {
            id: 1,
            feed_id: 10,
            user_id: 2,
            parent_id: None,
            content: "nice".to_string(),
            deleted_at: None,
            created_at: now,
            updated_at: now,
        };
        assert!(!comment.is_reply());

        comment.parent_id = Some(5);
        assert!(comment.is_reply());
    }
}
