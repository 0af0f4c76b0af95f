//! User entity - represents a registered account

use chrono::{DateTime, Utc};

/// User account. The password hash never leaves the repository layer,
/// so it is not part of the entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub nickname: String,
    pub phone_number: String,
    pub profile_image: Option<String>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if this account has been soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        let now = Utc::now();
        User {
            id: 1,
            username: "tester".to_string(),
            nickname: "Tester".to_string(),
            phone_number: "010-1234-5678".to_string(),
            profile_image: None,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_is_deleted() {
        let mut user = sample_user();
        assert!(!user.is_deleted());

        user.deleted_at = Some(Utc::now());
        assert!(user.is_deleted());
    }
}
