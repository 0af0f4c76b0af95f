//! Email verification entity - one-shot numeric code sent by mail

use chrono::{DateTime, Utc};

/// Verification code record. A code is valid until `expires_at` and may be
/// consumed exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailVerification {
    pub id: i64,
    pub email: String,
    pub code: String,
    pub is_used: bool,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl EmailVerification {
    #[inline]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_is_expired() {
        let now = Utc::now();
        let verification = EmailVerification {
            id: 1,
            email: "a@b.com".to_string(),
            code: "123456".to_string(),
            is_used: false,
            expires_at: now + Duration::minutes(10),
            created_at: now,
        };
        assert!(!verification.is_expired(now));
        assert!(verification.is_expired(now + Duration::minutes(11)));
    }
}
