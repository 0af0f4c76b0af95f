//! Notification entity - in-app notification with optional push delivery

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DomainError;

/// What happened to trigger the notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    Like,
    Comment,
    Reply,
    Reservation,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "LIKE",
            Self::Comment => "COMMENT",
            Self::Reply => "REPLY",
            Self::Reservation => "RESERVATION",
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LIKE" => Ok(Self::Like),
            "COMMENT" => Ok(Self::Comment),
            "REPLY" => Ok(Self::Reply),
            "RESERVATION" => Ok(Self::Reservation),
            other => Err(DomainError::InternalError(format!(
                "unknown notification type: {other}"
            ))),
        }
    }
}

/// What kind of resource the notification points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RefType {
    Feed,
    Comment,
    Reservation,
}

impl RefType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feed => "FEED",
            Self::Comment => "COMMENT",
            Self::Reservation => "RESERVATION",
        }
    }
}

impl fmt::Display for RefType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RefType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FEED" => Ok(Self::Feed),
            "COMMENT" => Ok(Self::Comment),
            "RESERVATION" => Ok(Self::Reservation),
            other => Err(DomainError::InternalError(format!(
                "unknown ref type: {other}"
            ))),
        }
    }
}

/// Notification entity. `data` carries the payload forwarded to push
/// clients as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    pub notification_type: NotificationType,
    pub ref_type: RefType,
    pub ref_id: i64,
    pub message: String,
    pub data: Option<Value>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_round_trip() {
        for ty in [
            NotificationType::Like,
            NotificationType::Comment,
            NotificationType::Reply,
            NotificationType::Reservation,
        ] {
            assert_eq!(ty.as_str().parse::<NotificationType>().ok(), Some(ty));
        }
    }
}
