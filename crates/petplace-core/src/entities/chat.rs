//! Chat entities - one-to-one rooms and their messages

use chrono::{DateTime, Utc};

/// One-to-one chat room. Exactly one room exists per user pair; the pair is
/// stored ordered so the unique constraint catches both orderings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRoom {
    pub id: i64,
    pub user_low_id: i64,
    pub user_high_id: i64,
    pub last_message: Option<String>,
    pub last_message_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl ChatRoom {
    /// Normalize a user pair into (low, high) ordering
    pub fn ordered_pair(a: i64, b: i64) -> (i64, i64) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Check if `user_id` is one of the two participants
    #[inline]
    pub fn has_participant(&self, user_id: i64) -> bool {
        self.user_low_id == user_id || self.user_high_id == user_id
    }

    /// Given one participant, return the other
    pub fn other_participant(&self, user_id: i64) -> Option<i64> {
        if self.user_low_id == user_id {
            Some(self.user_high_id)
        } else if self.user_high_id == user_id {
            Some(self.user_low_id)
        } else {
            None
        }
    }
}

/// Message within a chat room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: i64,
    pub room_id: i64,
    pub sender_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_pair() {
        assert_eq!(ChatRoom::ordered_pair(7, 3), (3, 7));
        assert_eq!(ChatRoom::ordered_pair(3, 7), (3, 7));
        assert_eq!(ChatRoom::ordered_pair(5, 5), (5, 5));
    }

    #[test]
    fn test_other_participant() {
        let room = ChatRoom {
            id: 1,
            user_low_id: 3,
            user_high_id: 7,
            last_message: None,
            last_message_at: None,
            created_at: Utc::now(),
        };
        assert_eq!(room.other_participant(3), Some(7));
        assert_eq!(room.other_participant(7), Some(3));
        assert_eq!(room.other_participant(9), None);
    }
}
