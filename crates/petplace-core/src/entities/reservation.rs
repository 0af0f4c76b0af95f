//! Reservation entity - a hotel booking over a date range

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Lifecycle state of a reservation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Cancelled => "CANCELLED",
            Self::Completed => "COMPLETED",
        }
    }

    /// Only pending and confirmed reservations can still be cancelled
    pub fn is_cancellable(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "CONFIRMED" => Ok(Self::Confirmed),
            "CANCELLED" => Ok(Self::Cancelled),
            "COMPLETED" => Ok(Self::Completed),
            other => Err(DomainError::InternalError(format!(
                "unknown reservation status: {other}"
            ))),
        }
    }
}

/// Hotel reservation entity. `check_out` is exclusive: a stay from the 1st
/// to the 3rd occupies the nights of the 1st and 2nd.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: i64,
    pub user_id: i64,
    pub hotel_id: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub total_price: Decimal,
    pub status: ReservationStatus,
    pub merchant_uid: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    /// Number of nights covered by this reservation
    pub fn night_count(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    #[inline]
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            ReservationStatus::Pending,
            ReservationStatus::Confirmed,
            ReservationStatus::Cancelled,
            ReservationStatus::Completed,
        ] {
            assert_eq!(
                status.as_str().parse::<ReservationStatus>().ok(),
                Some(status)
            );
        }
    }

    #[test]
    fn test_is_cancellable() {
        assert!(ReservationStatus::Pending.is_cancellable());
        assert!(ReservationStatus::Confirmed.is_cancellable());
        assert!(!ReservationStatus::Cancelled.is_cancellable());
        assert!(!ReservationStatus::Completed.is_cancellable());
    }

    #[test]
    fn test_night_count() {
        let reservation = Reservation {
            id: 1,
            user_id: 1,
            hotel_id: 1,
            check_in: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            total_price: Decimal::new(100_000, 0),
            status: ReservationStatus::Pending,
            merchant_uid: "HOTEL_1_20250301000000".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(reservation.night_count(), 2);
    }
}
