//! Hotel entities - pet hotel listings and their bookable dates

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

/// Pet hotel listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub description: Option<String>,
    pub price_per_night: Decimal,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A single bookable calendar date for a hotel. `is_booked` flips to true
/// when a reservation claims the date and back to false on cancellation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableDate {
    pub id: i64,
    pub hotel_id: i64,
    pub date: NaiveDate,
    pub is_booked: bool,
}
