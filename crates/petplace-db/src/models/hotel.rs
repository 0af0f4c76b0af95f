//! Hotel database models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for hotels table
#[derive(Debug, Clone, FromRow)]
pub struct HotelModel {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub description: Option<String>,
    pub price_per_night: Decimal,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for available_dates table
#[derive(Debug, Clone, FromRow)]
pub struct AvailableDateModel {
    pub id: i64,
    pub hotel_id: i64,
    pub date: NaiveDate,
    pub is_booked: bool,
}
