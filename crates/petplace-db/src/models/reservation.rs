//! Reservation database model

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for reservations table. `status` is stored as TEXT
/// and parsed into an enum by the mapper.
#[derive(Debug, Clone, FromRow)]
pub struct ReservationModel {
    pub id: i64,
    pub user_id: i64,
    pub hotel_id: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub total_price: Decimal,
    pub status: String,
    pub merchant_uid: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
