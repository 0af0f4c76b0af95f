//! Payment database model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for payments table. `method` and `status` are stored
/// as TEXT and parsed into enums by the mapper.
#[derive(Debug, Clone, FromRow)]
pub struct PaymentModel {
    pub id: i64,
    pub reservation_id: i64,
    pub merchant_uid: String,
    pub imp_uid: Option<String>,
    pub amount: Decimal,
    pub method: String,
    pub status: String,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
