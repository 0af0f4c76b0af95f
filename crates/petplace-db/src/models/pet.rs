//! Pet database model

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for pets table. `animal` and `sex` are stored as TEXT
/// and parsed into enums by the mapper.
#[derive(Debug, Clone, FromRow)]
pub struct PetModel {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub animal: String,
    pub breed: Option<String>,
    pub sex: String,
    pub birth_date: Option<NaiveDate>,
    pub weight_kg: Option<Decimal>,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
