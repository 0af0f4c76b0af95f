//! PostgreSQL implementation of HotelRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;

use petplace_core::entities::{AvailableDate, Hotel};
use petplace_core::error::DomainError;
use petplace_core::traits::{HotelRepository, PageQuery, RepoResult};

use crate::models::{AvailableDateModel, HotelModel};

use super::error::map_db_error;

const HOTEL_COLUMNS: &str =
    "id, name, address, description, price_per_night, image_url, created_at, updated_at";

/// PostgreSQL implementation of HotelRepository
#[derive(Clone)]
pub struct PgHotelRepository {
    pool: PgPool,
}

impl PgHotelRepository {
    /// Create a new PgHotelRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HotelRepository for PgHotelRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Hotel>> {
        let result = sqlx::query_as::<_, HotelModel>(&format!(
            "SELECT {HOTEL_COLUMNS} FROM hotels WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Hotel::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, page: &PageQuery) -> RepoResult<Vec<Hotel>> {
        let models = sqlx::query_as::<_, HotelModel>(&format!(
            r"
            SELECT {HOTEL_COLUMNS} FROM hotels
            ORDER BY id
            LIMIT $1 OFFSET $2
            "
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Hotel::from).collect())
    }

    #[instrument(skip(self))]
    async fn available_dates(
        &self,
        hotel_id: i64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> RepoResult<Vec<AvailableDate>> {
        let models = sqlx::query_as::<_, AvailableDateModel>(
            r"
            SELECT id, hotel_id, date, is_booked
            FROM available_dates
            WHERE hotel_id = $1 AND date BETWEEN $2 AND $3
            ORDER BY date
            ",
        )
        .bind(hotel_id)
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(AvailableDate::from).collect())
    }

    #[instrument(skip(self))]
    async fn book_dates(&self, hotel_id: i64, dates: &[NaiveDate]) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Row locks serialize concurrent bookings of the same dates
        let result = sqlx::query(
            r"
            UPDATE available_dates
            SET is_booked = TRUE
            WHERE hotel_id = $1 AND date = ANY($2) AND is_booked = FALSE
            ",
        )
        .bind(hotel_id)
        .bind(dates)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() != dates.len() as u64 {
            tx.rollback().await.map_err(map_db_error)?;
            return Err(DomainError::DatesUnavailable);
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn release_dates(&self, hotel_id: i64, dates: &[NaiveDate]) -> RepoResult<()> {
        sqlx::query(
            r"
            UPDATE available_dates
            SET is_booked = FALSE
            WHERE hotel_id = $1 AND date = ANY($2)
            ",
        )
        .bind(hotel_id)
        .bind(dates)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
