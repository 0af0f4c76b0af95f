//! PostgreSQL implementation of ReservationRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;

use petplace_core::entities::{Reservation, ReservationStatus};
use petplace_core::traits::{NewReservation, RepoResult, ReservationRepository};

use crate::models::ReservationModel;

use super::error::{map_db_error, reservation_not_found};

const RESERVATION_COLUMNS: &str = "id, user_id, hotel_id, check_in, check_out, total_price, \
                                   status, merchant_uid, created_at, updated_at";

/// PostgreSQL implementation of ReservationRepository
#[derive(Clone)]
pub struct PgReservationRepository {
    pool: PgPool,
}

impl PgReservationRepository {
    /// Create a new PgReservationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationRepository for PgReservationRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Reservation>> {
        let result = sqlx::query_as::<_, ReservationModel>(&format!(
            "SELECT {RESERVATION_COLUMNS} FROM reservations WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Reservation::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_merchant_uid(&self, merchant_uid: &str) -> RepoResult<Option<Reservation>> {
        let result = sqlx::query_as::<_, ReservationModel>(&format!(
            "SELECT {RESERVATION_COLUMNS} FROM reservations WHERE merchant_uid = $1"
        ))
        .bind(merchant_uid)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Reservation::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list_by_user(&self, user_id: i64) -> RepoResult<Vec<Reservation>> {
        let models = sqlx::query_as::<_, ReservationModel>(&format!(
            r"
            SELECT {RESERVATION_COLUMNS} FROM reservations
            WHERE user_id = $1
            ORDER BY created_at DESC
            "
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        models.into_iter().map(Reservation::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn list_confirmed_checking_in(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> RepoResult<Vec<Reservation>> {
        let models = sqlx::query_as::<_, ReservationModel>(&format!(
            r"
            SELECT {RESERVATION_COLUMNS} FROM reservations
            WHERE status = $1 AND check_in BETWEEN $2 AND $3
            ORDER BY check_in
            "
        ))
        .bind(ReservationStatus::Confirmed.as_str())
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        models.into_iter().map(Reservation::try_from).collect()
    }

    #[instrument(skip(self, new_reservation))]
    async fn create(&self, new_reservation: &NewReservation) -> RepoResult<Reservation> {
        let model = sqlx::query_as::<_, ReservationModel>(&format!(
            r"
            INSERT INTO reservations (user_id, hotel_id, check_in, check_out, total_price, status, merchant_uid)
            VALUES ($1, $2, $3, $4, $5, 'PENDING', $6)
            RETURNING {RESERVATION_COLUMNS}
            "
        ))
        .bind(new_reservation.user_id)
        .bind(new_reservation.hotel_id)
        .bind(new_reservation.check_in)
        .bind(new_reservation.check_out)
        .bind(new_reservation.total_price)
        .bind(&new_reservation.merchant_uid)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Reservation::try_from(model)
    }

    #[instrument(skip(self))]
    async fn update_status(&self, id: i64, status: ReservationStatus) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE reservations
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(reservation_not_found(id));
        }

        Ok(())
    }
}
