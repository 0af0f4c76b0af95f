//! Reservation service
//!
//! A reservation holds its nights by booking each date row atomically, then
//! records a pending payment for the total. Check-out is exclusive: a stay
//! from the 1st to the 3rd books the 1st and the 2nd.

use chrono::{NaiveDate, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use tracing::{error, info, instrument, warn};

use petplace_core::entities::{PaymentStatus, ReservationStatus};
use petplace_core::traits::{NewPayment, NewReservation};
use petplace_core::DomainError;

use crate::dto::{CreateReservationRequest, ReservationResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reservation service
pub struct ReservationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReservationService<'a> {
    /// Create a new ReservationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a pending reservation, holding its dates
    #[instrument(skip(self, request), fields(hotel_id = request.hotel_id))]
    pub async fn create_reservation(
        &self,
        user_id: i64,
        request: CreateReservationRequest,
    ) -> ServiceResult<ReservationResponse> {
        if request.check_in >= request.check_out {
            return Err(DomainError::InvalidDateRange.into());
        }

        let hotel = self
            .ctx
            .hotel_repo()
            .find_by_id(request.hotel_id)
            .await?
            .ok_or(DomainError::HotelNotFound(request.hotel_id))?;

        let dates = stay_dates(request.check_in, request.check_out);
        let nights = dates.len() as i64;
        let total_price = hotel.price_per_night * Decimal::from(nights);
        let merchant_uid = new_merchant_uid(request.hotel_id);

        // Hold the dates first; the UPDATE inside book_dates is atomic, so
        // two overlapping requests cannot both succeed.
        self.ctx
            .hotel_repo()
            .book_dates(request.hotel_id, &dates)
            .await?;

        let reservation = match self
            .ctx
            .reservation_repo()
            .create(&NewReservation {
                user_id,
                hotel_id: request.hotel_id,
                check_in: request.check_in,
                check_out: request.check_out,
                total_price,
                merchant_uid: merchant_uid.clone(),
            })
            .await
        {
            Ok(reservation) => reservation,
            Err(e) => {
                self.release_held_dates(request.hotel_id, &dates).await;
                return Err(ServiceError::from(e));
            }
        };

        if let Err(e) = self
            .ctx
            .payment_repo()
            .create(&NewPayment {
                reservation_id: reservation.id,
                merchant_uid,
                amount: total_price,
            })
            .await
        {
            self.release_held_dates(request.hotel_id, &dates).await;
            if let Err(status_err) = self
                .ctx
                .reservation_repo()
                .update_status(reservation.id, ReservationStatus::Cancelled)
                .await
            {
                error!(reservation_id = reservation.id, error = %status_err,
                    "Failed to cancel reservation after payment setup failure");
            }
            return Err(ServiceError::from(e));
        }

        info!(
            user_id,
            reservation_id = reservation.id,
            nights,
            "Reservation created"
        );

        Ok(ReservationResponse::from(reservation))
    }

    /// List the user's reservations, newest first
    #[instrument(skip(self))]
    pub async fn list_my_reservations(&self, user_id: i64) -> ServiceResult<Vec<ReservationResponse>> {
        let reservations = self.ctx.reservation_repo().list_by_user(user_id).await?;
        Ok(reservations
            .into_iter()
            .map(ReservationResponse::from)
            .collect())
    }

    /// Get one reservation; only its owner may see it
    #[instrument(skip(self))]
    pub async fn get_reservation(
        &self,
        user_id: i64,
        reservation_id: i64,
    ) -> ServiceResult<ReservationResponse> {
        let reservation = self
            .ctx
            .reservation_repo()
            .find_by_id(reservation_id)
            .await?
            .ok_or(DomainError::ReservationNotFound(reservation_id))?;

        if !reservation.is_owned_by(user_id) {
            return Err(DomainError::NotResourceOwner.into());
        }

        Ok(ReservationResponse::from(reservation))
    }

    /// Cancel a reservation, refunding through the gateway when already paid
    #[instrument(skip(self))]
    pub async fn cancel_reservation(
        &self,
        user_id: i64,
        reservation_id: i64,
    ) -> ServiceResult<ReservationResponse> {
        let reservation = self
            .ctx
            .reservation_repo()
            .find_by_id(reservation_id)
            .await?
            .ok_or(DomainError::ReservationNotFound(reservation_id))?;

        if !reservation.is_owned_by(user_id) {
            return Err(DomainError::NotResourceOwner.into());
        }
        if !reservation.status.is_cancellable() {
            return Err(
                DomainError::ReservationNotCancellable(reservation.status.as_str().to_string())
                    .into(),
            );
        }

        let payment = self
            .ctx
            .payment_repo()
            .find_by_reservation(reservation_id)
            .await?;

        // A paid reservation refunds at the gateway before anything changes
        // locally; a failed refund aborts the cancellation.
        if let Some(payment) = &payment {
            if payment.status == PaymentStatus::Paid {
                let imp_uid = payment
                    .imp_uid
                    .as_deref()
                    .ok_or_else(|| ServiceError::internal("paid payment missing imp_uid"))?;
                self.ctx
                    .portone()
                    .cancel_payment(imp_uid, "reservation cancelled")
                    .await?;
                self.ctx
                    .payment_repo()
                    .mark_cancelled(&payment.merchant_uid)
                    .await?;
            }
        }

        self.ctx
            .reservation_repo()
            .update_status(reservation_id, ReservationStatus::Cancelled)
            .await?;

        let dates = stay_dates(reservation.check_in, reservation.check_out);
        self.release_held_dates(reservation.hotel_id, &dates).await;

        info!(user_id, reservation_id, "Reservation cancelled");

        let cancelled = self
            .ctx
            .reservation_repo()
            .find_by_id(reservation_id)
            .await?
            .ok_or(DomainError::ReservationNotFound(reservation_id))?;

        Ok(ReservationResponse::from(cancelled))
    }

    async fn release_held_dates(&self, hotel_id: i64, dates: &[NaiveDate]) {
        if let Err(e) = self.ctx.hotel_repo().release_dates(hotel_id, dates).await {
            warn!(hotel_id, error = %e, "Failed to release held dates");
        }
    }
}

/// Nights of a stay: every date from check-in up to, not including, check-out
pub(crate) fn stay_dates(check_in: NaiveDate, check_out: NaiveDate) -> Vec<NaiveDate> {
    check_in
        .iter_days()
        .take_while(|date| *date < check_out)
        .collect()
}

/// Merchant UIDs must be unique per transaction at the gateway
fn new_merchant_uid(hotel_id: i64) -> String {
    let suffix: u16 = rand::thread_rng().gen_range(0..10_000);
    format!(
        "HOTEL_{hotel_id}_{}{suffix:04}",
        Utc::now().format("%Y%m%d%H%M%S")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_stay_dates_excludes_check_out() {
        let dates = stay_dates(date(2025, 3, 1), date(2025, 3, 3));
        assert_eq!(dates, vec![date(2025, 3, 1), date(2025, 3, 2)]);
    }

    #[test]
    fn test_stay_dates_single_night() {
        let dates = stay_dates(date(2025, 3, 1), date(2025, 3, 2));
        assert_eq!(dates, vec![date(2025, 3, 1)]);
    }

    #[test]
    fn test_merchant_uid_shape() {
        let uid = new_merchant_uid(42);
        assert!(uid.starts_with("HOTEL_42_"));
    }
}
