//! Reservation model -> entity mapper

use petplace_core::entities::Reservation;
use petplace_core::error::DomainError;

use crate::models::ReservationModel;

impl TryFrom<ReservationModel> for Reservation {
    type Error = DomainError;

    fn try_from(model: ReservationModel) -> Result<Self, Self::Error> {
        Ok(Reservation {
            id: model.id,
            user_id: model.user_id,
            hotel_id: model.hotel_id,
            check_in: model.check_in,
            check_out: model.check_out,
            total_price: model.total_price,
            status: model.status.parse()?,
            merchant_uid: model.merchant_uid,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
