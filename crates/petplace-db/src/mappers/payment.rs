//! Payment model -> entity mapper

use petplace_core::entities::Payment;
use petplace_core::error::DomainError;

use crate::models::PaymentModel;

impl TryFrom<PaymentModel> for Payment {
    type Error = DomainError;

    fn try_from(model: PaymentModel) -> Result<Self, Self::Error> {
        Ok(Payment {
            id: model.id,
            reservation_id: model.reservation_id,
            merchant_uid: model.merchant_uid,
            imp_uid: model.imp_uid,
            amount: model.amount,
            method: model.method.parse()?,
            status: model.status.parse()?,
            paid_at: model.paid_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
