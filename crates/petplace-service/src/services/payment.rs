//! Payment service
//!
//! Payments are verified server-side: whether the confirmation arrives from
//! the client callback or the gateway webhook, the amount is cross-checked
//! against the gateway's own record before anything is marked paid.
//! Webhooks carry an HMAC signature over `{timestamp}.{body}` which is
//! checked when a webhook secret is configured.

use std::str::FromStr;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::{info, instrument, warn};

use petplace_common::AppError;
use petplace_core::entities::{Payment, PaymentMethod, PaymentStatus, Reservation, ReservationStatus};
use petplace_core::DomainError;

use crate::clients::GatewayPayment;
use crate::dto::{PaymentCompleteRequest, PaymentResponse, PaymentWebhookRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::reservation::stay_dates;

type HmacSha256 = Hmac<Sha256>;

/// Maximum age of a signed webhook before it is rejected
const WEBHOOK_MAX_AGE_SECS: i64 = 300;

/// Payment service
pub struct PaymentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PaymentService<'a> {
    /// Create a new PaymentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Client-side completion callback: verify with the gateway and confirm
    #[instrument(skip(self, request), fields(merchant_uid = %request.merchant_uid))]
    pub async fn complete(
        &self,
        user_id: i64,
        request: PaymentCompleteRequest,
    ) -> ServiceResult<PaymentResponse> {
        let payment = self
            .ctx
            .payment_repo()
            .find_by_merchant_uid(&request.merchant_uid)
            .await?
            .ok_or_else(|| DomainError::PaymentNotFound(request.merchant_uid.clone()))?;

        let reservation = self
            .ctx
            .reservation_repo()
            .find_by_merchant_uid(&request.merchant_uid)
            .await?
            .ok_or(DomainError::ReservationNotFound(payment.reservation_id))?;

        if !reservation.is_owned_by(user_id) {
            return Err(DomainError::NotResourceOwner.into());
        }

        // Replayed callback for the same transaction is idempotent; a
        // different imp_uid against an already paid order is a conflict.
        if payment.status == PaymentStatus::Paid {
            if payment.imp_uid.as_deref() == Some(request.imp_uid.as_str()) {
                return Ok(PaymentResponse::from(payment));
            }
            return Err(DomainError::DuplicatePayment(request.merchant_uid).into());
        }

        let confirmed = self
            .verify_and_confirm(&payment, &reservation, &request.imp_uid)
            .await?;

        Ok(PaymentResponse::from(confirmed))
    }

    /// Gateway webhook: signature check, then the same verification path
    #[instrument(skip(self, signature, timestamp, raw_body, request),
        fields(merchant_uid = %request.merchant_uid, status = %request.status))]
    pub async fn webhook(
        &self,
        signature: Option<&str>,
        timestamp: Option<&str>,
        raw_body: &str,
        request: PaymentWebhookRequest,
    ) -> ServiceResult<()> {
        if let Some(secret) = self.ctx.webhook_secret() {
            self.check_signature(secret, signature, timestamp, raw_body)?;
        }

        let payment = self
            .ctx
            .payment_repo()
            .find_by_merchant_uid(&request.merchant_uid)
            .await?
            .ok_or_else(|| DomainError::PaymentNotFound(request.merchant_uid.clone()))?;

        let reservation = self
            .ctx
            .reservation_repo()
            .find_by_merchant_uid(&request.merchant_uid)
            .await?
            .ok_or(DomainError::ReservationNotFound(payment.reservation_id))?;

        match request.status.as_str() {
            "paid" => {
                // Redelivered webhook for a confirmed transaction
                if payment.status == PaymentStatus::Paid {
                    return Ok(());
                }
                self.verify_and_confirm(&payment, &reservation, &request.imp_uid)
                    .await?;
            }
            "cancelled" => {
                if payment.status != PaymentStatus::Cancelled {
                    self.ctx
                        .payment_repo()
                        .mark_cancelled(&payment.merchant_uid)
                        .await?;
                    self.ctx
                        .reservation_repo()
                        .update_status(reservation.id, ReservationStatus::Cancelled)
                        .await?;
                    let dates = stay_dates(reservation.check_in, reservation.check_out);
                    if let Err(e) = self
                        .ctx
                        .hotel_repo()
                        .release_dates(reservation.hotel_id, &dates)
                        .await
                    {
                        warn!(reservation_id = reservation.id, error = %e,
                            "Failed to release dates after cancellation webhook");
                    }
                    info!(reservation_id = reservation.id, "Payment cancelled via webhook");
                }
            }
            "failed" => {
                // A late failure report never clobbers a settled payment
                if !payment.is_settled() {
                    self.ctx
                        .payment_repo()
                        .mark_failed(&payment.merchant_uid)
                        .await?;
                    info!(reservation_id = reservation.id, "Payment failed via webhook");
                }
            }
            other => {
                warn!(status = other, "Ignoring webhook with unknown status");
            }
        }

        Ok(())
    }

    /// Get the payment attached to a reservation; owner only
    #[instrument(skip(self))]
    pub async fn get_payment(
        &self,
        user_id: i64,
        reservation_id: i64,
    ) -> ServiceResult<PaymentResponse> {
        let reservation = self
            .ctx
            .reservation_repo()
            .find_by_id(reservation_id)
            .await?
            .ok_or(DomainError::ReservationNotFound(reservation_id))?;

        if !reservation.is_owned_by(user_id) {
            return Err(DomainError::NotResourceOwner.into());
        }

        let payment = self
            .ctx
            .payment_repo()
            .find_by_reservation(reservation_id)
            .await?
            .ok_or_else(|| DomainError::PaymentNotFound(reservation.merchant_uid.clone()))?;

        Ok(PaymentResponse::from(payment))
    }

    /// Look up a payment by its merchant UID; owner only
    #[instrument(skip(self, merchant_uid), fields(merchant_uid = %merchant_uid))]
    pub async fn get_by_merchant_uid(
        &self,
        user_id: i64,
        merchant_uid: &str,
    ) -> ServiceResult<PaymentResponse> {
        let payment = self
            .ctx
            .payment_repo()
            .find_by_merchant_uid(merchant_uid)
            .await?
            .ok_or_else(|| DomainError::PaymentNotFound(merchant_uid.to_string()))?;

        let reservation = self
            .ctx
            .reservation_repo()
            .find_by_id(payment.reservation_id)
            .await?
            .ok_or(DomainError::ReservationNotFound(payment.reservation_id))?;

        if !reservation.is_owned_by(user_id) {
            return Err(DomainError::NotResourceOwner.into());
        }

        Ok(PaymentResponse::from(payment))
    }

    /// Cross-check the gateway record, then mark paid and confirm the stay
    async fn verify_and_confirm(
        &self,
        payment: &Payment,
        reservation: &Reservation,
        imp_uid: &str,
    ) -> ServiceResult<Payment> {
        let gateway = self.ctx.portone().fetch_payment(imp_uid).await?;
        check_gateway_record(payment, &gateway)?;

        // Gateway methods come through lowercase; anything unrecognized
        // parses to Etc
        let method = PaymentMethod::from_str(&gateway.pay_method.to_uppercase())
            .unwrap_or(PaymentMethod::Etc);
        let paid_at = DateTime::<Utc>::from_timestamp(gateway.paid_at, 0).unwrap_or_else(Utc::now);

        let confirmed = self
            .ctx
            .payment_repo()
            .mark_paid(&payment.merchant_uid, imp_uid, method, paid_at)
            .await?;

        self.ctx
            .reservation_repo()
            .update_status(reservation.id, ReservationStatus::Confirmed)
            .await?;

        info!(
            reservation_id = reservation.id,
            merchant_uid = %payment.merchant_uid,
            "Payment confirmed"
        );

        Ok(confirmed)
    }

    fn check_signature(
        &self,
        secret: &str,
        signature: Option<&str>,
        timestamp: Option<&str>,
        raw_body: &str,
    ) -> ServiceResult<()> {
        let signature = signature.ok_or(ServiceError::App(AppError::InvalidToken))?;
        let timestamp = timestamp.ok_or(ServiceError::App(AppError::InvalidToken))?;

        let sent_at: i64 = timestamp
            .parse()
            .map_err(|_| ServiceError::App(AppError::InvalidToken))?;
        if (Utc::now().timestamp() - sent_at).abs() > WEBHOOK_MAX_AGE_SECS {
            warn!("Rejected webhook with stale timestamp");
            return Err(ServiceError::App(AppError::InvalidToken));
        }

        if !verify_signature(secret, timestamp, raw_body, signature) {
            warn!("Rejected webhook with bad signature");
            return Err(ServiceError::App(AppError::InvalidToken));
        }
        Ok(())
    }
}

/// Cross-check the gateway's record against the local order before any
/// state change. A mismatch on any field aborts the confirmation.
fn check_gateway_record(payment: &Payment, gateway: &GatewayPayment) -> ServiceResult<()> {
    if gateway.merchant_uid != payment.merchant_uid {
        return Err(ServiceError::validation(
            "Gateway record does not match this order",
        ));
    }
    if !gateway.is_paid() {
        return Err(ServiceError::validation(format!(
            "Gateway reports status '{}', not paid",
            gateway.status
        )));
    }
    if gateway.amount != payment.amount {
        return Err(DomainError::AmountMismatch {
            expected: payment.amount.to_string(),
            actual: gateway.amount.to_string(),
        }
        .into());
    }
    Ok(())
}

/// Verify a base64 HMAC-SHA256 signature over `{timestamp}.{body}`
fn verify_signature(secret: &str, timestamp: &str, body: &str, signature: &str) -> bool {
    let Ok(decoded) = BASE64.decode(signature) else {
        return false;
    };
    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(timestamp.as_bytes());
    mac.update(b".");
    mac.update(body.as_bytes());
    mac.verify_slice(&decoded).is_ok()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn sign(secret: &str, timestamp: &str, body: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(timestamp.as_bytes());
        mac.update(b".");
        mac.update(body.as_bytes());
        BASE64.encode(mac.finalize().into_bytes())
    }

    #[test]
    fn test_verify_signature_roundtrip() {
        let signature = sign("secret", "1700000000", r#"{"imp_uid":"imp_1"}"#);
        assert!(verify_signature(
            "secret",
            "1700000000",
            r#"{"imp_uid":"imp_1"}"#,
            &signature
        ));
    }

    #[test]
    fn test_verify_signature_rejects_tampered_body() {
        let signature = sign("secret", "1700000000", r#"{"imp_uid":"imp_1"}"#);
        assert!(!verify_signature(
            "secret",
            "1700000000",
            r#"{"imp_uid":"imp_2"}"#,
            &signature
        ));
    }

    #[test]
    fn test_verify_signature_rejects_wrong_secret() {
        let signature = sign("secret", "1700000000", "body");
        assert!(!verify_signature("other", "1700000000", "body", &signature));
    }

    #[test]
    fn test_verify_signature_rejects_garbage() {
        assert!(!verify_signature("secret", "1700000000", "body", "not-base64!!"));
    }

    fn sample_payment() -> Payment {
        let now = Utc::now();
        Payment {
            id: 1,
            reservation_id: 1,
            merchant_uid: "HOTEL_1_202608291200001234".to_string(),
            imp_uid: None,
            amount: Decimal::new(100_000, 0),
            method: PaymentMethod::Etc,
            status: PaymentStatus::Pending,
            paid_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn sample_gateway(payment: &Payment) -> GatewayPayment {
        GatewayPayment {
            imp_uid: "imp_1".to_string(),
            merchant_uid: payment.merchant_uid.clone(),
            status: "paid".to_string(),
            amount: payment.amount,
            pay_method: "card".to_string(),
            paid_at: 1_700_000_000,
        }
    }

    #[test]
    fn test_gateway_record_accepts_matching_order() {
        let payment = sample_payment();
        let gateway = sample_gateway(&payment);
        assert!(check_gateway_record(&payment, &gateway).is_ok());
    }

    #[test]
    fn test_gateway_record_rejects_amount_mismatch() {
        let payment = sample_payment();
        let mut gateway = sample_gateway(&payment);
        gateway.amount = Decimal::new(1_000, 0);

        let result = check_gateway_record(&payment, &gateway);
        assert!(matches!(
            result,
            Err(ServiceError::Domain(DomainError::AmountMismatch { .. }))
        ));
    }

    #[test]
    fn test_gateway_record_rejects_other_order() {
        let payment = sample_payment();
        let mut gateway = sample_gateway(&payment);
        gateway.merchant_uid = "HOTEL_2_202608291200005678".to_string();

        assert!(check_gateway_record(&payment, &gateway).is_err());
    }

    #[test]
    fn test_gateway_record_rejects_unpaid_status() {
        let payment = sample_payment();
        let mut gateway = sample_gateway(&payment);
        gateway.status = "ready".to_string();

        assert!(check_gateway_record(&payment, &gateway).is_err());
    }
}
