//! Payment handlers
//!
//! Client-side completion callback and the gateway webhook. The webhook
//! reads the raw body so its HMAC signature can be checked before the JSON
//! is trusted.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use petplace_service::{
    PaymentCompleteRequest, PaymentResponse, PaymentService, PaymentWebhookRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Signature header sent by the gateway
const WEBHOOK_SIGNATURE_HEADER: &str = "x-webhook-signature";
/// Timestamp header sent by the gateway
const WEBHOOK_TIMESTAMP_HEADER: &str = "x-webhook-timestamp";

/// Verify a client-reported payment with the gateway and confirm it
///
/// POST /payments/complete
pub async fn complete_payment(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<PaymentCompleteRequest>,
) -> ApiResult<Json<PaymentResponse>> {
    let service = PaymentService::new(state.service_context());
    let response = service.complete(auth.user_id, request).await?;
    Ok(Json(response))
}

/// Look up a payment by merchant UID; owner only
///
/// GET /payments/{merchant_uid}
pub async fn get_payment_by_merchant_uid(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(merchant_uid): Path<String>,
) -> ApiResult<Json<PaymentResponse>> {
    let service = PaymentService::new(state.service_context());
    let response = service
        .get_by_merchant_uid(auth.user_id, &merchant_uid)
        .await?;
    Ok(Json(response))
}

/// Gateway webhook; unauthenticated, signature-checked when configured
///
/// POST /payments/webhook
pub async fn payment_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> ApiResult<StatusCode> {
    let signature = headers
        .get(WEBHOOK_SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok());
    let timestamp = headers
        .get(WEBHOOK_TIMESTAMP_HEADER)
        .and_then(|v| v.to_str().ok());

    let request: PaymentWebhookRequest =
        serde_json::from_str(&body).map_err(|e| ApiError::invalid_query(e.to_string()))?;

    let service = PaymentService::new(state.service_context());
    service.webhook(signature, timestamp, &body, request).await?;
    Ok(StatusCode::OK)
}
