//! Hotel reservation handlers

use axum::{extract::State, Json};
use petplace_service::{
    CreateReservationRequest, PaymentResponse, PaymentService, ReservationResponse,
    ReservationService,
};

use crate::extractors::{AuthUser, ReservationIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create a reservation, holding the stay dates
///
/// POST /reservations
pub async fn create_reservation(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateReservationRequest>,
) -> ApiResult<Created<Json<ReservationResponse>>> {
    let service = ReservationService::new(state.service_context());
    let response = service.create_reservation(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// List the current user's reservations
///
/// GET /reservations
pub async fn list_reservations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<ReservationResponse>>> {
    let service = ReservationService::new(state.service_context());
    let response = service.list_my_reservations(auth.user_id).await?;
    Ok(Json(response))
}

/// Get one reservation; owner only
///
/// GET /reservations/{reservation_id}
pub async fn get_reservation(
    State(state): State<AppState>,
    auth: AuthUser,
    path: ReservationIdPath,
) -> ApiResult<Json<ReservationResponse>> {
    let service = ReservationService::new(state.service_context());
    let response = service
        .get_reservation(auth.user_id, path.reservation_id)
        .await?;
    Ok(Json(response))
}

/// Cancel a reservation, refunding when already paid; owner only
///
/// DELETE /reservations/{reservation_id}
pub async fn cancel_reservation(
    State(state): State<AppState>,
    auth: AuthUser,
    path: ReservationIdPath,
) -> ApiResult<Json<ReservationResponse>> {
    let service = ReservationService::new(state.service_context());
    let response = service
        .cancel_reservation(auth.user_id, path.reservation_id)
        .await?;
    Ok(Json(response))
}

/// Get the payment attached to a reservation; owner only
///
/// GET /reservations/{reservation_id}/payment
pub async fn get_reservation_payment(
    State(state): State<AppState>,
    auth: AuthUser,
    path: ReservationIdPath,
) -> ApiResult<Json<PaymentResponse>> {
    let service = PaymentService::new(state.service_context());
    let response = service
        .get_payment(auth.user_id, path.reservation_id)
        .await?;
    Ok(Json(response))
}
