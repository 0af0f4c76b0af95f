//! Hotel browsing handlers

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use petplace_service::{AvailableDateResponse, HotelResponse, HotelService, PageResponse};
use serde::Deserialize;

use crate::extractors::{AuthUser, HotelIdPath, Page};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Query parameters for the availability range
#[derive(Debug, Deserialize)]
pub struct AvailabilityParams {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// List hotels
///
/// GET /hotels
pub async fn list_hotels(
    State(state): State<AppState>,
    _auth: AuthUser,
    page: Page,
) -> ApiResult<Json<PageResponse<HotelResponse>>> {
    let service = HotelService::new(state.service_context());
    let response = service.list_hotels(page.0).await?;
    Ok(Json(response))
}

/// Get a hotel's details
///
/// GET /hotels/{hotel_id}
pub async fn get_hotel(
    State(state): State<AppState>,
    _auth: AuthUser,
    path: HotelIdPath,
) -> ApiResult<Json<HotelResponse>> {
    let service = HotelService::new(state.service_context());
    let response = service.get_hotel(path.hotel_id).await?;
    Ok(Json(response))
}

/// List a hotel's bookable dates within a range
///
/// GET /hotels/{hotel_id}/available-dates?from=YYYY-MM-DD&to=YYYY-MM-DD
pub async fn available_dates(
    State(state): State<AppState>,
    _auth: AuthUser,
    path: HotelIdPath,
    params: Result<Query<AvailabilityParams>, axum::extract::rejection::QueryRejection>,
) -> ApiResult<Json<Vec<AvailableDateResponse>>> {
    let Query(params) = params.map_err(|e| ApiError::invalid_query(e.to_string()))?;

    let service = HotelService::new(state.service_context());
    let response = service
        .available_dates(path.hotel_id, params.from, params.to)
        .await?;
    Ok(Json(response))
}
