//! Hotel catalog service

use chrono::NaiveDate;
use tracing::instrument;

use petplace_core::traits::PageQuery;
use petplace_core::DomainError;

use crate::dto::{AvailableDateResponse, HotelResponse, PageResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Hotel catalog service
pub struct HotelService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HotelService<'a> {
    /// Create a new HotelService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List hotels
    #[instrument(skip(self))]
    pub async fn list_hotels(&self, page: PageQuery) -> ServiceResult<PageResponse<HotelResponse>> {
        let hotels = self.ctx.hotel_repo().list(&page).await?;
        Ok(PageResponse::new(
            hotels.into_iter().map(HotelResponse::from).collect(),
            page.page,
            page.size,
        ))
    }

    /// Get one hotel
    #[instrument(skip(self))]
    pub async fn get_hotel(&self, hotel_id: i64) -> ServiceResult<HotelResponse> {
        let hotel = self
            .ctx
            .hotel_repo()
            .find_by_id(hotel_id)
            .await?
            .ok_or(DomainError::HotelNotFound(hotel_id))?;

        Ok(HotelResponse::from(hotel))
    }

    /// List a hotel's bookable dates in an inclusive range
    #[instrument(skip(self))]
    pub async fn available_dates(
        &self,
        hotel_id: i64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> ServiceResult<Vec<AvailableDateResponse>> {
        if from > to {
            return Err(DomainError::InvalidDateRange.into());
        }

        self.ctx
            .hotel_repo()
            .find_by_id(hotel_id)
            .await?
            .ok_or(DomainError::HotelNotFound(hotel_id))?;

        let dates = self.ctx.hotel_repo().available_dates(hotel_id, from, to).await?;
        Ok(dates.into_iter().map(AvailableDateResponse::from).collect())
    }
}
