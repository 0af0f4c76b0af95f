//! Hotel model -> entity mappers

use petplace_core::entities::{AvailableDate, Hotel};

use crate::models::{AvailableDateModel, HotelModel};

impl From<HotelModel> for Hotel {
    fn from(model: HotelModel) -> Self {
        Hotel {
            id: model.id,
            name: model.name,
            address: model.address,
            description: model.description,
            price_per_night: model.price_per_night,
            image_url: model.image_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<AvailableDateModel> for AvailableDate {
    fn from(model: AvailableDateModel) -> Self {
        AvailableDate {
            id: model.id,
            hotel_id: model.hotel_id,
            date: model.date,
            is_booked: model.is_booked,
        }
    }
}
