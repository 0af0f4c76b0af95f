//! Database models - structs mapping directly to table rows

mod chat;
mod comment;
mod device_token;
mod email_verification;
mod feed;
mod hotel;
mod like;
mod notification;
mod payment;
mod pet;
mod refresh_token;
mod reservation;
mod user;

pub use chat::{ChatMessageModel, ChatRoomModel};
pub use comment::CommentModel;
pub use device_token::DeviceTokenModel;
pub use email_verification::EmailVerificationModel;
pub use feed::FeedModel;
pub use hotel::{AvailableDateModel, HotelModel};
pub use like::LikeModel;
pub use notification::NotificationModel;
pub use payment::PaymentModel;
pub use pet::PetModel;
pub use refresh_token::RefreshTokenModel;
pub use reservation::ReservationModel;
pub use user::UserModel;
