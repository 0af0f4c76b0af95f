//! PostgreSQL repository implementations

mod chat;
mod comment;
mod device_token;
mod email_verification;
pub(crate) mod error;
mod feed;
mod hotel;
mod like;
mod notification;
mod payment;
mod pet;
mod refresh_token;
mod reservation;
mod user;

pub use chat::PgChatRepository;
pub use comment::PgCommentRepository;
pub use device_token::PgDeviceTokenRepository;
pub use email_verification::PgEmailVerificationRepository;
pub use feed::PgFeedRepository;
pub use hotel::PgHotelRepository;
pub use like::PgLikeRepository;
pub use notification::PgNotificationRepository;
pub use payment::PgPaymentRepository;
pub use pet::PgPetRepository;
pub use refresh_token::PgRefreshTokenRepository;
pub use reservation::PgReservationRepository;
pub use user::PgUserRepository;
