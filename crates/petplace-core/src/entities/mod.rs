//! Domain entities

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

pub use chat::{ChatMessage, ChatRoom};
pub use comment::Comment;
pub use device_token::DeviceToken;
pub use email_verification::EmailVerification;
pub use feed::Feed;
pub use hotel::{AvailableDate, Hotel};
pub use like::Like;
pub use notification::{Notification, NotificationType, RefType};
pub use payment::{Payment, PaymentMethod, PaymentStatus};
pub use pet::{Animal, Pet, Sex};
pub use refresh_token::RefreshToken;
pub use reservation::{Reservation, ReservationStatus};
pub use user::User;
