//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod chat;
pub mod comment;
pub mod context;
pub mod email_auth;
pub mod error;
pub mod feed;
pub mod hotel;
pub mod like;
pub mod notification;
pub mod payment;
pub mod pet;
pub mod reminder;
pub mod reservation;
pub mod user;

// Re-export all services for convenience
pub use auth::AuthService;
pub use chat::ChatService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use email_auth::EmailAuthService;
pub use error::{ServiceError, ServiceResult};
pub use feed::FeedService;
pub use hotel::HotelService;
pub use like::LikeService;
pub use notification::NotificationService;
pub use payment::PaymentService;
pub use pet::PetService;
pub use reminder::ReminderService;
pub use reservation::ReservationService;
pub use user::UserService;
