//! # petplace-core
//!
//! Domain layer containing entities, domain errors, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    Animal, AvailableDate, ChatMessage, ChatRoom, Comment, DeviceToken, EmailVerification, Feed,
    Hotel, Like, Notification, NotificationType, Payment, PaymentMethod, PaymentStatus, Pet,
    RefType, RefreshToken, Reservation, ReservationStatus, Sex, User,
};
pub use error::DomainError;
pub use traits::{
    ChatRepository, CommentRepository, DeviceTokenRepository, EmailVerificationRepository,
    FeedRepository, FeedUpdate, HotelRepository, LikeRepository, NewComment, NewFeed,
    NewNotification, NewPayment, NewPet, NewReservation, NewUser, NotificationRepository,
    PageQuery, PaymentRepository, PetRepository, PetUpdate, RefreshTokenRepository, RepoResult,
    ReservationRepository, UserRepository, UserUpdate,
};
