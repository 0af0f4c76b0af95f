//! # petplace-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod clients;
pub mod dto;
pub mod services;

pub use dto::*;
pub use services::{
    AuthService, ChatService, CommentService, EmailAuthService, FeedService, HotelService,
    LikeService, NotificationService, PaymentService, PetService, ReservationService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};
