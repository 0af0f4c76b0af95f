//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    ChangePasswordRequest, CreateCommentRequest, CreateFeedRequest, CreatePetRequest,
    CreateReservationRequest, LoginRequest, OpenChatRoomRequest, PaymentCompleteRequest,
    PaymentWebhookRequest, RefreshTokenRequest, RegisterDeviceRequest, SendMessageRequest,
    SendVerificationRequest, SignupRequest, UpdateCommentRequest, UpdateFeedRequest,
    UpdatePetRequest, UpdateProfileRequest, VerifyCodeRequest,
};

// Re-export commonly used response types
pub use responses::{
    ApiResponse, AuthResponse, AvailabilityResponse, AvailableDateResponse, ChatMessageResponse,
    ChatRoomResponse, CommentResponse, FeedResponse, HotelResponse, LikeToggleResponse,
    NotificationResponse, PageResponse, PaymentResponse, PetResponse, PublicUserResponse,
    ReservationResponse, UnreadCountResponse, UserResponse, VerificationSentResponse,
};
