//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// New account request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 4, max = 30, message = "Username must be 4-30 characters"))]
    pub username: String,

    #[validate(length(min = 2, max = 20, message = "Nickname must be 2-20 characters"))]
    pub nickname: String,

    #[validate(length(min = 9, max = 20, message = "Phone number must be 9-20 characters"))]
    pub phone_number: String,

    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Update profile request. Absent fields are left unchanged.
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 2, max = 20, message = "Nickname must be 2-20 characters"))]
    pub nickname: Option<String>,

    #[validate(length(min = 9, max = 20, message = "Phone number must be 9-20 characters"))]
    pub phone_number: Option<String>,

    pub profile_image: Option<String>,
}

/// Password change request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,

    pub new_password: String,
}

// ============================================================================
// Pet Requests
// ============================================================================

/// Register pet request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePetRequest {
    #[validate(length(min = 1, max = 30, message = "Pet name must be 1-30 characters"))]
    pub name: String,

    /// Species: DOG, CAT, or ETC
    pub animal: String,

    #[validate(length(max = 50, message = "Breed must be at most 50 characters"))]
    pub breed: Option<String>,

    /// MALE, FEMALE, or NEUTERED
    pub sex: String,

    pub birth_date: Option<NaiveDate>,

    pub weight_kg: Option<Decimal>,

    pub profile_image: Option<String>,
}

/// Update pet request. Absent fields are left unchanged.
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct UpdatePetRequest {
    #[validate(length(min = 1, max = 30, message = "Pet name must be 1-30 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 50, message = "Breed must be at most 50 characters"))]
    pub breed: Option<String>,

    pub sex: Option<String>,

    pub birth_date: Option<NaiveDate>,

    pub weight_kg: Option<Decimal>,

    pub profile_image: Option<String>,
}

// ============================================================================
// Feed Requests
// ============================================================================

/// Create feed post request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFeedRequest {
    #[validate(length(min = 1, max = 2000, message = "Content must be 1-2000 characters"))]
    pub content: String,

    pub image_url: Option<String>,
}

/// Update feed post request. Absent fields are left unchanged.
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct UpdateFeedRequest {
    #[validate(length(min = 1, max = 2000, message = "Content must be 1-2000 characters"))]
    pub content: Option<String>,

    pub image_url: Option<String>,
}

/// Create comment request. `parent_id` makes this a reply.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 500, message = "Content must be 1-500 characters"))]
    pub content: String,

    pub parent_id: Option<i64>,
}

/// Edit comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, max = 500, message = "Content must be 1-500 characters"))]
    pub content: String,
}

// ============================================================================
// Chat Requests
// ============================================================================

/// Open (or return the existing) chat room with another user
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OpenChatRoomRequest {
    #[validate(range(min = 1, message = "Invalid user id"))]
    pub other_user_id: i64,
}

/// Send chat message request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[validate(length(min = 1, max = 1000, message = "Message must be 1-1000 characters"))]
    pub content: String,
}

// ============================================================================
// Reservation / Payment Requests
// ============================================================================

/// Create hotel reservation request. Check-out is exclusive.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReservationRequest {
    #[validate(range(min = 1, message = "Invalid hotel id"))]
    pub hotel_id: i64,

    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

/// Client-side payment completion callback
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PaymentCompleteRequest {
    #[validate(length(min = 1, message = "imp_uid is required"))]
    pub imp_uid: String,

    #[validate(length(min = 1, message = "merchant_uid is required"))]
    pub merchant_uid: String,
}

/// Payment gateway webhook body
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentWebhookRequest {
    pub imp_uid: String,
    pub merchant_uid: String,
    pub status: String,
}

// ============================================================================
// Notification Requests
// ============================================================================

/// Register a device push token
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterDeviceRequest {
    #[validate(length(min = 1, max = 512, message = "Token must be 1-512 characters"))]
    pub token: String,
}

// ============================================================================
// Email Verification Requests
// ============================================================================

/// Request a verification code by email
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendVerificationRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Submit a verification code
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(equal = 6, message = "Code must be 6 digits"))]
    pub code: String,
}
