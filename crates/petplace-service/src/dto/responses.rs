//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Paginated response with offset-based pagination
#[derive(Debug, Serialize)]
pub struct PageResponse<T> {
    pub data: Vec<T>,
    pub page: u32,
    pub size: u32,
    /// Whether a next page may exist (the page came back full)
    pub has_more: bool,
}

impl<T> PageResponse<T> {
    pub fn new(data: Vec<T>, page: u32, size: u32) -> Self {
        let has_more = data.len() as u32 >= size;
        Self {
            data,
            page,
            size,
            has_more,
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens and the authenticated user
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: UserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub nickname: String,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Public view of another user (no contact details)
#[derive(Debug, Clone, Serialize)]
pub struct PublicUserResponse {
    pub id: i64,
    pub nickname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

/// Result of a username or nickname pre-signup check
#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityResponse {
    pub duplicate: bool,
}

// ============================================================================
// Pet Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct PetResponse {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub animal: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    pub sex: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Feed Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct FeedResponse {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub view_count: i64,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: i64,
    pub feed_id: i64,
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Result of a like toggle
#[derive(Debug, Serialize)]
pub struct LikeToggleResponse {
    pub liked: bool,
    pub like_count: i64,
}

// ============================================================================
// Chat Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ChatRoomResponse {
    pub id: i64,
    pub other_user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_message_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessageResponse {
    pub id: i64,
    pub room_id: i64,
    pub sender_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Hotel / Reservation / Payment Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct HotelResponse {
    pub id: i64,
    pub name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price_per_night: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AvailableDateResponse {
    pub date: NaiveDate,
    pub is_booked: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReservationResponse {
    pub id: i64,
    pub user_id: i64,
    pub hotel_id: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub total_price: Decimal,
    pub status: String,
    pub merchant_uid: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentResponse {
    pub id: i64,
    pub reservation_id: i64,
    pub merchant_uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imp_uid: Option<String>,
    pub amount: Decimal,
    pub method: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Notification Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub id: i64,
    pub notification_type: String,
    pub ref_type: String,
    pub ref_id: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct UnreadCountResponse {
    pub count: i64,
}

// ============================================================================
// Email Verification Responses
// ============================================================================

/// Issued verification code metadata (the code itself goes out by mail)
#[derive(Debug, Serialize)]
pub struct VerificationSentResponse {
    pub email: String,
    pub expires_at: DateTime<Utc>,
}
