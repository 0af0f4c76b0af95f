//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Signup request
#[derive(Debug, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub nickname: String,
    pub phone_number: String,
    pub password: String,
}

impl SignupRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() % 1_000_000)
            .unwrap_or(0);
        Self {
            username: format!("testuser{now}{suffix}"),
            nickname: format!("nick{now}{suffix}"),
            phone_number: format!("010{now:06}{suffix:03}"),
            password: "TestPass123!".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_signup(signup: &SignupRequest) -> Self {
        Self {
            username: signup.username.clone(),
            password: signup.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub nickname: String,
    pub phone_number: String,
    pub profile_image: Option<String>,
    pub created_at: String,
}

/// Create pet request
#[derive(Debug, Serialize)]
pub struct CreatePetRequest {
    pub name: String,
    pub animal: String,
    pub breed: Option<String>,
    pub sex: String,
    pub birth_date: Option<String>,
    pub weight_kg: Option<String>,
    pub profile_image: Option<String>,
}

impl CreatePetRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("pet{suffix}"),
            animal: "DOG".to_string(),
            breed: Some("Maltese".to_string()),
            sex: "MALE".to_string(),
            birth_date: Some("2021-03-15".to_string()),
            weight_kg: Some("4.20".to_string()),
            profile_image: None,
        }
    }
}

/// Pet response
#[derive(Debug, Deserialize)]
pub struct PetResponse {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub animal: String,
    pub breed: Option<String>,
    pub sex: String,
}

/// Create feed request
#[derive(Debug, Serialize)]
pub struct CreateFeedRequest {
    pub content: String,
    pub image_url: Option<String>,
}

impl CreateFeedRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            content: format!("Feed content number {suffix}"),
            image_url: None,
        }
    }
}

/// Feed response
#[derive(Debug, Deserialize)]
pub struct FeedResponse {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
    pub image_url: Option<String>,
    pub view_count: i64,
    pub like_count: i64,
}

/// Paged response envelope
#[derive(Debug, Deserialize)]
pub struct PageResponse<T> {
    pub data: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub has_more: bool,
}

/// Comment response
#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: i64,
    pub feed_id: i64,
    pub user_id: i64,
    pub parent_id: Option<i64>,
    pub content: String,
}

/// Like toggle response
#[derive(Debug, Deserialize)]
pub struct LikeToggleResponse {
    pub liked: bool,
    pub like_count: i64,
}

/// Chat room response
#[derive(Debug, Deserialize)]
pub struct ChatRoomResponse {
    pub id: i64,
    pub other_user_id: i64,
    pub last_message: Option<String>,
}

/// Chat message response
#[derive(Debug, Deserialize)]
pub struct ChatMessageResponse {
    pub id: i64,
    pub room_id: i64,
    pub sender_id: i64,
    pub content: String,
}

/// Unread count response
#[derive(Debug, Deserialize)]
pub struct UnreadCountResponse {
    pub count: i64,
}

/// Username/nickname availability check response
#[derive(Debug, Deserialize)]
pub struct AvailabilityResponse {
    pub duplicate: bool,
}

/// Notification as returned by the list endpoint
#[derive(Debug, Deserialize)]
pub struct NotificationResponse {
    pub id: i64,
    pub notification_type: String,
    pub message: String,
    pub is_read: bool,
}

/// Verification sent response
#[derive(Debug, Deserialize)]
pub struct VerificationSentResponse {
    pub email: String,
    pub expires_at: String,
}

/// Error envelope returned by the API
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail inside the envelope
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
