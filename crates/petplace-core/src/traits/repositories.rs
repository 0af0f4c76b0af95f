//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde_json::Value;

use crate::entities::{
    Animal, AvailableDate, ChatMessage, ChatRoom, Comment, DeviceToken, EmailVerification, Feed,
    Hotel, Notification, NotificationType, Payment, PaymentMethod, Pet, RefType, RefreshToken,
    Reservation, ReservationStatus, Sex, User,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Offset pagination shared by the list queries
#[derive(Debug, Clone, Copy)]
pub struct PageQuery {
    pub page: u32,
    pub size: u32,
}

impl PageQuery {
    pub const MAX_SIZE: u32 = 100;

    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size: size.clamp(1, Self::MAX_SIZE),
        }
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: 0, size: 20 }
    }
}

// ============================================================================
// User Repository
// ============================================================================

/// Fields for creating a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub nickname: String,
    pub phone_number: String,
    pub password_hash: String,
}

/// Profile fields updatable by the user. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub nickname: Option<String>,
    pub phone_number: Option<String>,
    pub profile_image: Option<String>,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID (excludes soft-deleted accounts)
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Check if username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Check if nickname is already taken
    async fn nickname_exists(&self, nickname: &str) -> RepoResult<bool>;

    /// Check if phone number is already registered
    async fn phone_number_exists(&self, phone_number: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, new_user: &NewUser) -> RepoResult<User>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>>;

    /// Update profile fields
    async fn update_profile(&self, id: i64, update: &UserUpdate) -> RepoResult<User>;

    /// Update password hash
    async fn update_password(&self, id: i64, password_hash: &str) -> RepoResult<()>;

    /// Soft delete a user
    async fn soft_delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Refresh Token Repository
// ============================================================================

#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Replace the stored token for a user (one active token per user)
    async fn upsert(
        &self,
        user_id: i64,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> RepoResult<()>;

    /// Find a stored token by its value
    async fn find_by_token(&self, token: &str) -> RepoResult<Option<RefreshToken>>;

    /// Delete a token by its value, returning whether a row was removed
    async fn delete_by_token(&self, token: &str) -> RepoResult<bool>;

    /// Delete all tokens for a user (logout everywhere)
    async fn delete_for_user(&self, user_id: i64) -> RepoResult<()>;
}

// ============================================================================
// Pet Repository
// ============================================================================

/// Fields for registering a pet
#[derive(Debug, Clone)]
pub struct NewPet {
    pub user_id: i64,
    pub name: String,
    pub animal: Animal,
    pub breed: Option<String>,
    pub sex: Sex,
    pub birth_date: Option<NaiveDate>,
    pub weight_kg: Option<Decimal>,
    pub profile_image: Option<String>,
}

/// Pet fields updatable by the owner. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct PetUpdate {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub sex: Option<Sex>,
    pub birth_date: Option<NaiveDate>,
    pub weight_kg: Option<Decimal>,
    pub profile_image: Option<String>,
}

#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Find pet by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Pet>>;

    /// List all pets owned by a user
    async fn list_by_user(&self, user_id: i64) -> RepoResult<Vec<Pet>>;

    /// Register a new pet
    async fn create(&self, new_pet: &NewPet) -> RepoResult<Pet>;

    /// Update pet fields
    async fn update(&self, id: i64, update: &PetUpdate) -> RepoResult<Pet>;

    /// Delete a pet
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Feed Repository
// ============================================================================

/// Fields for creating a feed post
#[derive(Debug, Clone)]
pub struct NewFeed {
    pub user_id: i64,
    pub content: String,
    pub image_url: Option<String>,
}

/// Feed fields updatable by the author. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct FeedUpdate {
    pub content: Option<String>,
    pub image_url: Option<String>,
}

#[async_trait]
pub trait FeedRepository: Send + Sync {
    /// Find feed by ID (excludes soft-deleted posts)
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Feed>>;

    /// List feeds newest first
    async fn list(&self, page: &PageQuery) -> RepoResult<Vec<Feed>>;

    /// List feeds authored by a user, newest first
    async fn list_by_user(&self, user_id: i64, page: &PageQuery) -> RepoResult<Vec<Feed>>;

    /// List feeds with the highest like counts
    async fn list_popular(&self, limit: u32) -> RepoResult<Vec<Feed>>;

    /// List feeds a user has liked, most recently liked first
    async fn list_liked_by(&self, user_id: i64, page: &PageQuery) -> RepoResult<Vec<Feed>>;

    /// Create a new feed post
    async fn create(&self, new_feed: &NewFeed) -> RepoResult<Feed>;

    /// Update feed fields
    async fn update(&self, id: i64, update: &FeedUpdate) -> RepoResult<Feed>;

    /// Soft delete a feed
    async fn soft_delete(&self, id: i64) -> RepoResult<()>;

    /// Bump the view counter
    async fn increment_view_count(&self, id: i64) -> RepoResult<()>;

    /// Recompute like_count from the likes table, returning the new count
    async fn recount_likes(&self, id: i64) -> RepoResult<i64>;
}

// ============================================================================
// Comment Repository
// ============================================================================

/// Fields for creating a comment or reply
#[derive(Debug, Clone)]
pub struct NewComment {
    pub feed_id: i64,
    pub user_id: i64,
    pub parent_id: Option<i64>,
    pub content: String,
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID (excludes soft-deleted comments)
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Comment>>;

    /// List comments on a feed, oldest first
    async fn list_by_feed(&self, feed_id: i64) -> RepoResult<Vec<Comment>>;

    /// List comments written by a user, newest first
    async fn list_by_user(&self, user_id: i64, page: &PageQuery) -> RepoResult<Vec<Comment>>;

    /// Create a comment
    async fn create(&self, new_comment: &NewComment) -> RepoResult<Comment>;

    /// Update comment content
    async fn update_content(&self, id: i64, content: &str) -> RepoResult<Comment>;

    /// Soft delete a comment
    async fn soft_delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Like Repository
// ============================================================================

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Insert a like. Fails with `DomainError::DuplicateLike` if it exists.
    async fn insert(&self, feed_id: i64, user_id: i64) -> RepoResult<()>;

    /// Delete a like, returning whether a row was removed
    async fn delete(&self, feed_id: i64, user_id: i64) -> RepoResult<bool>;

    /// Check if a user has liked a feed
    async fn exists(&self, feed_id: i64, user_id: i64) -> RepoResult<bool>;
}

// ============================================================================
// Chat Repository
// ============================================================================

#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Find room by ID
    async fn find_room_by_id(&self, id: i64) -> RepoResult<Option<ChatRoom>>;

    /// Find the room for an ordered user pair (low id first)
    async fn find_room_by_pair(
        &self,
        user_low_id: i64,
        user_high_id: i64,
    ) -> RepoResult<Option<ChatRoom>>;

    /// Create a room for an ordered user pair
    async fn create_room(&self, user_low_id: i64, user_high_id: i64) -> RepoResult<ChatRoom>;

    /// List rooms a user participates in, most recent activity first
    async fn list_rooms_for_user(&self, user_id: i64) -> RepoResult<Vec<ChatRoom>>;

    /// Store a message and update the room's last_message in one transaction
    async fn create_message(
        &self,
        room_id: i64,
        sender_id: i64,
        content: &str,
    ) -> RepoResult<ChatMessage>;

    /// List messages in a room, newest first
    async fn list_messages(&self, room_id: i64, page: &PageQuery)
        -> RepoResult<Vec<ChatMessage>>;
}

// ============================================================================
// Hotel Repository
// ============================================================================

#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// Find hotel by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Hotel>>;

    /// List hotels
    async fn list(&self, page: &PageQuery) -> RepoResult<Vec<Hotel>>;

    /// List bookable dates for a hotel in a range (inclusive)
    async fn available_dates(
        &self,
        hotel_id: i64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> RepoResult<Vec<AvailableDate>>;

    /// Atomically mark the given dates booked. Fails with
    /// `DomainError::DatesUnavailable` unless every date was free.
    async fn book_dates(&self, hotel_id: i64, dates: &[NaiveDate]) -> RepoResult<()>;

    /// Mark the given dates free again (reservation cancelled)
    async fn release_dates(&self, hotel_id: i64, dates: &[NaiveDate]) -> RepoResult<()>;
}

// ============================================================================
// Reservation Repository
// ============================================================================

/// Fields for creating a reservation
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub user_id: i64,
    pub hotel_id: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub total_price: Decimal,
    pub merchant_uid: String,
}

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Find reservation by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Reservation>>;

    /// Find reservation by merchant UID
    async fn find_by_merchant_uid(&self, merchant_uid: &str) -> RepoResult<Option<Reservation>>;

    /// List reservations made by a user, newest first
    async fn list_by_user(&self, user_id: i64) -> RepoResult<Vec<Reservation>>;

    /// Confirmed reservations with a check-in inside the date range, inclusive
    async fn list_confirmed_checking_in(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> RepoResult<Vec<Reservation>>;

    /// Create a pending reservation
    async fn create(&self, new_reservation: &NewReservation) -> RepoResult<Reservation>;

    /// Transition reservation status
    async fn update_status(&self, id: i64, status: ReservationStatus) -> RepoResult<()>;
}

// ============================================================================
// Payment Repository
// ============================================================================

/// Fields for creating a pending payment
#[derive(Debug, Clone)]
pub struct NewPayment {
    pub reservation_id: i64,
    pub merchant_uid: String,
    pub amount: Decimal,
}

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Find payment by reservation
    async fn find_by_reservation(&self, reservation_id: i64) -> RepoResult<Option<Payment>>;

    /// Find payment by merchant UID
    async fn find_by_merchant_uid(&self, merchant_uid: &str) -> RepoResult<Option<Payment>>;

    /// Find payment by gateway transaction ID
    async fn find_by_imp_uid(&self, imp_uid: &str) -> RepoResult<Option<Payment>>;

    /// Create a pending payment
    async fn create(&self, new_payment: &NewPayment) -> RepoResult<Payment>;

    /// Mark a payment paid with the gateway transaction details
    async fn mark_paid(
        &self,
        merchant_uid: &str,
        imp_uid: &str,
        method: PaymentMethod,
        paid_at: DateTime<Utc>,
    ) -> RepoResult<Payment>;

    /// Mark a payment cancelled
    async fn mark_cancelled(&self, merchant_uid: &str) -> RepoResult<()>;

    /// Mark a payment failed
    async fn mark_failed(&self, merchant_uid: &str) -> RepoResult<()>;
}

// ============================================================================
// Notification Repository
// ============================================================================

/// Fields for creating a notification
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub user_id: i64,
    pub notification_type: NotificationType,
    pub ref_type: RefType,
    pub ref_id: i64,
    pub message: String,
    pub data: Option<Value>,
}

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Store a notification
    async fn create(&self, new_notification: &NewNotification) -> RepoResult<Notification>;

    /// List notifications for a user, newest first
    async fn list_by_user(
        &self,
        user_id: i64,
        page: &PageQuery,
    ) -> RepoResult<Vec<Notification>>;

    /// Mark one notification read; the user filter prevents cross-user reads
    async fn mark_read(&self, id: i64, user_id: i64) -> RepoResult<()>;

    /// Mark all of a user's notifications read, returning the number updated
    async fn mark_all_read(&self, user_id: i64) -> RepoResult<u64>;

    /// Count unread notifications
    async fn unread_count(&self, user_id: i64) -> RepoResult<i64>;

    /// Delete one notification; the user filter prevents cross-user deletes
    async fn delete(&self, id: i64, user_id: i64) -> RepoResult<()>;
}

// ============================================================================
// Device Token Repository
// ============================================================================

#[async_trait]
pub trait DeviceTokenRepository: Send + Sync {
    /// Register or refresh a push token for a user
    async fn upsert(&self, user_id: i64, token: &str) -> RepoResult<DeviceToken>;

    /// Deactivate a push token
    async fn deactivate(&self, user_id: i64, token: &str) -> RepoResult<()>;

    /// List active push tokens for a user
    async fn active_tokens(&self, user_id: i64) -> RepoResult<Vec<String>>;
}

// ============================================================================
// Email Verification Repository
// ============================================================================

#[async_trait]
pub trait EmailVerificationRepository: Send + Sync {
    /// Store a freshly issued code
    async fn create(
        &self,
        email: &str,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> RepoResult<EmailVerification>;

    /// Find the most recent record matching email and code
    async fn find_latest(&self, email: &str, code: &str)
        -> RepoResult<Option<EmailVerification>>;

    /// Consume a code
    async fn mark_used(&self, id: i64) -> RepoResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_offset() {
        let page = PageQuery::new(2, 20);
        assert_eq!(page.offset(), 40);
        assert_eq!(page.limit(), 20);
    }

    #[test]
    fn test_page_query_clamps_size() {
        let page = PageQuery::new(0, 1000);
        assert_eq!(page.limit(), i64::from(PageQuery::MAX_SIZE));

        let page = PageQuery::new(0, 0);
        assert_eq!(page.limit(), 1);
    }
}
