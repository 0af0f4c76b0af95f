//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Pet not found: {0}")]
    PetNotFound(i64),

    #[error("Feed not found: {0}")]
    FeedNotFound(i64),

    #[error("Comment not found: {0}")]
    CommentNotFound(i64),

    #[error("Chat room not found: {0}")]
    RoomNotFound(i64),

    #[error("Hotel not found: {0}")]
    HotelNotFound(i64),

    #[error("Reservation not found: {0}")]
    ReservationNotFound(i64),

    #[error("Payment not found: {0}")]
    PaymentNotFound(String),

    #[error("No verification code found for {0}")]
    VerificationNotFound(String),

    #[error("Notification not found: {0}")]
    NotificationNotFound(i64),

    #[error("Device token not found")]
    DeviceTokenNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    #[error("Invalid date range")]
    InvalidDateRange,

    #[error("Comments can only be nested one level deep")]
    ReplyTooDeep,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Not the owner of this resource")]
    NotResourceOwner,

    #[error("Not a participant of this chat room")]
    NotRoomParticipant,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already in use")]
    DuplicateUsername,

    #[error("Nickname already in use")]
    DuplicateNickname,

    #[error("Phone number already in use")]
    DuplicatePhoneNumber,

    #[error("Pet with this name already registered")]
    DuplicatePetName,

    #[error("Already liked this feed")]
    DuplicateLike,

    #[error("Verification code already used")]
    VerificationAlreadyUsed,

    #[error("Payment already processed: {0}")]
    DuplicatePayment(String),

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Requested dates are not available")]
    DatesUnavailable,

    #[error("Reservation cannot be cancelled in state {0}")]
    ReservationNotCancellable(String),

    #[error("Payment amount mismatch: expected {expected}, got {actual}")]
    AmountMismatch { expected: String, actual: String },

    #[error("Verification code has expired")]
    VerificationExpired,

    #[error("Cannot open a chat room with yourself")]
    SelfChatRoom,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::PetNotFound(_) => "UNKNOWN_PET",
            Self::FeedNotFound(_) => "UNKNOWN_FEED",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::RoomNotFound(_) => "UNKNOWN_ROOM",
            Self::HotelNotFound(_) => "UNKNOWN_HOTEL",
            Self::ReservationNotFound(_) => "UNKNOWN_RESERVATION",
            Self::PaymentNotFound(_) => "UNKNOWN_PAYMENT",
            Self::VerificationNotFound(_) => "UNKNOWN_VERIFICATION",
            Self::NotificationNotFound(_) => "UNKNOWN_NOTIFICATION",
            Self::DeviceTokenNotFound => "UNKNOWN_DEVICE_TOKEN",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::InvalidDateRange => "INVALID_DATE_RANGE",
            Self::ReplyTooDeep => "REPLY_TOO_DEEP",

            // Authorization
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidRefreshToken => "INVALID_REFRESH_TOKEN",
            Self::NotResourceOwner => "NOT_RESOURCE_OWNER",
            Self::NotRoomParticipant => "NOT_ROOM_PARTICIPANT",

            // Conflict
            Self::DuplicateUsername => "DUPLICATE_USERNAME",
            Self::DuplicateNickname => "DUPLICATE_NICKNAME",
            Self::DuplicatePhoneNumber => "DUPLICATE_PHONE_NUMBER",
            Self::DuplicatePetName => "DUPLICATE_PET_NAME",
            Self::DuplicateLike => "DUPLICATE_LIKE",
            Self::VerificationAlreadyUsed => "VERIFICATION_ALREADY_USED",
            Self::DuplicatePayment(_) => "DUPLICATE_PAYMENT",

            // Business Rules
            Self::DatesUnavailable => "DATES_UNAVAILABLE",
            Self::ReservationNotCancellable(_) => "RESERVATION_NOT_CANCELLABLE",
            Self::AmountMismatch { .. } => "AMOUNT_MISMATCH",
            Self::VerificationExpired => "VERIFICATION_EXPIRED",
            Self::SelfChatRoom => "SELF_CHAT_ROOM",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::ExternalServiceError(_) => "EXTERNAL_SERVICE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::PetNotFound(_)
                | Self::FeedNotFound(_)
                | Self::CommentNotFound(_)
                | Self::RoomNotFound(_)
                | Self::HotelNotFound(_)
                | Self::ReservationNotFound(_)
                | Self::PaymentNotFound(_)
                | Self::VerificationNotFound(_)
                | Self::NotificationNotFound(_)
                | Self::DeviceTokenNotFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::WeakPassword(_)
                | Self::ContentTooLong { .. }
                | Self::InvalidDateRange
                | Self::ReplyTooDeep
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials
                | Self::InvalidRefreshToken
                | Self::NotResourceOwner
                | Self::NotRoomParticipant
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::DuplicateUsername
                | Self::DuplicateNickname
                | Self::DuplicatePhoneNumber
                | Self::DuplicatePetName
                | Self::DuplicateLike
                | Self::VerificationAlreadyUsed
                | Self::DuplicatePayment(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::UserNotFound(1);
        assert_eq!(err.code(), "UNKNOWN_USER");

        let err = DomainError::DuplicateLike;
        assert_eq!(err.code(), "DUPLICATE_LIKE");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::UserNotFound(1).is_not_found());
        assert!(DomainError::HotelNotFound(7).is_not_found());
        assert!(!DomainError::DuplicateUsername.is_not_found());
    }

    #[test]
    fn test_is_authorization() {
        assert!(DomainError::NotResourceOwner.is_authorization());
        assert!(DomainError::InvalidRefreshToken.is_authorization());
        assert!(!DomainError::FeedNotFound(1).is_authorization());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::UserNotFound(123);
        assert_eq!(err.to_string(), "User not found: 123");

        let err = DomainError::ContentTooLong { max: 2000 };
        assert_eq!(err.to_string(), "Content too long: max 2000 characters");
    }
}
