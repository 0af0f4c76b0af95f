//! Error handling utilities for repositories

use petplace_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: i64) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "pet not found" error
pub fn pet_not_found(id: i64) -> DomainError {
    DomainError::PetNotFound(id)
}

/// Create a "feed not found" error
pub fn feed_not_found(id: i64) -> DomainError {
    DomainError::FeedNotFound(id)
}

/// Create a "comment not found" error
pub fn comment_not_found(id: i64) -> DomainError {
    DomainError::CommentNotFound(id)
}

/// Create a "room not found" error
pub fn room_not_found(id: i64) -> DomainError {
    DomainError::RoomNotFound(id)
}

/// Create a "reservation not found" error
pub fn reservation_not_found(id: i64) -> DomainError {
    DomainError::ReservationNotFound(id)
}

/// Create a "payment not found" error
pub fn payment_not_found(merchant_uid: &str) -> DomainError {
    DomainError::PaymentNotFound(merchant_uid.to_string())
}
