//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{
    auth, chat, email_auth, feeds, health, hotels, notifications, payments, pets, reservations,
    users,
};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(pet_routes())
        .merge(feed_routes())
        .merge(chat_routes())
        .merge(hotel_routes())
        .merge(reservation_routes())
        .merge(payment_routes())
        .merge(notification_routes())
        .merge(email_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/auth/logout", post(auth::logout))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(users::get_me))
        .route("/users/me", patch(users::update_me))
        .route("/users/me", delete(users::delete_me))
        .route("/users/me/password", put(users::change_password))
        .route(
            "/users/check-username/:username",
            get(users::check_username),
        )
        .route(
            "/users/check-nickname/:nickname",
            get(users::check_nickname),
        )
        .route("/users/:user_id", get(users::get_user))
        .route("/users/:user_id/feeds", get(users::list_user_feeds))
}

/// Pet routes
fn pet_routes() -> Router<AppState> {
    Router::new()
        .route("/pets", post(pets::create_pet))
        .route("/pets", get(pets::list_pets))
        .route("/pets/:pet_id", get(pets::get_pet))
        .route("/pets/:pet_id", patch(pets::update_pet))
        .route("/pets/:pet_id", delete(pets::delete_pet))
}

/// Feed, comment, and like routes
fn feed_routes() -> Router<AppState> {
    Router::new()
        .route("/feeds", post(feeds::create_feed))
        .route("/feeds", get(feeds::list_feeds))
        .route("/feeds/popular", get(feeds::list_popular_feeds))
        .route("/feeds/liked", get(feeds::list_liked_feeds))
        .route("/feeds/:feed_id", get(feeds::get_feed))
        .route("/feeds/:feed_id", patch(feeds::update_feed))
        .route("/feeds/:feed_id", delete(feeds::delete_feed))
        .route("/feeds/:feed_id/comments", post(feeds::create_comment))
        .route("/feeds/:feed_id/comments", get(feeds::list_comments))
        .route("/feeds/:feed_id/likes", post(feeds::toggle_like))
        .route("/comments/me", get(feeds::list_my_comments))
        .route("/comments/:comment_id", patch(feeds::update_comment))
        .route("/comments/:comment_id", delete(feeds::delete_comment))
}

/// Chat routes
fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/chat/rooms", post(chat::open_room))
        .route("/chat/rooms", get(chat::list_rooms))
        .route("/chat/rooms/:room_id/messages", post(chat::send_message))
        .route("/chat/rooms/:room_id/messages", get(chat::list_messages))
}

/// Hotel routes
fn hotel_routes() -> Router<AppState> {
    Router::new()
        .route("/hotels", get(hotels::list_hotels))
        .route("/hotels/:hotel_id", get(hotels::get_hotel))
        .route(
            "/hotels/:hotel_id/available-dates",
            get(hotels::available_dates),
        )
}

/// Reservation routes
fn reservation_routes() -> Router<AppState> {
    Router::new()
        .route("/reservations", post(reservations::create_reservation))
        .route("/reservations", get(reservations::list_reservations))
        .route(
            "/reservations/:reservation_id",
            get(reservations::get_reservation),
        )
        .route(
            "/reservations/:reservation_id",
            delete(reservations::cancel_reservation),
        )
        .route(
            "/reservations/:reservation_id/payment",
            get(reservations::get_reservation_payment),
        )
}

/// Payment routes (the gateway calls the webhook without credentials)
fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/payments/complete", post(payments::complete_payment))
        .route("/payments/webhook", post(payments::payment_webhook))
        .route(
            "/payments/:merchant_uid",
            get(payments::get_payment_by_merchant_uid),
        )
}

/// Notification routes
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(notifications::list_notifications))
        .route(
            "/notifications/read-all",
            patch(notifications::mark_all_read),
        )
        .route(
            "/notifications/unread-count",
            get(notifications::unread_count),
        )
        .route(
            "/notifications/:notification_id/read",
            patch(notifications::mark_read),
        )
        .route(
            "/notifications/:notification_id",
            delete(notifications::delete_notification),
        )
        .route(
            "/notifications/devices",
            post(notifications::register_device),
        )
        .route(
            "/notifications/devices",
            delete(notifications::unregister_device),
        )
}

/// Email verification routes
fn email_routes() -> Router<AppState> {
    Router::new()
        .route("/email/verification", post(email_auth::send_verification))
        .route(
            "/email/verification/confirm",
            post(email_auth::confirm_verification),
        )
}
