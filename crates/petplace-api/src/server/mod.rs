//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use petplace_common::{AppConfig, AppError, JwtService};
use petplace_db::{
    create_pool, run_migrations, PgChatRepository, PgCommentRepository, PgDeviceTokenRepository,
    PgEmailVerificationRepository, PgFeedRepository, PgHotelRepository, PgLikeRepository,
    PgNotificationRepository, PgPaymentRepository, PgPetRepository, PgRefreshTokenRepository,
    PgReservationRepository, PgUserRepository,
};
use petplace_service::clients::{FcmClient, MailClient, PortOneClient};
use petplace_service::services::reminder;
use petplace_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware_with_config;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health routes are merged after the middleware stack so probes bypass
/// rate limiting.
pub fn create_app(state: AppState) -> Router {
    let config = state.config().clone();

    let router = create_router();
    let router = apply_middleware_with_config(
        router,
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );

    router.merge(health_routes()).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = petplace_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Database migrations applied");

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    ));

    // Create outbound clients
    let portone = Arc::new(
        PortOneClient::from_config(&config.payment)
            .map_err(|e| AppError::Config(e.to_string()))?,
    );
    let fcm = Arc::new(
        FcmClient::from_config(&config.push).map_err(|e| AppError::Config(e.to_string()))?,
    );
    let mail = Arc::new(
        MailClient::from_config(&config.mail).map_err(|e| AppError::Config(e.to_string()))?,
    );

    // Create repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let refresh_token_repo = Arc::new(PgRefreshTokenRepository::new(pool.clone()));
    let pet_repo = Arc::new(PgPetRepository::new(pool.clone()));
    let feed_repo = Arc::new(PgFeedRepository::new(pool.clone()));
    let comment_repo = Arc::new(PgCommentRepository::new(pool.clone()));
    let like_repo = Arc::new(PgLikeRepository::new(pool.clone()));
    let chat_repo = Arc::new(PgChatRepository::new(pool.clone()));
    let hotel_repo = Arc::new(PgHotelRepository::new(pool.clone()));
    let reservation_repo = Arc::new(PgReservationRepository::new(pool.clone()));
    let payment_repo = Arc::new(PgPaymentRepository::new(pool.clone()));
    let notification_repo = Arc::new(PgNotificationRepository::new(pool.clone()));
    let device_token_repo = Arc::new(PgDeviceTokenRepository::new(pool.clone()));
    let email_verification_repo = Arc::new(PgEmailVerificationRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .user_repo(user_repo)
        .refresh_token_repo(refresh_token_repo)
        .pet_repo(pet_repo)
        .feed_repo(feed_repo)
        .comment_repo(comment_repo)
        .like_repo(like_repo)
        .chat_repo(chat_repo)
        .hotel_repo(hotel_repo)
        .reservation_repo(reservation_repo)
        .payment_repo(payment_repo)
        .notification_repo(notification_repo)
        .device_token_repo(device_token_repo)
        .email_verification_repo(email_verification_repo)
        .jwt_service(jwt_service)
        .portone(portone)
        .fcm(fcm)
        .mail(mail)
        .webhook_secret(config.payment.webhook_secret.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    let state = create_app_state(config).await?;

    // Daily check-in reminder job runs beside the server
    tokio::spawn(reminder::run_daily(state.service_context_handle()));

    let app = create_app(state);

    run_server(app, addr).await
}
