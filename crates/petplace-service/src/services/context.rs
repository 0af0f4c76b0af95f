//! Service context - dependency container for services
//!
//! Holds the repositories, auth services, and outbound clients that the
//! service layer needs.

use std::sync::Arc;

use petplace_common::auth::JwtService;
use petplace_core::traits::{
    ChatRepository, CommentRepository, DeviceTokenRepository, EmailVerificationRepository,
    FeedRepository, HotelRepository, LikeRepository, NotificationRepository, PaymentRepository,
    PetRepository, RefreshTokenRepository, ReservationRepository, UserRepository,
};
use petplace_db::PgPool;

use crate::clients::{FcmClient, MailClient, PortOneClient};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    refresh_token_repo: Arc<dyn RefreshTokenRepository>,
    pet_repo: Arc<dyn PetRepository>,
    feed_repo: Arc<dyn FeedRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    like_repo: Arc<dyn LikeRepository>,
    chat_repo: Arc<dyn ChatRepository>,
    hotel_repo: Arc<dyn HotelRepository>,
    reservation_repo: Arc<dyn ReservationRepository>,
    payment_repo: Arc<dyn PaymentRepository>,
    notification_repo: Arc<dyn NotificationRepository>,
    device_token_repo: Arc<dyn DeviceTokenRepository>,
    email_verification_repo: Arc<dyn EmailVerificationRepository>,

    // Auth
    jwt_service: Arc<JwtService>,

    // Outbound clients
    portone: Arc<PortOneClient>,
    fcm: Arc<FcmClient>,
    mail: Arc<MailClient>,

    /// Shared secret for payment webhook signatures, when configured
    webhook_secret: Option<String>,
}

impl ServiceContext {
    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn refresh_token_repo(&self) -> &dyn RefreshTokenRepository {
        self.refresh_token_repo.as_ref()
    }

    pub fn pet_repo(&self) -> &dyn PetRepository {
        self.pet_repo.as_ref()
    }

    pub fn feed_repo(&self) -> &dyn FeedRepository {
        self.feed_repo.as_ref()
    }

    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    pub fn like_repo(&self) -> &dyn LikeRepository {
        self.like_repo.as_ref()
    }

    pub fn chat_repo(&self) -> &dyn ChatRepository {
        self.chat_repo.as_ref()
    }

    pub fn hotel_repo(&self) -> &dyn HotelRepository {
        self.hotel_repo.as_ref()
    }

    pub fn reservation_repo(&self) -> &dyn ReservationRepository {
        self.reservation_repo.as_ref()
    }

    pub fn payment_repo(&self) -> &dyn PaymentRepository {
        self.payment_repo.as_ref()
    }

    pub fn notification_repo(&self) -> &dyn NotificationRepository {
        self.notification_repo.as_ref()
    }

    pub fn device_token_repo(&self) -> &dyn DeviceTokenRepository {
        self.device_token_repo.as_ref()
    }

    pub fn email_verification_repo(&self) -> &dyn EmailVerificationRepository {
        self.email_verification_repo.as_ref()
    }

    // === Auth ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    // === Outbound Clients ===

    /// Get the payment gateway client
    pub fn portone(&self) -> &PortOneClient {
        self.portone.as_ref()
    }

    /// Get the FCM push client
    pub fn fcm(&self) -> &FcmClient {
        self.fcm.as_ref()
    }

    /// Get the mail client
    pub fn mail(&self) -> &MailClient {
        self.mail.as_ref()
    }

    /// Get the webhook signing secret, if configured
    pub fn webhook_secret(&self) -> Option<&str> {
        self.webhook_secret.as_deref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("clients", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    refresh_token_repo: Option<Arc<dyn RefreshTokenRepository>>,
    pet_repo: Option<Arc<dyn PetRepository>>,
    feed_repo: Option<Arc<dyn FeedRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    like_repo: Option<Arc<dyn LikeRepository>>,
    chat_repo: Option<Arc<dyn ChatRepository>>,
    hotel_repo: Option<Arc<dyn HotelRepository>>,
    reservation_repo: Option<Arc<dyn ReservationRepository>>,
    payment_repo: Option<Arc<dyn PaymentRepository>>,
    notification_repo: Option<Arc<dyn NotificationRepository>>,
    device_token_repo: Option<Arc<dyn DeviceTokenRepository>>,
    email_verification_repo: Option<Arc<dyn EmailVerificationRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    portone: Option<Arc<PortOneClient>>,
    fcm: Option<Arc<FcmClient>>,
    mail: Option<Arc<MailClient>>,
    webhook_secret: Option<String>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn refresh_token_repo(mut self, repo: Arc<dyn RefreshTokenRepository>) -> Self {
        self.refresh_token_repo = Some(repo);
        self
    }

    pub fn pet_repo(mut self, repo: Arc<dyn PetRepository>) -> Self {
        self.pet_repo = Some(repo);
        self
    }

    pub fn feed_repo(mut self, repo: Arc<dyn FeedRepository>) -> Self {
        self.feed_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn like_repo(mut self, repo: Arc<dyn LikeRepository>) -> Self {
        self.like_repo = Some(repo);
        self
    }

    pub fn chat_repo(mut self, repo: Arc<dyn ChatRepository>) -> Self {
        self.chat_repo = Some(repo);
        self
    }

    pub fn hotel_repo(mut self, repo: Arc<dyn HotelRepository>) -> Self {
        self.hotel_repo = Some(repo);
        self
    }

    pub fn reservation_repo(mut self, repo: Arc<dyn ReservationRepository>) -> Self {
        self.reservation_repo = Some(repo);
        self
    }

    pub fn payment_repo(mut self, repo: Arc<dyn PaymentRepository>) -> Self {
        self.payment_repo = Some(repo);
        self
    }

    pub fn notification_repo(mut self, repo: Arc<dyn NotificationRepository>) -> Self {
        self.notification_repo = Some(repo);
        self
    }

    pub fn device_token_repo(mut self, repo: Arc<dyn DeviceTokenRepository>) -> Self {
        self.device_token_repo = Some(repo);
        self
    }

    pub fn email_verification_repo(
        mut self,
        repo: Arc<dyn EmailVerificationRepository>,
    ) -> Self {
        self.email_verification_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn portone(mut self, client: Arc<PortOneClient>) -> Self {
        self.portone = Some(client);
        self
    }

    pub fn fcm(mut self, client: Arc<FcmClient>) -> Self {
        self.fcm = Some(client);
        self
    }

    pub fn mail(mut self, client: Arc<MailClient>) -> Self {
        self.mail = Some(client);
        self
    }

    pub fn webhook_secret(mut self, secret: Option<String>) -> Self {
        self.webhook_secret = secret;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        fn required<T>(value: Option<T>, name: &str) -> super::error::ServiceResult<T> {
            value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
        }

        Ok(ServiceContext {
            pool: required(self.pool, "pool")?,
            user_repo: required(self.user_repo, "user_repo")?,
            refresh_token_repo: required(self.refresh_token_repo, "refresh_token_repo")?,
            pet_repo: required(self.pet_repo, "pet_repo")?,
            feed_repo: required(self.feed_repo, "feed_repo")?,
            comment_repo: required(self.comment_repo, "comment_repo")?,
            like_repo: required(self.like_repo, "like_repo")?,
            chat_repo: required(self.chat_repo, "chat_repo")?,
            hotel_repo: required(self.hotel_repo, "hotel_repo")?,
            reservation_repo: required(self.reservation_repo, "reservation_repo")?,
            payment_repo: required(self.payment_repo, "payment_repo")?,
            notification_repo: required(self.notification_repo, "notification_repo")?,
            device_token_repo: required(self.device_token_repo, "device_token_repo")?,
            email_verification_repo: required(
                self.email_verification_repo,
                "email_verification_repo",
            )?,
            jwt_service: required(self.jwt_service, "jwt_service")?,
            portone: required(self.portone, "portone")?,
            fcm: required(self.fcm, "fcm")?,
            mail: required(self.mail, "mail")?,
            webhook_secret: self.webhook_secret,
        })
    }
}
