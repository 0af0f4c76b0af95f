//! Authentication service
//!
//! Handles signup, login, token refresh, and logout.

use chrono::{Duration, Utc};
use tracing::{info, instrument, warn};

use petplace_common::auth::{hash_password, validate_password_strength, verify_password};
use petplace_core::entities::User;
use petplace_core::traits::NewUser;
use petplace_core::DomainError;

use crate::dto::{AuthResponse, LoginRequest, RefreshTokenRequest, SignupRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new account
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn signup(&self, request: SignupRequest) -> ServiceResult<AuthResponse> {
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        if self.ctx.user_repo().username_exists(&request.username).await? {
            return Err(DomainError::DuplicateUsername.into());
        }
        if self.ctx.user_repo().nickname_exists(&request.nickname).await? {
            return Err(DomainError::DuplicateNickname.into());
        }
        if self
            .ctx
            .user_repo()
            .phone_number_exists(&request.phone_number)
            .await?
        {
            return Err(DomainError::DuplicatePhoneNumber.into());
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user = self
            .ctx
            .user_repo()
            .create(&NewUser {
                username: request.username,
                nickname: request.nickname,
                phone_number: request.phone_number,
                password_hash,
            })
            .await?;

        info!(user_id = user.id, "User registered");

        self.issue_tokens(user).await
    }

    /// Login with username and password
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!(username = %request.username, "Login failed: user not found");
                ServiceError::from(DomainError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = user.id, "Login failed: no password hash");
                ServiceError::from(DomainError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = user.id, "Login failed: invalid password");
            return Err(DomainError::InvalidCredentials.into());
        }

        info!(user_id = user.id, "User logged in");

        self.issue_tokens(user).await
    }

    /// Rotate the refresh token and issue a fresh token pair
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)
            .map_err(|_| ServiceError::from(DomainError::InvalidRefreshToken))?;
        let user_id = claims.user_id()?;

        let stored = self
            .ctx
            .refresh_token_repo()
            .find_by_token(&request.refresh_token)
            .await?
            .ok_or_else(|| ServiceError::from(DomainError::InvalidRefreshToken))?;

        if stored.user_id != user_id {
            warn!(user_id, "Refresh token does not belong to claimed user");
            return Err(DomainError::InvalidRefreshToken.into());
        }

        if stored.is_expired(Utc::now()) {
            self.ctx
                .refresh_token_repo()
                .delete_by_token(&request.refresh_token)
                .await?;
            return Err(DomainError::InvalidRefreshToken.into());
        }

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        info!(user_id = user.id, "Tokens refreshed");

        self.issue_tokens(user).await
    }

    /// Logout by discarding the stored refresh token
    #[instrument(skip(self))]
    pub async fn logout(&self, user_id: i64) -> ServiceResult<()> {
        self.ctx.refresh_token_repo().delete_for_user(user_id).await?;
        info!(user_id, "User logged out");
        Ok(())
    }

    /// Validate an access token and return the user ID
    pub fn validate_token(&self, token: &str) -> ServiceResult<i64> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_access_token(token)
            .map_err(ServiceError::from)?;

        claims.user_id().map_err(ServiceError::from)
    }

    /// Generate a token pair and persist the refresh half (one per user)
    async fn issue_tokens(&self, user: User) -> ServiceResult<AuthResponse> {
        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(user.id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        let expires_at = Utc::now() + Duration::seconds(self.ctx.jwt_service().refresh_token_expiry());
        self.ctx
            .refresh_token_repo()
            .upsert(user.id, &token_pair.refresh_token, expires_at)
            .await?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            UserResponse::from(user),
        ))
    }
}
