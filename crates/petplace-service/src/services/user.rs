//! User profile service

use tracing::{info, instrument};

use petplace_common::auth::{hash_password, validate_password_strength, verify_password};
use petplace_core::traits::UserUpdate;
use petplace_core::DomainError;

use crate::dto::{
    AvailabilityResponse, ChangePasswordRequest, PublicUserResponse, UpdateProfileRequest,
    UserResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User profile service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the authenticated user's own profile
    #[instrument(skip(self))]
    pub async fn get_me(&self, user_id: i64) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        Ok(UserResponse::from(user))
    }

    /// Get another user's public profile
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: i64) -> ServiceResult<PublicUserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::UserNotFound(id))?;

        Ok(PublicUserResponse::from(user))
    }

    /// Pre-signup check: is this username taken?
    #[instrument(skip(self))]
    pub async fn check_username(&self, username: &str) -> ServiceResult<AvailabilityResponse> {
        let duplicate = self.ctx.user_repo().username_exists(username).await?;
        Ok(AvailabilityResponse { duplicate })
    }

    /// Pre-signup check: is this nickname taken?
    #[instrument(skip(self))]
    pub async fn check_nickname(&self, nickname: &str) -> ServiceResult<AvailabilityResponse> {
        let duplicate = self.ctx.user_repo().nickname_exists(nickname).await?;
        Ok(AvailabilityResponse { duplicate })
    }

    /// Update profile fields
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: i64,
        request: UpdateProfileRequest,
    ) -> ServiceResult<UserResponse> {
        let current = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        // Resubmitting the caller's own value is not a conflict
        if let Some(nickname) = &request.nickname {
            if *nickname != current.nickname
                && self.ctx.user_repo().nickname_exists(nickname).await?
            {
                return Err(DomainError::DuplicateNickname.into());
            }
        }
        if let Some(phone_number) = &request.phone_number {
            if *phone_number != current.phone_number
                && self.ctx.user_repo().phone_number_exists(phone_number).await?
            {
                return Err(DomainError::DuplicatePhoneNumber.into());
            }
        }

        let user = self
            .ctx
            .user_repo()
            .update_profile(
                user_id,
                &UserUpdate {
                    nickname: request.nickname,
                    phone_number: request.phone_number,
                    profile_image: request.profile_image,
                },
            )
            .await?;

        info!(user_id, "Profile updated");
        Ok(UserResponse::from(user))
    }

    /// Change password after verifying the current one
    #[instrument(skip(self, request))]
    pub async fn change_password(
        &self,
        user_id: i64,
        request: ChangePasswordRequest,
    ) -> ServiceResult<()> {
        let current_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        let is_valid = verify_password(&request.current_password, &current_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;
        if !is_valid {
            return Err(DomainError::InvalidCredentials.into());
        }

        validate_password_strength(&request.new_password).map_err(ServiceError::from)?;

        let new_hash = hash_password(&request.new_password)
            .map_err(|e| ServiceError::internal(e.to_string()))?;
        self.ctx.user_repo().update_password(user_id, &new_hash).await?;

        info!(user_id, "Password changed");
        Ok(())
    }

    /// Soft-delete the account and revoke its sessions
    #[instrument(skip(self))]
    pub async fn delete_account(&self, user_id: i64) -> ServiceResult<()> {
        self.ctx.user_repo().soft_delete(user_id).await?;
        self.ctx.refresh_token_repo().delete_for_user(user_id).await?;

        info!(user_id, "Account deleted");
        Ok(())
    }
}
