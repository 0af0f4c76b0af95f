//! Email verification service
//!
//! Issues 6-digit codes with a 10 minute lifetime. Each code is single-use;
//! verifying consumes it.

use chrono::{Duration, Utc};
use tracing::{info, instrument};

use petplace_common::auth::generate_verification_code;
use petplace_core::DomainError;

use crate::dto::{SendVerificationRequest, VerificationSentResponse, VerifyCodeRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// How long an issued code stays valid
const CODE_LIFETIME_MINUTES: i64 = 10;

/// Email verification service
pub struct EmailAuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EmailAuthService<'a> {
    /// Create a new EmailAuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Issue a fresh code and mail it out
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn send_code(
        &self,
        request: SendVerificationRequest,
    ) -> ServiceResult<VerificationSentResponse> {
        let code = generate_verification_code();
        let expires_at = Utc::now() + Duration::minutes(CODE_LIFETIME_MINUTES);

        let verification = self
            .ctx
            .email_verification_repo()
            .create(&request.email, &code, expires_at)
            .await?;

        self.ctx
            .mail()
            .send_verification_code(&request.email, &code)
            .await?;

        info!(email = %verification.email, "Verification code issued");
        Ok(VerificationSentResponse::from(verification))
    }

    /// Check a submitted code and consume it
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn verify_code(&self, request: VerifyCodeRequest) -> ServiceResult<()> {
        let verification = self
            .ctx
            .email_verification_repo()
            .find_latest(&request.email, &request.code)
            .await?
            .ok_or_else(|| DomainError::VerificationNotFound(request.email.clone()))?;

        if verification.is_used {
            return Err(DomainError::VerificationAlreadyUsed.into());
        }
        if verification.is_expired(Utc::now()) {
            return Err(DomainError::VerificationExpired.into());
        }

        self.ctx
            .email_verification_repo()
            .mark_used(verification.id)
            .await?;

        info!(email = %request.email, "Email verified");
        Ok(())
    }
}
