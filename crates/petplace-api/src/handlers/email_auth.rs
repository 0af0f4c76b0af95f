//! Email verification handlers

use axum::{extract::State, Json};
use petplace_service::{
    EmailAuthService, SendVerificationRequest, VerificationSentResponse, VerifyCodeRequest,
};

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Send a verification code to an email address
///
/// POST /email/verification
pub async fn send_verification(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SendVerificationRequest>,
) -> ApiResult<Json<VerificationSentResponse>> {
    let service = EmailAuthService::new(state.service_context());
    let response = service.send_code(request).await?;
    Ok(Json(response))
}

/// Confirm a previously sent verification code
///
/// POST /email/verification/confirm
pub async fn confirm_verification(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<VerifyCodeRequest>,
) -> ApiResult<NoContent> {
    let service = EmailAuthService::new(state.service_context());
    service.verify_code(request).await?;
    Ok(NoContent)
}
