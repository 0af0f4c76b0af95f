//! Email verification model -> entity mapper

use petplace_core::entities::EmailVerification;

use crate::models::EmailVerificationModel;

impl From<EmailVerificationModel> for EmailVerification {
    fn from(model: EmailVerificationModel) -> Self {
        EmailVerification {
            id: model.id,
            email: model.email,
            code: model.code,
            is_used: model.is_used,
            expires_at: model.expires_at,
            created_at: model.created_at,
        }
    }
}
