//! Refresh token model -> entity mapper

use petplace_core::entities::RefreshToken;

use crate::models::RefreshTokenModel;

impl From<RefreshTokenModel> for RefreshToken {
    fn from(model: RefreshTokenModel) -> Self {
        RefreshToken {
            id: model.id,
            user_id: model.user_id,
            token: model.token,
            expires_at: model.expires_at,
            created_at: model.created_at,
        }
    }
}
