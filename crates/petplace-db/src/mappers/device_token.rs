//! Device token model -> entity mapper

use petplace_core::entities::DeviceToken;

use crate::models::DeviceTokenModel;

impl From<DeviceTokenModel> for DeviceToken {
    fn from(model: DeviceTokenModel) -> Self {
        DeviceToken {
            id: model.id,
            user_id: model.user_id,
            token: model.token,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
