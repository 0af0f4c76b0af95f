//! User model -> entity mapper

use petplace_core::entities::User;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            username: model.username,
            nickname: model.nickname,
            phone_number: model.phone_number,
            profile_image: model.profile_image,
            deleted_at: model.deleted_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
