//! Like model -> entity mapper

use petplace_core::entities::Like;

use crate::models::LikeModel;

impl From<LikeModel> for Like {
    fn from(model: LikeModel) -> Self {
        Like {
            id: model.id,
            feed_id: model.feed_id,
            user_id: model.user_id,
            created_at: model.created_at,
        }
    }
}
