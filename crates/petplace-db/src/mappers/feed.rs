//! Feed model -> entity mapper

use petplace_core::entities::Feed;

use crate::models::FeedModel;

impl From<FeedModel> for Feed {
    fn from(model: FeedModel) -> Self {
        Feed {
            id: model.id,
            user_id: model.user_id,
            content: model.content,
            image_url: model.image_url,
            view_count: model.view_count,
            like_count: model.like_count,
            deleted_at: model.deleted_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
