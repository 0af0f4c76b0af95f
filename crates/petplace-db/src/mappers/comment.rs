//! Comment model -> entity mapper

use petplace_core::entities::Comment;

use crate::models::CommentModel;

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            feed_id: model.feed_id,
            user_id: model.user_id,
            parent_id: model.parent_id,
            content: model.content,
            deleted_at: model.deleted_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
