//! Notification model -> entity mapper

use petplace_core::entities::Notification;
use petplace_core::error::DomainError;

use crate::models::NotificationModel;

impl TryFrom<NotificationModel> for Notification {
    type Error = DomainError;

    fn try_from(model: NotificationModel) -> Result<Self, Self::Error> {
        Ok(Notification {
            id: model.id,
            user_id: model.user_id,
            notification_type: model.notification_type.parse()?,
            ref_type: model.ref_type.parse()?,
            ref_id: model.ref_id,
            message: model.message,
            data: model.data,
            is_read: model.is_read,
            created_at: model.created_at,
        })
    }
}
