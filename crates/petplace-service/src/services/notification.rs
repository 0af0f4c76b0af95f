//! Notification service
//!
//! Persists in-app notifications and fans them out to the user's device
//! tokens over FCM. Delivery is best-effort: failures are logged and never
//! surface to the action that triggered the notification.

use serde_json::Value;
use tracing::{info, instrument, warn};

use petplace_core::entities::{NotificationType, RefType};
use petplace_core::traits::{NewNotification, PageQuery};

use crate::clients::ClientError;
use crate::dto::{NotificationResponse, PageResponse, UnreadCountResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Notification service
pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    /// Create a new NotificationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List a user's notifications, newest first
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        user_id: i64,
        page: PageQuery,
    ) -> ServiceResult<PageResponse<NotificationResponse>> {
        let notifications = self
            .ctx
            .notification_repo()
            .list_by_user(user_id, &page)
            .await?;

        Ok(PageResponse::new(
            notifications
                .into_iter()
                .map(NotificationResponse::from)
                .collect(),
            page.page,
            page.size,
        ))
    }

    /// Mark one notification read
    #[instrument(skip(self))]
    pub async fn mark_read(&self, user_id: i64, notification_id: i64) -> ServiceResult<()> {
        self.ctx
            .notification_repo()
            .mark_read(notification_id, user_id)
            .await?;
        Ok(())
    }

    /// Mark all notifications read, returning how many changed
    #[instrument(skip(self))]
    pub async fn mark_all_read(&self, user_id: i64) -> ServiceResult<u64> {
        let updated = self.ctx.notification_repo().mark_all_read(user_id).await?;
        info!(user_id, updated, "Marked notifications read");
        Ok(updated)
    }

    /// Count unread notifications
    #[instrument(skip(self))]
    pub async fn unread_count(&self, user_id: i64) -> ServiceResult<UnreadCountResponse> {
        let count = self.ctx.notification_repo().unread_count(user_id).await?;
        Ok(UnreadCountResponse { count })
    }

    /// Delete one of the user's notifications
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: i64, notification_id: i64) -> ServiceResult<()> {
        self.ctx
            .notification_repo()
            .delete(notification_id, user_id)
            .await?;
        Ok(())
    }

    /// Register (or reactivate) a device push token
    #[instrument(skip(self, token))]
    pub async fn register_device(&self, user_id: i64, token: &str) -> ServiceResult<()> {
        self.ctx.device_token_repo().upsert(user_id, token).await?;
        info!(user_id, "Device token registered");
        Ok(())
    }

    /// Deactivate a device push token
    #[instrument(skip(self, token))]
    pub async fn unregister_device(&self, user_id: i64, token: &str) -> ServiceResult<()> {
        self.ctx.device_token_repo().deactivate(user_id, token).await?;
        info!(user_id, "Device token deactivated");
        Ok(())
    }

    /// Store a notification and push it to the recipient's devices.
    ///
    /// Best-effort: callers fire this after their own work has committed,
    /// and a failed store or push must not roll that work back.
    #[instrument(skip(self, message, data))]
    pub async fn notify(
        &self,
        recipient_id: i64,
        notification_type: NotificationType,
        ref_type: RefType,
        ref_id: i64,
        message: String,
        data: Option<Value>,
    ) {
        let notification = match self
            .ctx
            .notification_repo()
            .create(&NewNotification {
                user_id: recipient_id,
                notification_type,
                ref_type,
                ref_id,
                message,
                data,
            })
            .await
        {
            Ok(notification) => notification,
            Err(e) => {
                warn!(recipient_id, error = %e, "Failed to store notification");
                return;
            }
        };

        if !self.ctx.fcm().is_configured() {
            return;
        }

        let tokens = match self.ctx.device_token_repo().active_tokens(recipient_id).await {
            Ok(tokens) => tokens,
            Err(e) => {
                warn!(recipient_id, error = %e, "Failed to load device tokens");
                return;
            }
        };

        for token in tokens {
            match self
                .ctx
                .fcm()
                .send(
                    &token,
                    notification.notification_type.as_str(),
                    &notification.message,
                    notification.data.as_ref(),
                )
                .await
            {
                Ok(()) => {}
                // A dead token stays dead; stop pushing to it
                Err(ClientError::TokenUnregistered) => {
                    if let Err(e) = self
                        .ctx
                        .device_token_repo()
                        .deactivate(recipient_id, &token)
                        .await
                    {
                        warn!(recipient_id, error = %e, "Failed to deactivate stale token");
                    }
                }
                Err(e) => {
                    warn!(recipient_id, error = %e, "Push delivery failed");
                }
            }
        }
    }
}
