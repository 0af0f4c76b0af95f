//! Outbound HTTP clients for third-party services
//!
//! Payment gateway (PortOne), FCM push delivery, and transactional mail.

pub mod fcm;
pub mod mail;
pub mod portone;

pub use fcm::FcmClient;
pub use mail::MailClient;
pub use portone::{GatewayPayment, PortOneClient};

/// Errors from outbound HTTP calls
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("gateway rejected the request: {0}")]
    Gateway(String),

    /// The push service no longer recognizes the device token
    #[error("device token is no longer registered")]
    TokenUnregistered,
}
