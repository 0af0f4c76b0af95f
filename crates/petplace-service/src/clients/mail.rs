//! Transactional mail client
//!
//! Sends verification codes through an HTTP mail API. When no API endpoint
//! is configured the code is logged instead, which keeps local development
//! working without a mail account.

use std::time::Duration;

use serde_json::json;
use tracing::{info, instrument};

use petplace_common::MailConfig;

use super::ClientError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP mail API client
#[derive(Clone)]
pub struct MailClient {
    http: reqwest::Client,
    base_url: Option<String>,
    api_key: String,
    sender: String,
}

impl MailClient {
    pub fn from_config(config: &MailConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: config
                .api_base_url
                .as_ref()
                .map(|url| url.trim_end_matches('/').to_string()),
            api_key: config.api_key.clone().unwrap_or_default(),
            sender: config.sender.clone(),
        })
    }

    /// Send a verification code to the given address
    #[instrument(skip(self, code))]
    pub async fn send_verification_code(&self, to: &str, code: &str) -> Result<(), ClientError> {
        let Some(base_url) = &self.base_url else {
            info!(to, "mail API not configured, verification code not sent");
            return Ok(());
        };

        let response = self
            .http
            .post(format!("{base_url}/send"))
            .bearer_auth(&self.api_key)
            .json(&json!({
                "from": self.sender,
                "to": to,
                "subject": "Your verification code",
                "text": format!("Your verification code is {code}. It expires in 10 minutes."),
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(ClientError::Gateway(format!("mail API returned {status}")));
        }

        Ok(())
    }
}

impl std::fmt::Debug for MailClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailClient")
            .field("base_url", &self.base_url)
            .field("sender", &self.sender)
            .finish_non_exhaustive()
    }
}
