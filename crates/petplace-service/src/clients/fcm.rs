//! FCM push delivery client
//!
//! Legacy HTTP API: one POST per device token, authenticated with the
//! server key. Delivery is best-effort; callers log failures and move on.

use std::time::Duration;

use serde_json::{json, Value};
use tracing::instrument;

use petplace_common::PushConfig;

use super::ClientError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// FCM HTTP client
#[derive(Clone)]
pub struct FcmClient {
    http: reqwest::Client,
    base_url: String,
    server_key: String,
}

impl FcmClient {
    pub fn from_config(config: &PushConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: config.fcm_base_url.trim_end_matches('/').to_string(),
            server_key: config.fcm_server_key.clone().unwrap_or_default(),
        })
    }

    /// Whether a server key is configured; without one sends are skipped
    pub fn is_configured(&self) -> bool {
        !self.server_key.is_empty()
    }

    /// Send a notification to a single device token
    #[instrument(skip(self, token, data))]
    pub async fn send(
        &self,
        token: &str,
        title: &str,
        body: &str,
        data: Option<&Value>,
    ) -> Result<(), ClientError> {
        let mut payload = json!({
            "to": token,
            "notification": {
                "title": title,
                "body": body,
            },
        });
        if let Some(data) = data {
            payload["data"] = data.clone();
        }

        let response = self
            .http
            .post(format!("{}/fcm/send", self.base_url))
            .header("Authorization", format!("key={}", self.server_key))
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(ClientError::Gateway(format!("fcm returned {status}")));
        }

        // The legacy API reports per-token failures in a 200 body
        let body: Value = response.json().await.unwrap_or_default();
        if let Some(error) = body["results"][0]["error"].as_str() {
            if error == "NotRegistered" || error == "InvalidRegistration" {
                return Err(ClientError::TokenUnregistered);
            }
            return Err(ClientError::Gateway(format!("fcm error {error}")));
        }

        Ok(())
    }
}

impl std::fmt::Debug for FcmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FcmClient")
            .field("base_url", &self.base_url)
            .field("configured", &self.is_configured())
            .finish_non_exhaustive()
    }
}
