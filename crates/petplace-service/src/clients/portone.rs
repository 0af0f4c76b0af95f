//! PortOne payment gateway client
//!
//! The gateway wraps every response in `{code, message, response}` where a
//! non-zero code signals an error. API calls authenticate with a short-lived
//! access token obtained from the key pair.

use std::time::Duration;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use petplace_common::PaymentConfig;

use super::ClientError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// PortOne REST API client
#[derive(Clone)]
pub struct PortOneClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    api_secret: String,
}

/// Payment record as reported by the gateway
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayPayment {
    pub imp_uid: String,
    pub merchant_uid: String,
    pub status: String,
    pub amount: Decimal,
    pub pay_method: String,
    /// Unix timestamp in seconds, 0 when unpaid
    #[serde(default)]
    pub paid_at: i64,
}

impl GatewayPayment {
    pub fn is_paid(&self) -> bool {
        self.status == "paid"
    }
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    code: i64,
    message: Option<String>,
    response: Option<T>,
}

impl<T> Envelope<T> {
    fn into_response(self) -> Result<T, ClientError> {
        if self.code != 0 {
            let message = self
                .message
                .unwrap_or_else(|| format!("gateway code {}", self.code));
            return Err(ClientError::Gateway(message));
        }
        self.response
            .ok_or_else(|| ClientError::Gateway("empty gateway response".to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct AccessToken {
    access_token: String,
}

impl PortOneClient {
    pub fn from_config(config: &PaymentConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone().unwrap_or_default(),
            api_secret: config.api_secret.clone().unwrap_or_default(),
        })
    }

    async fn access_token(&self) -> Result<String, ClientError> {
        let envelope: Envelope<AccessToken> = self
            .http
            .post(format!("{}/users/getToken", self.base_url))
            .json(&json!({
                "imp_key": self.api_key,
                "imp_secret": self.api_secret,
            }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(envelope.into_response()?.access_token)
    }

    /// Fetch the gateway's record of a payment by its transaction ID
    #[instrument(skip(self))]
    pub async fn fetch_payment(&self, imp_uid: &str) -> Result<GatewayPayment, ClientError> {
        let token = self.access_token().await?;

        let envelope: Envelope<GatewayPayment> = self
            .http
            .get(format!("{}/payments/{imp_uid}", self.base_url))
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        envelope.into_response()
    }

    /// Cancel a paid transaction at the gateway
    #[instrument(skip(self))]
    pub async fn cancel_payment(&self, imp_uid: &str, reason: &str) -> Result<(), ClientError> {
        let token = self.access_token().await?;

        let envelope: Envelope<serde_json::Value> = self
            .http
            .post(format!("{}/payments/cancel", self.base_url))
            .bearer_auth(token)
            .json(&json!({
                "imp_uid": imp_uid,
                "reason": reason,
            }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        envelope.into_response().map(|_| ())
    }
}

impl std::fmt::Debug for PortOneClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortOneClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_success() {
        let envelope: Envelope<AccessToken> = serde_json::from_str(
            r#"{"code":0,"message":null,"response":{"access_token":"abc"}}"#,
        )
        .unwrap();
        assert_eq!(envelope.into_response().unwrap().access_token, "abc");
    }

    #[test]
    fn test_envelope_error_code() {
        let envelope: Envelope<AccessToken> =
            serde_json::from_str(r#"{"code":-1,"message":"bad key","response":null}"#).unwrap();
        assert!(matches!(
            envelope.into_response(),
            Err(ClientError::Gateway(msg)) if msg == "bad key"
        ));
    }

    #[test]
    fn test_gateway_payment_is_paid() {
        let payment: GatewayPayment = serde_json::from_str(
            r#"{"imp_uid":"imp_1","merchant_uid":"HOTEL_1","status":"paid","amount":"120000","pay_method":"card","paid_at":1700000000}"#,
        )
        .unwrap();
        assert!(payment.is_paid());
    }
}
