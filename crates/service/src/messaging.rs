//! Outbound SMS.

use std::time::Duration;

use async_trait::async_trait;
use chief_core::TwilioConfig;

use crate::error::ServiceError;

const TWILIO_API_BASE: &str = "https://api.twilio.com";

#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send(&self, to: &str, body: &str) -> Result<(), ServiceError>;
}

/// Twilio Messages API client.
pub struct TwilioClient {
    client: reqwest::Client,
    account_sid: String,
    auth_token: String,
    from_number: String,
    base_url: String,
}

impl std::fmt::Debug for TwilioClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwilioClient")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"***")
            .field("from_number", &self.from_number)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl TwilioClient {
    /// # Errors
    /// Returns `ServiceError::Messaging` if the HTTP client cannot be built.
    pub fn new(config: &TwilioConfig, base_url: &str) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| ServiceError::Messaging(e.to_string()))?;
        Ok(Self {
            client,
            account_sid: config.account_sid.clone(),
            auth_token: config.auth_token.clone(),
            from_number: config.from_number.clone(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// # Errors
    /// Returns `ServiceError::Messaging` if the HTTP client cannot be built.
    pub fn from_config(config: &TwilioConfig) -> Result<Self, ServiceError> {
        Self::new(config, TWILIO_API_BASE)
    }
}

#[async_trait]
impl MessageSender for TwilioClient {
    async fn send(&self, to: &str, body: &str) -> Result<(), ServiceError> {
        let url = format!("{}/2010-04-01/Accounts/{}/Messages.json", self.base_url, self.account_sid);
        let response = self
            .client
            .post(url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[("To", to), ("From", self.from_number.as_str()), ("Body", body)])
            .send()
            .await
            .map_err(|e| ServiceError::Messaging(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ServiceError::Messaging(format!(
                "HTTP {}: {}",
                status.as_u16(),
                chief_llm::truncate(&text, 200)
            )));
        }
        tracing::info!(to, chars = body.chars().count(), "SMS sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config() -> TwilioConfig {
        TwilioConfig {
            account_sid: "AC123".into(),
            auth_token: "secret".into(),
            from_number: "+15550000000".into(),
        }
    }

    #[tokio::test]
    async fn posts_form_to_messages_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/2010-04-01/Accounts/AC123/Messages.json"))
            .and(header_exists("authorization"))
            .and(body_string_contains("Body=Good+morning"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"sid": "SM1"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = TwilioClient::new(&config(), &server.uri()).unwrap();
        client.send("+15551234567", "Good morning").await.unwrap();
    }

    #[tokio::test]
    async fn rejected_send_is_a_messaging_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("invalid To number"))
            .mount(&server)
            .await;

        let client = TwilioClient::new(&config(), &server.uri()).unwrap();
        let err = client.send("bogus", "hi").await.unwrap_err();
        assert!(matches!(err, ServiceError::Messaging(ref m) if m.contains("400")));
    }
}
