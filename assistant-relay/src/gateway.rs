use crate::error::{RelayError, RelayResult};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::error;

/// One message in the gateway wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayMessage {
    pub role: String,
    pub content: String,
}

impl GatewayMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// Completion call parameters.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<GatewayMessage>,
    pub temperature: f64,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: String,
}

/// Chat-completion gateway seam.
///
/// The relay service talks to this trait so tests can observe (or count)
/// upstream calls without a network.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// One completion round trip; returns the assistant reply text.
    async fn complete(&self, api_key: &str, request: CompletionRequest) -> RelayResult<String>;
}

/// HTTP gateway client.
pub struct HttpChatGateway {
    http: reqwest::Client,
    url: String,
}

impl HttpChatGateway {
    pub fn new(url: impl Into<String>, request_timeout: Duration) -> RelayResult<Self> {
        let http = reqwest::Client::builder().timeout(request_timeout).build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }
}

#[async_trait]
impl ChatGateway for HttpChatGateway {
    async fn complete(&self, api_key: &str, request: CompletionRequest) -> RelayResult<String> {
        let response = self
            .http
            .post(&self.url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                let parsed: CompletionResponse = response.json().await?;
                parsed
                    .choices
                    .into_iter()
                    .next()
                    .map(|choice| choice.message.content)
                    .ok_or_else(|| RelayError::Gateway("empty choices in reply".to_string()))
            }
            StatusCode::TOO_MANY_REQUESTS => Err(RelayError::RateLimited),
            StatusCode::PAYMENT_REQUIRED => Err(RelayError::PaymentRequired),
            status => {
                // Upstream body goes to the log, never to the caller.
                let body = response.text().await.unwrap_or_default();
                error!(status = %status, body = %body, "AI gateway error");
                Err(RelayError::Gateway(format!("gateway returned {status}")))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_payload_shape() {
        let request = CompletionRequest {
            model: "google/gemini-2.5-flash".to_string(),
            messages: vec![GatewayMessage::new("user", "I have a headache")],
            temperature: 0.7,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "google/gemini-2.5-flash");
        assert_eq!(json["temperature"], 0.7);
        assert_eq!(json["messages"][0]["role"], "user");
    }

    #[test]
    fn test_reply_extraction_shape() {
        let raw = r#"{
            "id": "cmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Rest and hydrate."}}
            ]
        }"#;

        let parsed: CompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.choices[0].message.content, "Rest and hydrate.");
    }
}
