use std::time::Duration;

/// Default chat-completion endpoint.
pub const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.sahay.health/v1/chat/completions";

/// Default model served through the gateway.
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";

/// Chat relay configuration.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Chat-completion endpoint URL.
    pub gateway_url: String,
    /// Gateway credential. Absent means every relay request fails with a
    /// configuration error before going to the network.
    pub api_key: Option<String>,
    /// Model identifier forwarded in the completion payload.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f64,
    /// Client-side request timeout.
    pub request_timeout: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            request_timeout: Duration::from_secs(60),
        }
    }
}

impl RelayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            gateway_url: std::env::var("SAHAY_GATEWAY_URL").unwrap_or(defaults.gateway_url),
            api_key: std::env::var("SAHAY_GATEWAY_KEY").ok(),
            model: std::env::var("SAHAY_GATEWAY_MODEL").unwrap_or(defaults.model),
            temperature: defaults.temperature,
            request_timeout: defaults.request_timeout,
        }
    }

    /// Config with a credential, for tests and embedding.
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            api_key: Some(key.into()),
            ..Self::default()
        }
    }
}
