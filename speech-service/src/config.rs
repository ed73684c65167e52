use std::time::Duration;

/// Default remote voice-synthesis API base URL.
pub const DEFAULT_VOICE_API_URL: &str = "https://api.elevenlabs.io";

/// Default multilingual synthesis model.
pub const DEFAULT_VOICE_MODEL: &str = "eleven_multilingual_v2";

/// Remote voice-synthesis configuration.
#[derive(Debug, Clone)]
pub struct SpeechConfig {
    /// Voice API base URL.
    pub api_url: String,
    /// Voice API credential. Absent means every synthesis request fails
    /// with a configuration error before going to the network.
    pub api_key: Option<String>,
    /// Synthesis model identifier.
    pub model_id: String,
    /// Client-side request timeout.
    pub request_timeout: Duration,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_VOICE_API_URL.to_string(),
            api_key: None,
            model_id: DEFAULT_VOICE_MODEL.to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl SpeechConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: std::env::var("SAHAY_VOICE_API_URL").unwrap_or(defaults.api_url),
            api_key: std::env::var("SAHAY_VOICE_API_KEY").ok(),
            model_id: std::env::var("SAHAY_VOICE_MODEL").unwrap_or(defaults.model_id),
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
