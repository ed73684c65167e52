use crate::config::SpeechConfig;
use crate::error::{SpeechError, SpeechResult};
use crate::locale::voice_id;
use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, error};

/// Text-to-audio synthesis seam.
///
/// The server's speech proxy talks to this trait so tests can substitute a
/// canned provider.
#[async_trait]
pub trait SpeechSynthesis: Send + Sync {
    /// Synthesize `text` in the voice mapped for `language`; returns raw
    /// audio bytes.
    async fn synthesize(&self, text: &str, language: &str) -> SpeechResult<Vec<u8>>;
}

#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
    style: f32,
    use_speaker_boost: bool,
}

#[derive(Debug, Serialize)]
struct SynthesisPayload<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

/// Remote voice-synthesis provider.
pub struct RemoteSynthesizer {
    http: reqwest::Client,
    config: SpeechConfig,
}

impl RemoteSynthesizer {
    pub fn new(config: SpeechConfig) -> SpeechResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self { http, config })
    }
}

#[async_trait]
impl SpeechSynthesis for RemoteSynthesizer {
    async fn synthesize(&self, text: &str, language: &str) -> SpeechResult<Vec<u8>> {
        if text.trim().is_empty() {
            return Err(SpeechError::InvalidInput("text is required".to_string()));
        }

        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            SpeechError::Config("voice synthesis credential is not configured".to_string())
        })?;

        let voice = voice_id(language);
        debug!(language, voice, "Generating speech");

        let payload = SynthesisPayload {
            text,
            model_id: &self.config.model_id,
            voice_settings: VoiceSettings {
                stability: 0.5,
                similarity_boost: 0.75,
                style: 0.5,
                use_speaker_boost: true,
            },
        };

        let url = format!("{}/v1/text-to-speech/{voice}", self.config.api_url);
        let response = self
            .http
            .post(&url)
            .header("xi-api-key", api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Voice API error");
            return Err(SpeechError::Synthesis(format!(
                "speech generation failed: {status}: {body}"
            )));
        }

        Ok(response.bytes().await?.to_vec())
    }
}
