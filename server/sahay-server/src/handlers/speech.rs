use crate::error::ApiError;
use crate::server::SahayServer;
use crate::validate_required;
use crate::validation::RequestValidation;
use axum::{extract::State, Json};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

/// Text-to-speech proxy request
#[derive(Debug, Deserialize, ToSchema)]
pub struct SpeechProxyRequest {
    /// Text to synthesize
    pub text: String,
    /// Language code selecting the voice, e.g. "ta"
    #[schema(example = "ta")]
    pub language: Option<String>,
}

impl RequestValidation for SpeechProxyRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_required!(self.text, "Text is required");
        Ok(())
    }
}

/// Text-to-speech proxy response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpeechProxyResponse {
    /// Base64-encoded audio payload
    pub audio_content: String,
}

/// Synthesize speech through the remote voice API
#[utoipa::path(
    post,
    path = "/api/v1/assistant/speech",
    request_body = SpeechProxyRequest,
    responses(
        (status = 200, description = "Base64 audio", body = SpeechProxyResponse),
        (status = 400, description = "Invalid request", body = crate::error::ApiErrorBody),
        (status = 500, description = "Configuration or synthesis failure", body = crate::error::ApiErrorBody)
    ),
    tag = "assistant"
)]
pub async fn synthesize_speech(
    State(server): State<SahayServer>,
    Json(payload): Json<SpeechProxyRequest>,
) -> Result<Json<SpeechProxyResponse>, ApiError> {
    payload.validate()?;

    let language = payload.language.as_deref().unwrap_or("en");
    let audio = server.synthesizer.synthesize(&payload.text, language).await?;

    info!(bytes = audio.len(), "Speech generated");
    Ok(Json(SpeechProxyResponse {
        audio_content: BASE64.encode(audio),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_wire_key_is_camel_case() {
        let response = SpeechProxyResponse {
            audio_content: "UklGRg==".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"audioContent":"UklGRg=="}"#);
    }

    #[test]
    fn test_blank_text_fails_validation() {
        let request = SpeechProxyRequest {
            text: "  ".to_string(),
            language: Some("en".to_string()),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_language_is_optional() {
        let request: SpeechProxyRequest = serde_json::from_str(r#"{"text": "hello"}"#).unwrap();
        assert!(request.language.is_none());
    }
}
