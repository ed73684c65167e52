use crate::error::ApiError;
use crate::server::SahayServer;
use crate::validation::RequestValidation;
use crate::{validate_length, validate_required};
use assistant_relay::{ChatMessage, HospitalSummary, RelayRequest, Role, UserLocation};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One prior conversation entry as sent by the client.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HistoryEntry {
    /// "user" or "assistant"
    #[schema(example = "user")]
    pub role: String,
    pub content: String,
}

impl HistoryEntry {
    fn into_message(self) -> ChatMessage {
        let role = match self.role.as_str() {
            "user" => Role::User,
            _ => Role::Assistant,
        };
        ChatMessage {
            role,
            content: self.content,
        }
    }
}

/// Cached nearby-hospital summary forwarded with a chat request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NearbyHospital {
    #[schema(example = "District Hospital")]
    pub name: String,
    #[schema(example = "1.2 km")]
    pub distance: Option<String>,
    #[serde(default)]
    pub services: Vec<String>,
}

/// Caller position forwarded with a chat request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct CallerLocation {
    pub latitude: f64,
    pub longitude: f64,
}

/// Chat proxy request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatProxyRequest {
    /// The user's current message
    pub message: String,
    /// Active language code, e.g. "hi"
    #[schema(example = "hi")]
    pub language: String,
    /// Prior messages, oldest first
    #[serde(default)]
    pub conversation_history: Vec<HistoryEntry>,
    /// Up to two cached nearest hospitals
    #[serde(default)]
    pub nearby_hospitals: Vec<NearbyHospital>,
    /// Last known user coordinates, if any
    pub user_location: Option<CallerLocation>,
}

impl RequestValidation for ChatProxyRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_required!(self.message, "Message is required");
        validate_required!(self.language, "Language is required");
        validate_length!(
            self.message,
            1,
            4000,
            "Message must be between 1 and 4000 characters"
        );
        Ok(())
    }
}

/// Chat proxy response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatProxyResponse {
    /// Assistant reply, verbatim from the model
    pub response: String,
}

/// Relay one symptom-chat message to the AI gateway
#[utoipa::path(
    post,
    path = "/api/v1/assistant/chat",
    request_body = ChatProxyRequest,
    responses(
        (status = 200, description = "Assistant reply", body = ChatProxyResponse),
        (status = 400, description = "Invalid request", body = crate::error::ApiErrorBody),
        (status = 402, description = "Payment required upstream", body = crate::error::ApiErrorBody),
        (status = 429, description = "Rate limited upstream", body = crate::error::ApiErrorBody),
        (status = 500, description = "Configuration or service failure", body = crate::error::ApiErrorBody)
    ),
    tag = "assistant"
)]
pub async fn relay_chat(
    State(server): State<SahayServer>,
    Json(payload): Json<ChatProxyRequest>,
) -> Result<Json<ChatProxyResponse>, ApiError> {
    payload.validate()?;

    let request = RelayRequest {
        message: payload.message,
        language: payload.language,
        history: payload
            .conversation_history
            .into_iter()
            .map(HistoryEntry::into_message)
            .collect(),
        nearby_hospitals: payload
            .nearby_hospitals
            .into_iter()
            .map(|h| HospitalSummary {
                name: h.name,
                distance: h.distance,
                services: h.services,
            })
            .collect(),
        user_location: payload.user_location.map(|l| UserLocation {
            latitude: l.latitude,
            longitude: l.longitude,
        }),
    };

    let reply = server.relay.relay(request).await?;
    Ok(Json(ChatProxyResponse { response: reply }))
}
