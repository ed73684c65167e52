use crate::config::RelayConfig;
use crate::error::{RelayError, RelayResult};
use crate::gateway::{ChatGateway, CompletionRequest, GatewayMessage};
use crate::message::{ChatMessage, HospitalSummary, Role, UserLocation};
use crate::prompt::system_prompt;
use std::sync::Arc;
use tracing::{debug, info};

/// Up to this many cached hospitals are named in the system prompt.
const PROMPT_HOSPITAL_LIMIT: usize = 2;

/// One inbound relay request.
#[derive(Debug, Clone)]
pub struct RelayRequest {
    pub message: String,
    pub language: String,
    pub history: Vec<ChatMessage>,
    pub nearby_hospitals: Vec<HospitalSummary>,
    pub user_location: Option<UserLocation>,
}

/// Chat relay: compose the prompt, call the gateway once, return the reply
/// verbatim.
pub struct RelayService {
    config: RelayConfig,
    gateway: Arc<dyn ChatGateway>,
}

impl RelayService {
    pub fn new(config: RelayConfig, gateway: Arc<dyn ChatGateway>) -> Self {
        Self { config, gateway }
    }

    /// Relay one user message.
    ///
    /// Blank input and a missing credential both fail before any outbound
    /// call. Upstream failures come back as the three-class taxonomy on
    /// [`RelayError`]; nothing is retried.
    pub async fn relay(&self, request: RelayRequest) -> RelayResult<String> {
        if request.message.trim().is_empty() {
            return Err(RelayError::EmptyMessage);
        }

        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(RelayError::MissingCredential)?;

        info!(language = %request.language, "Processing health query");
        if let Some(location) = request.user_location {
            debug!(
                latitude = location.latitude,
                longitude = location.longitude,
                "Caller location attached"
            );
        }

        let hospitals: Vec<HospitalSummary> = request
            .nearby_hospitals
            .into_iter()
            .take(PROMPT_HOSPITAL_LIMIT)
            .collect();

        let mut messages =
            vec![GatewayMessage::new("system", system_prompt(&request.language, &hospitals))];
        messages.extend(request.history.iter().map(|entry| {
            let role = match entry.role {
                Role::User => "user",
                Role::Assistant => "assistant",
            };
            GatewayMessage::new(role, entry.content.clone())
        }));
        messages.push(GatewayMessage::new("user", request.message));

        let completion = CompletionRequest {
            model: self.config.model.clone(),
            messages,
            temperature: self.config.temperature,
        };

        self.gateway.complete(api_key, completion).await
    }
}
