use anyhow::Result;
use assistant_relay::{HttpChatGateway, RelayConfig, RelayService};
use context_store::{ContextStore, JsonFileStore, MemoryStore};
use health_directory::{DirectoryConfig, DirectoryService, OverpassClient};
use speech_service::{RemoteSynthesizer, SpeechConfig, SpeechSynthesis};
use std::sync::Arc;
use tracing::info;

/// Main Sahay server state
#[derive(Clone)]
pub struct SahayServer {
    /// Server configuration
    pub config: ServerConfig,
    /// Symptom-chat relay
    pub relay: Arc<RelayService>,
    /// Remote voice synthesis
    pub synthesizer: Arc<dyn SpeechSynthesis>,
    /// Facility directory
    pub directory: Arc<DirectoryService>,
    /// Session context store (nearby hospitals, last location)
    pub context: Arc<dyn ContextStore>,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server name
    pub name: String,
    /// Whether the chat gateway credential is present
    pub chat_gateway_configured: bool,
    /// Whether the voice synthesis credential is present
    pub voice_api_configured: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "Sahay Engine".to_string(),
            chat_gateway_configured: false,
            voice_api_configured: false,
        }
    }
}

impl SahayServer {
    /// Create a server instance from environment configuration.
    pub fn from_env() -> Result<Self> {
        let relay_config = RelayConfig::from_env();
        let speech_config = SpeechConfig::from_env();
        let directory_config = DirectoryConfig::from_env()?;

        let config = ServerConfig {
            name: "Sahay Engine".to_string(),
            chat_gateway_configured: relay_config.api_key.is_some(),
            voice_api_configured: speech_config.api_key.is_some(),
        };

        // Context survives restarts only when a file path is configured.
        let context: Arc<dyn ContextStore> = match std::env::var("SAHAY_CONTEXT_FILE") {
            Ok(path) => {
                info!(path = %path, "Using file-backed context store");
                Arc::new(JsonFileStore::new(path))
            }
            Err(_) => Arc::new(MemoryStore::new()),
        };

        let gateway = HttpChatGateway::new(
            relay_config.gateway_url.clone(),
            relay_config.request_timeout,
        )?;
        let relay = Arc::new(RelayService::new(relay_config, Arc::new(gateway)));

        let synthesizer: Arc<dyn SpeechSynthesis> =
            Arc::new(RemoteSynthesizer::new(speech_config)?);

        let overpass = OverpassClient::new(directory_config)?;
        let directory = Arc::new(DirectoryService::new(Arc::new(overpass), context.clone()));

        Ok(Self {
            config,
            relay,
            synthesizer,
            directory,
            context,
        })
    }

    /// Create a server instance with provided services. Used by tests.
    pub fn with_services(
        config: ServerConfig,
        relay: Arc<RelayService>,
        synthesizer: Arc<dyn SpeechSynthesis>,
        directory: Arc<DirectoryService>,
        context: Arc<dyn ContextStore>,
    ) -> Self {
        Self {
            config,
            relay,
            synthesizer,
            directory,
            context,
        }
    }
}
