pub mod paths;

use crate::{
    handlers::{assistant, directory, health, speech},
    openapi,
    server::SahayServer,
};
use axum::{
    routing::{get, post},
    Router,
};

/// Create health check routes
pub fn health_routes() -> Router<SahayServer> {
    Router::new()
        .route(paths::health::HEALTH, get(health::health_check))
        .route(paths::health::VERSION, get(health::version_info))
        .route(paths::health::STATUS, get(health::system_status))
}

/// Create assistant proxy routes (chat relay and voice synthesis)
pub fn assistant_routes() -> Router<SahayServer> {
    Router::new()
        .route(paths::assistant::CHAT, post(assistant::relay_chat))
        .route(paths::assistant::SPEECH, post(speech::synthesize_speech))
}

/// Create facility directory routes
pub fn directory_routes() -> Router<SahayServer> {
    Router::new()
        .route(paths::directory::NEARBY, post(directory::nearby_facilities))
        .route(
            paths::directory::CONTACTS,
            get(directory::emergency_contacts),
        )
}

/// Create API v1 routes
pub fn api_v1_routes() -> Router<SahayServer> {
    Router::new()
        .merge(assistant_routes())
        .merge(directory_routes())
}

/// Create all application routes
pub fn create_routes() -> Router<SahayServer> {
    Router::new()
        // Health check routes (no versioning prefix)
        .merge(health_routes())
        // API documentation routes
        .merge(openapi::create_docs_routes())
        // API v1 routes
        .nest(paths::API_V1, api_v1_routes())
}
