use crate::handlers::{assistant, directory, health, speech};
use crate::server::SahayServer;
use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI document for the Sahay Engine API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sahay Engine API",
        description = "Multilingual health-assistance API: symptom chat relay, \
                       nearby-facility directory, emergency contacts, and voice synthesis",
        license(name = "AGPL-3.0-only")
    ),
    paths(
        health::health_check,
        health::version_info,
        health::system_status,
        assistant::relay_chat,
        speech::synthesize_speech,
        directory::nearby_facilities,
        directory::emergency_contacts,
    ),
    components(schemas(
        crate::error::ApiErrorBody,
        assistant::ChatProxyRequest,
        assistant::ChatProxyResponse,
        assistant::HistoryEntry,
        assistant::NearbyHospital,
        assistant::CallerLocation,
        speech::SpeechProxyRequest,
        speech::SpeechProxyResponse,
        directory::NearbyFacilitiesRequest,
        directory::FacilityResponse,
        directory::FacilityCoordinates,
        directory::EmergencyContactResponse,
        health::HealthResponse,
        health::VersionResponse,
        health::StatusResponse,
        health::ServiceStatus,
    )),
    tags(
        (name = "health", description = "Service health and version"),
        (name = "assistant", description = "Chat relay and voice synthesis proxies"),
        (name = "directory", description = "Nearby facilities and emergency contacts")
    )
)]
pub struct ApiDoc;

/// Create Swagger UI and OpenAPI JSON routes
pub fn create_docs_routes() -> Router<SahayServer> {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
