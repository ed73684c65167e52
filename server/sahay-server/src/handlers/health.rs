use crate::error::ApiError;
use crate::server::SahayServer;
use axum::{extract::State, Json};
use serde::Serialize;
use std::collections::HashMap;
use utoipa::ToSchema;

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Overall system health status
    #[schema(example = "healthy")]
    pub status: String,
    /// Current timestamp in RFC3339 format
    #[schema(example = "2026-01-15T10:30:00Z")]
    pub timestamp: String,
    /// API version
    #[schema(example = "0.1.0")]
    pub version: String,
    /// Individual service health checks
    pub checks: HashMap<String, String>,
}

/// Version information response
#[derive(Debug, Serialize, ToSchema)]
pub struct VersionResponse {
    /// Application name
    #[schema(example = "Sahay Engine")]
    pub name: String,
    /// Application version
    #[schema(example = "0.1.0")]
    pub version: String,
    /// Enabled features
    pub features: Vec<String>,
}

/// System status response
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    /// Server name
    #[schema(example = "Sahay Engine")]
    pub server_name: String,
    /// Individual service statuses
    pub services: HashMap<String, ServiceStatus>,
}

/// Service status information
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceStatus {
    /// Service name
    #[schema(example = "AI Gateway")]
    pub name: String,
    /// Current status
    #[schema(example = "configured")]
    pub status: String,
    /// Last health check timestamp
    pub last_check: String,
}

fn configured_label(configured: bool) -> String {
    if configured { "configured" } else { "not_configured" }.to_string()
}

/// Health check handler
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "System is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(
    State(server): State<SahayServer>,
) -> Result<Json<HealthResponse>, ApiError> {
    let mut checks = HashMap::new();
    checks.insert(
        "chat_gateway".to_string(),
        configured_label(server.config.chat_gateway_configured),
    );
    checks.insert(
        "voice_api".to_string(),
        configured_label(server.config.voice_api_configured),
    );
    checks.insert("context_store".to_string(), "healthy".to_string());

    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks,
    };

    Ok(Json(response))
}

/// Version information handler
#[utoipa::path(
    get,
    path = "/version",
    tag = "health",
    responses(
        (status = 200, description = "Version information retrieved successfully", body = VersionResponse)
    )
)]
pub async fn version_info() -> Result<Json<VersionResponse>, ApiError> {
    let features = vec![
        "symptom-chat".to_string(),
        "facility-directory".to_string(),
        "emergency-contacts".to_string(),
        "voice-synthesis".to_string(),
        "multilingual".to_string(),
    ];

    let response = VersionResponse {
        name: "Sahay Engine".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        features,
    };

    Ok(Json(response))
}

/// System status handler
#[utoipa::path(
    get,
    path = "/status",
    tag = "health",
    responses(
        (status = 200, description = "System status retrieved successfully", body = StatusResponse)
    )
)]
pub async fn system_status(
    State(server): State<SahayServer>,
) -> Result<Json<StatusResponse>, ApiError> {
    let now = chrono::Utc::now().to_rfc3339();
    let mut services = HashMap::new();

    services.insert(
        "chat_gateway".to_string(),
        ServiceStatus {
            name: "AI Gateway".to_string(),
            status: configured_label(server.config.chat_gateway_configured),
            last_check: now.clone(),
        },
    );
    services.insert(
        "voice_api".to_string(),
        ServiceStatus {
            name: "Voice Synthesis".to_string(),
            status: configured_label(server.config.voice_api_configured),
            last_check: now.clone(),
        },
    );
    services.insert(
        "facility_directory".to_string(),
        ServiceStatus {
            name: "Facility Directory".to_string(),
            status: "running".to_string(),
            last_check: now,
        },
    );

    let response = StatusResponse {
        server_name: server.config.name.clone(),
        services,
    };

    Ok(Json(response))
}
