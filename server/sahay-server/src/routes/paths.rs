//! Centralized API route path constants
//!
//! Constants for all routes, shared between runtime route definitions and
//! the OpenAPI annotations. utoipa `#[path(...)]` attributes need string
//! literals, so the literal in each handler annotation must match the
//! constant here.

/// API base path
pub const API_V1: &str = "/api/v1";

/// Health check endpoints
pub mod health {
    pub const HEALTH: &str = "/health";
    pub const VERSION: &str = "/version";
    pub const STATUS: &str = "/status";
}

/// Assistant proxy endpoints
pub mod assistant {
    pub const CHAT: &str = "/assistant/chat";
    pub const SPEECH: &str = "/assistant/speech";
}

/// Facility directory endpoints
pub mod directory {
    pub const NEARBY: &str = "/directory/nearby";
    pub const CONTACTS: &str = "/directory/contacts";
}
