use crate::error::{DirectoryError, DirectoryResult};
use std::time::Duration;

/// Default public Overpass interpreter.
pub const DEFAULT_INTERPRETER_URL: &str = "https://overpass-api.de/api/interpreter";

/// Facility directory configuration.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// Overpass interpreter endpoint.
    pub interpreter_url: String,
    /// Search radius around the user, in meters.
    pub search_radius_m: u32,
    /// Server-side timeout requested in the Overpass query, in seconds.
    pub query_timeout_s: u32,
    /// Client-side request timeout.
    pub request_timeout: Duration,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            interpreter_url: DEFAULT_INTERPRETER_URL.to_string(),
            search_radius_m: 5000,
            query_timeout_s: 25,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl DirectoryConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> DirectoryResult<Self> {
        let defaults = Self::default();

        let interpreter_url = std::env::var("SAHAY_OVERPASS_URL")
            .unwrap_or(defaults.interpreter_url);

        let search_radius_m = match std::env::var("SAHAY_SEARCH_RADIUS_M") {
            Ok(raw) => raw.parse().map_err(|_| {
                DirectoryError::Config(format!("invalid SAHAY_SEARCH_RADIUS_M: {raw}"))
            })?,
            Err(_) => defaults.search_radius_m,
        };

        let query_timeout_s = match std::env::var("SAHAY_OVERPASS_TIMEOUT_S") {
            Ok(raw) => raw.parse().map_err(|_| {
                DirectoryError::Config(format!("invalid SAHAY_OVERPASS_TIMEOUT_S: {raw}"))
            })?,
            Err(_) => defaults.query_timeout_s,
        };

        Ok(Self {
            interpreter_url,
            search_radius_m,
            query_timeout_s,
            request_timeout: Duration::from_secs(u64::from(query_timeout_s) + 5),
        })
    }
}
