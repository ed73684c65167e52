use assistant_relay::RelayError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use health_directory::DirectoryError;
use serde::{Deserialize, Serialize};
use speech_service::SpeechError;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

/// Error wire shape shared by every endpoint: `{"error": "<message>"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorBody {
    /// Human-readable error message
    #[schema(example = "Rate limit exceeded. Please try again later.")]
    pub error: String,
}

/// Main API error enum
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{message}")]
    Validation { message: String },

    #[error("resource not found: {resource_type}")]
    NotFound { resource_type: String },

    /// Upstream rate limiting, relayed as retry-later. Never retried here.
    #[error("{message}")]
    RateLimit { message: String },

    /// Upstream payment/quota exhaustion.
    #[error("{message}")]
    PaymentRequired { message: String },

    /// Upstream service failure on our outbound calls.
    #[error("{message}")]
    Upstream { message: String },

    /// Missing or broken server-side configuration.
    #[error("{message}")]
    Configuration { message: String },

    #[error("{message}")]
    Internal { message: String },
}

impl ApiError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(resource_type: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
        }
    }

    /// Create an upstream-failure error
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::RateLimit { .. } => StatusCode::TOO_MANY_REQUESTS,
            ApiError::PaymentRequired { .. } => StatusCode::PAYMENT_REQUIRED,
            ApiError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            ApiError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error type string
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "validation_error",
            ApiError::NotFound { .. } => "not_found",
            ApiError::RateLimit { .. } => "rate_limit_exceeded",
            ApiError::PaymentRequired { .. } => "payment_required",
            ApiError::Upstream { .. } => "upstream_error",
            ApiError::Configuration { .. } => "configuration_error",
            ApiError::Internal { .. } => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error_id = Uuid::new_v4().to_string();
        let status_code = self.status_code();

        // Log the error with correlation ID
        error!(
            error_id = %error_id,
            error_type = %self.error_type(),
            status_code = %status_code.as_u16(),
            error = %self,
            "API error occurred"
        );

        let body = ApiErrorBody {
            error: self.to_string(),
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::EmptyMessage => Self::validation("Message is required"),
            RelayError::MissingCredential | RelayError::Config(_) => {
                Self::configuration(err.to_string())
            }
            RelayError::RateLimited => Self::RateLimit {
                message: err.to_string(),
            },
            RelayError::PaymentRequired => Self::PaymentRequired {
                message: err.to_string(),
            },
            // Upstream detail is already logged at the call site; callers
            // only see the generic message.
            RelayError::Gateway(_) | RelayError::Network(_) | RelayError::Serialization(_) => {
                Self::internal("AI service error")
            }
        }
    }
}

impl From<SpeechError> for ApiError {
    fn from(err: SpeechError) -> Self {
        match err {
            SpeechError::InvalidInput(message) => Self::validation(message),
            SpeechError::Config(_) => Self::configuration("TTS service not configured"),
            SpeechError::Synthesis(message) => Self::internal(message),
            SpeechError::Unsupported
            | SpeechError::Capture(_)
            | SpeechError::Network(_)
            | SpeechError::Serialization(_) => Self::internal("Failed to generate speech"),
        }
    }
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::LocationUnsupported | DirectoryError::Location(_) => {
                Self::validation(err.to_string())
            }
            DirectoryError::Config(_) => Self::configuration(err.to_string()),
            DirectoryError::Query(_) | DirectoryError::Network(_) => {
                Self::upstream("Could not fetch nearby facilities. Please try again.")
            }
            DirectoryError::Serialization(_) | DirectoryError::Store(_) => {
                Self::internal(err.to_string())
            }
        }
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
