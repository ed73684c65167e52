use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    /// Blank user input is ignored, never sent upstream.
    #[error("message is empty")]
    EmptyMessage,

    /// Fatal per-request configuration failure, checked before any network
    /// call.
    #[error("AI gateway credential is not configured")]
    MissingCredential,

    #[error("configuration error: {0}")]
    Config(String),

    /// Upstream 429. Reported to the caller as retry-later; the relay never
    /// retries on its own.
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    /// Upstream 402.
    #[error("Payment required. Please add credits.")]
    PaymentRequired,

    /// Any other upstream failure.
    #[error("AI service error")]
    Gateway(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type RelayResult<T> = Result<T, RelayError>;
