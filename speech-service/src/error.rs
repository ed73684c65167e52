use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpeechError {
    /// The platform has no speech-recognition capability.
    #[error("voice input is not supported on this device")]
    Unsupported,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("capture error: {0}")]
    Capture(String),

    #[error("synthesis error: {0}")]
    Synthesis(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type SpeechResult<T> = Result<T, SpeechError>;
