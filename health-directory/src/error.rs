use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("geolocation is not available on this device")]
    LocationUnsupported,

    #[error("location error: {0}")]
    Location(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("facility query failed: {0}")]
    Query(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("context store error: {0}")]
    Store(#[from] context_store::StoreError),
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;
