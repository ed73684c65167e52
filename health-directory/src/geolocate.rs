use crate::error::{DirectoryError, DirectoryResult};
use crate::facility::Coordinates;
use async_trait::async_trait;

/// Device position capability.
///
/// Injected rather than detected ad hoc; a platform without geolocation
/// supplies [`NoGeolocation`] and callers degrade with a notification
/// instead of crashing.
#[async_trait]
pub trait Geolocator: Send + Sync {
    /// One position read. Requested fresh on every directory visit.
    async fn current_position(&self) -> DirectoryResult<Coordinates>;
}

/// Geolocator backed by an already-known position (a client-supplied fix,
/// or a test).
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition(pub Coordinates);

impl FixedPosition {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self(Coordinates::new(latitude, longitude))
    }
}

#[async_trait]
impl Geolocator for FixedPosition {
    async fn current_position(&self) -> DirectoryResult<Coordinates> {
        Ok(self.0)
    }
}

/// The unavailable variant of the capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGeolocation;

#[async_trait]
impl Geolocator for NoGeolocation {
    async fn current_position(&self) -> DirectoryResult<Coordinates> {
        Err(DirectoryError::LocationUnsupported)
    }
}
