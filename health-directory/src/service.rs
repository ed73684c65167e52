use crate::distance::rank_by_distance;
use crate::error::DirectoryResult;
use crate::facility::{Coordinates, Facility, FacilityCategory};
use crate::geolocate::Geolocator;
use crate::overpass::FacilityQuery;
use context_store::{keys, put_json, ContextStore};
use std::sync::Arc;
use tracing::{info, warn};

/// At most this many hospitals are cached for the chat relay.
const HOSPITAL_CACHE_LIMIT: usize = 5;

/// Facility directory: query, map, rank, and cache points of care.
pub struct DirectoryService {
    query: Arc<dyn FacilityQuery>,
    store: Arc<dyn ContextStore>,
}

impl DirectoryService {
    pub fn new(query: Arc<dyn FacilityQuery>, store: Arc<dyn ContextStore>) -> Self {
        Self { query, store }
    }

    /// Refresh the directory from the device position.
    ///
    /// Each refresh produces an entirely new facility set; nothing is merged
    /// with a previous result. On failure the caller gets an error and an
    /// empty list to render; no retry is attempted.
    pub async fn refresh(&self, geolocator: &dyn Geolocator) -> DirectoryResult<Vec<Facility>> {
        let origin = geolocator.current_position().await?;
        self.refresh_at(origin).await
    }

    /// Refresh the directory around an already-known position.
    pub async fn refresh_at(&self, origin: Coordinates) -> DirectoryResult<Vec<Facility>> {
        let elements = self.query.find_nearby(origin).await?;

        let mut facilities: Vec<Facility> = elements
            .iter()
            .enumerate()
            .map(|(index, element)| Facility::from_element(index, element, origin))
            .collect();
        rank_by_distance(&mut facilities);

        info!(count = facilities.len(), "Facility directory refreshed");
        self.cache_context(&facilities, origin);

        Ok(facilities)
    }

    /// Overwrite the two context keys the chat relay reads back.
    ///
    /// A cache failure is logged but does not fail the refresh; the
    /// directory itself is still usable.
    fn cache_context(&self, facilities: &[Facility], origin: Coordinates) {
        let hospitals: Vec<&Facility> = facilities
            .iter()
            .filter(|f| f.category == FacilityCategory::Hospital)
            .take(HOSPITAL_CACHE_LIMIT)
            .collect();

        if let Err(err) = put_json(self.store.as_ref(), keys::NEARBY_HOSPITALS, &hospitals) {
            warn!(error = %err, "Failed to cache nearby hospitals");
        }
        if let Err(err) = put_json(self.store.as_ref(), keys::USER_LOCATION, &origin) {
            warn!(error = %err, "Failed to cache user location");
        }
    }
}

/// Directory tab filter: category match plus case-insensitive search over
/// name and services.
pub fn filter_facilities<'a>(
    facilities: &'a [Facility],
    category: FacilityCategory,
    term: &str,
) -> Vec<&'a Facility> {
    let needle = term.to_lowercase();
    facilities
        .iter()
        .filter(|f| f.category == category)
        .filter(|f| {
            f.name.to_lowercase().contains(&needle)
                || f.services
                    .iter()
                    .any(|s| s.to_lowercase().contains(&needle))
        })
        .collect()
}
