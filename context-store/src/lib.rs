//! Small key-value context store for Sahay Engine
//!
//! Holds the handful of values the assistant reuses across screens: the most
//! recent user coordinates and the nearest-hospital shortlist written by the
//! facility directory and read back by the chat relay. Values are plain JSON
//! strings under well-known keys.
//!
//! Writes are last-write-wins with no concurrency guard beyond the lock that
//! protects the underlying map. Two screens racing on the same key keep the
//! later write; that is an accepted simplification, not a bug.

pub mod error;
pub mod file;
pub mod memory;

pub use error::*;
pub use file::*;
pub use memory::*;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Well-known context keys.
pub mod keys {
    /// Serialized facility array, capped at five hospital entries.
    pub const NEARBY_HOSPITALS: &str = "nearby_hospitals";
    /// Serialized coordinates from the most recent successful facility query.
    pub const USER_LOCATION: &str = "user_location";
}

/// Backend-agnostic key-value store interface.
pub trait ContextStore: Send + Sync {
    /// Read the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrite the value stored under `key`.
    fn put(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove the value stored under `key`, if any.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// Serialize `value` as JSON and store it under `key`.
pub fn put_json<T: Serialize>(store: &dyn ContextStore, key: &str, value: &T) -> StoreResult<()> {
    let raw = serde_json::to_string(value)?;
    store.put(key, &raw)
}

/// Read and deserialize the JSON value under `key`.
///
/// A missing key is `Ok(None)`; a present but malformed value is an error.
pub fn get_json<T: DeserializeOwned>(store: &dyn ContextStore, key: &str) -> StoreResult<Option<T>> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Pin {
        latitude: f64,
        longitude: f64,
    }

    #[test]
    fn test_json_round_trip() {
        let store = MemoryStore::new();
        let pin = Pin {
            latitude: 28.6139,
            longitude: 77.2090,
        };

        put_json(&store, keys::USER_LOCATION, &pin).unwrap();
        let loaded: Option<Pin> = get_json(&store, keys::USER_LOCATION).unwrap();
        assert_eq!(loaded, Some(pin));
    }

    #[test]
    fn test_missing_key_is_none() {
        let store = MemoryStore::new();
        let loaded: Option<Pin> = get_json(&store, keys::NEARBY_HOSPITALS).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_malformed_value_is_error() {
        let store = MemoryStore::new();
        store.put(keys::USER_LOCATION, "not json").unwrap();
        let loaded: StoreResult<Option<Pin>> = get_json(&store, keys::USER_LOCATION);
        assert!(loaded.is_err());
    }
}
