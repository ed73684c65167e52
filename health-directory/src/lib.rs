//! Nearby healthcare facility directory for Sahay Engine
//!
//! Finds points of care around the user: hospitals, medical stores, and
//! community health workers, queried from OpenStreetMap via an Overpass
//! interpreter, ranked by great-circle distance, and filtered for the
//! directory tabs.
//!
//! # Example
//!
//! ```rust,no_run
//! use health_directory::{DirectoryConfig, DirectoryService, FixedPosition, OverpassClient};
//! use context_store::MemoryStore;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DirectoryConfig::from_env()?;
//! let client = OverpassClient::new(config)?;
//! let service = DirectoryService::new(Arc::new(client), Arc::new(MemoryStore::new()));
//!
//! let geolocator = FixedPosition::new(28.6139, 77.2090);
//! let facilities = service.refresh(&geolocator).await?;
//! println!("{} facilities nearby", facilities.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod contacts;
pub mod distance;
pub mod error;
pub mod facility;
pub mod geolocate;
pub mod overpass;
pub mod service;

pub use config::*;
pub use contacts::*;
pub use distance::*;
pub use error::*;
pub use facility::*;
pub use geolocate::*;
pub use overpass::*;
pub use service::*;
