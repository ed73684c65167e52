use crate::distance::{distance_label, haversine_km};
use crate::overpass::OverpassElement;
use serde::{Deserialize, Serialize};

/// Geographic position in decimal degrees (WGS-84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Facility category shown as a directory tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacilityCategory {
    Hospital,
    #[serde(rename = "Medical Store")]
    MedicalStore,
    #[serde(rename = "ASHA Worker")]
    AshaWorker,
}

impl FacilityCategory {
    /// Display name used in labels and placeholder facility names.
    pub fn display(&self) -> &'static str {
        match self {
            Self::Hospital => "Hospital",
            Self::MedicalStore => "Medical Store",
            Self::AshaWorker => "ASHA Worker",
        }
    }
}

/// A point of care returned by the geodata query.
///
/// Populated entirely from one Overpass element; nothing mutates a facility
/// after mapping except the sort order of the surrounding list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facility {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub category: FacilityCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    pub phone: String,
    pub services: Vec<String>,
    pub available: bool,
    pub coordinates: Coordinates,
}

/// Marker used when a facility's phone number is unknown.
pub const PHONE_UNAVAILABLE: &str = "N/A";

impl Facility {
    /// Map one raw Overpass element into a facility.
    ///
    /// Category follows the source amenity tag: `pharmacy` becomes a medical
    /// store with a fixed two-item service list; `clinic` and anything
    /// unrecognized both land in the hospital tab (intentional
    /// simplification carried over from the product's directory design).
    /// A missing name falls back to `"<category> <index+1>"`, a missing
    /// phone to [`PHONE_UNAVAILABLE`].
    pub fn from_element(index: usize, element: &OverpassElement, origin: Coordinates) -> Self {
        let (category, services) = match element.tags.get("amenity").map(String::as_str) {
            Some("pharmacy") => (
                FacilityCategory::MedicalStore,
                vec!["Medicines".to_string(), "Health Products".to_string()],
            ),
            Some("clinic") => (
                FacilityCategory::Hospital,
                vec!["Consultation".to_string(), "Basic Care".to_string()],
            ),
            _ => (
                FacilityCategory::Hospital,
                vec!["General Medicine".to_string(), "Emergency".to_string()],
            ),
        };

        let coordinates = Coordinates::new(element.lat, element.lon);
        let km = haversine_km(origin, coordinates);

        let name = element
            .tags
            .get("name")
            .cloned()
            .unwrap_or_else(|| format!("{} {}", category.display(), index + 1));

        let phone = element
            .tags
            .get("phone")
            .or_else(|| element.tags.get("contact:phone"))
            .cloned()
            .unwrap_or_else(|| PHONE_UNAVAILABLE.to_string());

        Self {
            id: index as u32,
            name,
            category,
            distance: Some(distance_label(km)),
            phone,
            services,
            available: true,
            coordinates,
        }
    }
}
