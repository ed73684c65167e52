use crate::error::ApiError;
use crate::server::SahayServer;
use crate::validate_field;
use crate::validation::RequestValidation;
use axum::{extract::State, Json};
use health_directory::{
    directions_url, telephone_uri, Coordinates, Facility, FixedPosition, EMERGENCY_CONTACTS,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Nearby facility lookup request
#[derive(Debug, Deserialize, ToSchema)]
pub struct NearbyFacilitiesRequest {
    #[schema(example = 28.6139)]
    pub latitude: f64,
    #[schema(example = 77.2090)]
    pub longitude: f64,
}

impl RequestValidation for NearbyFacilitiesRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_field!(
            self.latitude.is_finite() && (-90.0..=90.0).contains(&self.latitude),
            "Latitude must be between -90 and 90"
        );
        validate_field!(
            self.longitude.is_finite() && (-180.0..=180.0).contains(&self.longitude),
            "Longitude must be between -180 and 180"
        );
        Ok(())
    }
}

/// Facility coordinates
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FacilityCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One ranked facility
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FacilityResponse {
    pub id: u32,
    #[schema(example = "District Hospital")]
    pub name: String,
    /// Directory tab: "Hospital", "Medical Store", or "ASHA Worker"
    #[serde(rename = "type")]
    #[schema(example = "Hospital")]
    pub category: String,
    /// Distance label, e.g. "1.2 km"
    pub distance: Option<String>,
    /// Phone number, or "N/A" when unknown
    pub phone: String,
    pub services: Vec<String>,
    pub available: bool,
    pub coordinates: FacilityCoordinates,
    /// Web map directions URL for the facility
    pub directions_url: String,
}

impl From<Facility> for FacilityResponse {
    fn from(facility: Facility) -> Self {
        Self {
            id: facility.id,
            name: facility.name,
            category: facility.category.display().to_string(),
            distance: facility.distance,
            phone: facility.phone,
            services: facility.services,
            available: facility.available,
            coordinates: FacilityCoordinates {
                latitude: facility.coordinates.latitude,
                longitude: facility.coordinates.longitude,
            },
            directions_url: directions_url(facility.coordinates),
        }
    }
}

/// Find healthcare facilities near a position, nearest first
#[utoipa::path(
    post,
    path = "/api/v1/directory/nearby",
    request_body = NearbyFacilitiesRequest,
    responses(
        (status = 200, description = "Ranked facilities", body = Vec<FacilityResponse>),
        (status = 400, description = "Invalid coordinates", body = crate::error::ApiErrorBody),
        (status = 502, description = "Geodata service failure", body = crate::error::ApiErrorBody)
    ),
    tag = "directory"
)]
pub async fn nearby_facilities(
    State(server): State<SahayServer>,
    Json(payload): Json<NearbyFacilitiesRequest>,
) -> Result<Json<Vec<FacilityResponse>>, ApiError> {
    payload.validate()?;

    let geolocator = FixedPosition(Coordinates::new(payload.latitude, payload.longitude));
    let facilities = server.directory.refresh(&geolocator).await?;

    Ok(Json(facilities.into_iter().map(Into::into).collect()))
}

/// One emergency helpline entry
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmergencyContactResponse {
    #[schema(example = "Ambulance")]
    pub name: String,
    #[schema(example = "108")]
    pub number: String,
    pub description: String,
    /// Telephone URI for the platform dialer
    #[schema(example = "tel:108")]
    pub dial_uri: String,
}

/// List the emergency helpline shortcuts
#[utoipa::path(
    get,
    path = "/api/v1/directory/contacts",
    responses(
        (status = 200, description = "Emergency helplines", body = Vec<EmergencyContactResponse>)
    ),
    tag = "directory"
)]
pub async fn emergency_contacts() -> Json<Vec<EmergencyContactResponse>> {
    let contacts = EMERGENCY_CONTACTS
        .iter()
        .map(|contact| EmergencyContactResponse {
            name: contact.name.to_string(),
            number: contact.number.to_string(),
            description: contact.description.to_string(),
            dial_uri: telephone_uri(contact.number),
        })
        .collect();
    Json(contacts)
}
