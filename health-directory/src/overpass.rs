use crate::config::DirectoryConfig;
use crate::error::{DirectoryError, DirectoryResult};
use crate::facility::Coordinates;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

/// One point from an Overpass `elements` array.
#[derive(Debug, Clone, Deserialize)]
pub struct OverpassElement {
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    pub elements: Vec<OverpassElement>,
}

/// Source of raw facility points around a position.
#[async_trait]
pub trait FacilityQuery: Send + Sync {
    async fn find_nearby(&self, origin: Coordinates) -> DirectoryResult<Vec<OverpassElement>>;
}

/// Overpass interpreter client.
pub struct OverpassClient {
    http: reqwest::Client,
    config: DirectoryConfig,
}

impl OverpassClient {
    pub fn new(config: DirectoryConfig) -> DirectoryResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self { http, config })
    }

    /// Bounded-radius union query for the four point-of-care tags.
    fn build_query(&self, origin: Coordinates) -> String {
        let radius = self.config.search_radius_m;
        let lat = origin.latitude;
        let lon = origin.longitude;
        format!(
            "[out:json][timeout:{timeout}];\n\
             (\n\
               node[\"amenity\"=\"hospital\"](around:{radius},{lat},{lon});\n\
               node[\"amenity\"=\"clinic\"](around:{radius},{lat},{lon});\n\
               node[\"amenity\"=\"pharmacy\"](around:{radius},{lat},{lon});\n\
               node[\"healthcare\"=\"centre\"](around:{radius},{lat},{lon});\n\
             );\n\
             out body;",
            timeout = self.config.query_timeout_s,
        )
    }
}

#[async_trait]
impl FacilityQuery for OverpassClient {
    async fn find_nearby(&self, origin: Coordinates) -> DirectoryResult<Vec<OverpassElement>> {
        let query = self.build_query(origin);
        debug!(
            url = %self.config.interpreter_url,
            radius_m = self.config.search_radius_m,
            "Querying facility points"
        );

        let response = self
            .http
            .post(&self.config.interpreter_url)
            .body(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Query(format!(
                "interpreter returned {status}"
            )));
        }

        let parsed: OverpassResponse = response.json().await?;
        Ok(parsed.elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_covers_all_tags() {
        let client = OverpassClient::new(DirectoryConfig::default()).unwrap();
        let query = client.build_query(Coordinates::new(28.6139, 77.2090));

        assert!(query.starts_with("[out:json][timeout:25];"));
        for tag in [
            r#"node["amenity"="hospital"]"#,
            r#"node["amenity"="clinic"]"#,
            r#"node["amenity"="pharmacy"]"#,
            r#"node["healthcare"="centre"]"#,
        ] {
            assert!(query.contains(tag), "missing {tag}");
        }
        assert!(query.contains("around:5000,28.6139,77.209"));
        assert!(query.ends_with("out body;"));
    }

    #[test]
    fn test_response_parsing() {
        let raw = r#"{
            "version": 0.6,
            "elements": [
                {"type": "node", "id": 1, "lat": 28.62, "lon": 77.21,
                 "tags": {"amenity": "hospital", "name": "District Hospital"}},
                {"type": "node", "id": 2, "lat": 28.61, "lon": 77.20}
            ]
        }"#;

        let parsed: OverpassResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.elements.len(), 2);
        assert_eq!(
            parsed.elements[0].tags.get("name").map(String::as_str),
            Some("District Hospital")
        );
        // Tags are optional on raw nodes.
        assert!(parsed.elements[1].tags.is_empty());
    }
}
