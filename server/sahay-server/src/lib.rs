//! Sahay Server - multilingual health-assistance API
//!
//! This library provides the HTTP surface of Sahay Engine: the symptom-chat
//! and text-to-speech proxy endpoints, the nearby-facility directory, and
//! the emergency-contact shortcuts, with permissive CORS for browser
//! clients.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod validation;

// Re-export commonly used types
pub use error::*;
pub use server::{SahayServer, ServerConfig};

use axum::{middleware::from_fn, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Create the main application router with all routes and middleware
pub fn create_app(server: SahayServer) -> Router {
    routes::create_routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::create_cors_layer())
                .layer(from_fn(middleware::request_timing_middleware)),
        )
        .with_state(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{SahayServer, ServerConfig};
    use assistant_relay::{
        ChatGateway, CompletionRequest, RelayConfig, RelayError, RelayResult, RelayService,
    };
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use context_store::{ContextStore, MemoryStore};
    use health_directory::{
        Coordinates, DirectoryResult, DirectoryService, FacilityQuery, OverpassElement,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use speech_service::{RemoteSynthesizer, SpeechConfig, SpeechResult, SpeechSynthesis};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tower::ServiceExt;

    enum GatewayMode {
        Reply(&'static str),
        RateLimited,
        PaymentRequired,
    }

    struct FakeGateway {
        calls: AtomicUsize,
        mode: GatewayMode,
    }

    impl FakeGateway {
        fn new(mode: GatewayMode) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                mode,
            })
        }
    }

    #[async_trait]
    impl ChatGateway for FakeGateway {
        async fn complete(
            &self,
            _api_key: &str,
            _request: CompletionRequest,
        ) -> RelayResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.mode {
                GatewayMode::Reply(text) => Ok(text.to_string()),
                GatewayMode::RateLimited => Err(RelayError::RateLimited),
                GatewayMode::PaymentRequired => Err(RelayError::PaymentRequired),
            }
        }
    }

    struct FakeSynthesis;

    #[async_trait]
    impl SpeechSynthesis for FakeSynthesis {
        async fn synthesize(&self, _text: &str, _language: &str) -> SpeechResult<Vec<u8>> {
            Ok(b"fake-audio".to_vec())
        }
    }

    struct CannedFacilities;

    #[async_trait]
    impl FacilityQuery for CannedFacilities {
        async fn find_nearby(&self, _origin: Coordinates) -> DirectoryResult<Vec<OverpassElement>> {
            let hospital = OverpassElement {
                lat: 28.7041,
                lon: 77.1025,
                tags: HashMap::from([
                    ("amenity".to_string(), "hospital".to_string()),
                    ("name".to_string(), "Far Hospital".to_string()),
                ]),
            };
            let pharmacy = OverpassElement {
                lat: 28.6150,
                lon: 77.2095,
                tags: HashMap::from([("amenity".to_string(), "pharmacy".to_string())]),
            };
            Ok(vec![hospital, pharmacy])
        }
    }

    fn test_server(
        gateway: Arc<FakeGateway>,
        relay_config: RelayConfig,
        synthesizer: Arc<dyn SpeechSynthesis>,
    ) -> (SahayServer, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let context: Arc<dyn ContextStore> = store.clone();
        let server = SahayServer::with_services(
            ServerConfig {
                chat_gateway_configured: relay_config.api_key.is_some(),
                ..ServerConfig::default()
            },
            Arc::new(RelayService::new(relay_config, gateway)),
            synthesizer,
            Arc::new(DirectoryService::new(
                Arc::new(CannedFacilities),
                context.clone(),
            )),
            context,
        );
        (server, store)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn chat_body() -> Value {
        json!({
            "message": "I have a fever",
            "language": "hi",
            "conversationHistory": [],
            "nearbyHospitals": [],
            "userLocation": null
        })
    }

    #[tokio::test]
    async fn test_chat_relays_reply() {
        let gateway = FakeGateway::new(GatewayMode::Reply("Rest and hydrate"));
        let (server, _) = test_server(
            gateway.clone(),
            RelayConfig::with_key("test-key"),
            Arc::new(FakeSynthesis),
        );

        let response = create_app(server)
            .oneshot(post_json("/api/v1/assistant/chat", chat_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["response"], "Rest and hydrate");
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_chat_missing_credential_never_calls_gateway() {
        let gateway = FakeGateway::new(GatewayMode::Reply("never"));
        let (server, _) = test_server(
            gateway.clone(),
            RelayConfig::default(),
            Arc::new(FakeSynthesis),
        );

        let response = create_app(server)
            .oneshot(post_json("/api/v1/assistant/chat", chat_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("credential"));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_chat_rate_limit_translates_to_429() {
        let gateway = FakeGateway::new(GatewayMode::RateLimited);
        let (server, _) = test_server(
            gateway,
            RelayConfig::with_key("test-key"),
            Arc::new(FakeSynthesis),
        );

        let response = create_app(server)
            .oneshot(post_json("/api/v1/assistant/chat", chat_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Rate limit exceeded. Please try again later.");
    }

    #[tokio::test]
    async fn test_chat_payment_required_translates_to_402() {
        let gateway = FakeGateway::new(GatewayMode::PaymentRequired);
        let (server, _) = test_server(
            gateway,
            RelayConfig::with_key("test-key"),
            Arc::new(FakeSynthesis),
        );

        let response = create_app(server)
            .oneshot(post_json("/api/v1/assistant/chat", chat_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYMENT_REQUIRED);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Payment required. Please add credits.");
    }

    #[tokio::test]
    async fn test_chat_blank_message_is_rejected_without_gateway_call() {
        let gateway = FakeGateway::new(GatewayMode::Reply("never"));
        let (server, _) = test_server(
            gateway.clone(),
            RelayConfig::with_key("test-key"),
            Arc::new(FakeSynthesis),
        );

        let mut body = chat_body();
        body["message"] = json!("   ");
        let response = create_app(server)
            .oneshot(post_json("/api/v1/assistant/chat", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_speech_returns_base64_audio() {
        let gateway = FakeGateway::new(GatewayMode::Reply("unused"));
        let (server, _) = test_server(
            gateway,
            RelayConfig::with_key("test-key"),
            Arc::new(FakeSynthesis),
        );

        let response = create_app(server)
            .oneshot(post_json(
                "/api/v1/assistant/speech",
                json!({"text": "hello", "language": "hi"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        // base64 of "fake-audio"
        assert_eq!(body["audioContent"], "ZmFrZS1hdWRpbw==");
    }

    #[tokio::test]
    async fn test_speech_missing_credential_is_500() {
        let gateway = FakeGateway::new(GatewayMode::Reply("unused"));
        let synthesizer = Arc::new(RemoteSynthesizer::new(SpeechConfig::default()).unwrap());
        let (server, _) = test_server(gateway, RelayConfig::with_key("test-key"), synthesizer);

        let response = create_app(server)
            .oneshot(post_json("/api/v1/assistant/speech", json!({"text": "hello"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "TTS service not configured");
    }

    #[tokio::test]
    async fn test_nearby_facilities_ranked_and_cached() {
        let gateway = FakeGateway::new(GatewayMode::Reply("unused"));
        let (server, store) = test_server(
            gateway,
            RelayConfig::with_key("test-key"),
            Arc::new(FakeSynthesis),
        );

        let response = create_app(server)
            .oneshot(post_json(
                "/api/v1/directory/nearby",
                json!({"latitude": 28.6139, "longitude": 77.2090}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let facilities = body.as_array().unwrap();
        assert_eq!(facilities.len(), 2);
        // The pharmacy is closer than the hospital, so it comes first.
        assert_eq!(facilities[0]["type"], "Medical Store");
        assert_eq!(facilities[1]["name"], "Far Hospital");

        // The refresh overwrote both context keys.
        assert!(store.get(context_store::keys::NEARBY_HOSPITALS).unwrap().is_some());
        assert!(store.get(context_store::keys::USER_LOCATION).unwrap().is_some());
    }

    #[tokio::test]
    async fn test_invalid_coordinates_rejected() {
        let gateway = FakeGateway::new(GatewayMode::Reply("unused"));
        let (server, _) = test_server(
            gateway,
            RelayConfig::with_key("test-key"),
            Arc::new(FakeSynthesis),
        );

        let response = create_app(server)
            .oneshot(post_json(
                "/api/v1/directory/nearby",
                json!({"latitude": 123.0, "longitude": 77.0}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_emergency_contacts_listing() {
        let gateway = FakeGateway::new(GatewayMode::Reply("unused"));
        let (server, _) = test_server(
            gateway,
            RelayConfig::with_key("test-key"),
            Arc::new(FakeSynthesis),
        );

        let request = Request::builder()
            .uri("/api/v1/directory/contacts")
            .body(Body::empty())
            .unwrap();
        let response = create_app(server).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let contacts = body.as_array().unwrap();
        assert_eq!(contacts.len(), 4);
        assert_eq!(contacts[1]["number"], "108");
        assert_eq!(contacts[1]["dial_uri"], "tel:108");
    }

    #[tokio::test]
    async fn test_preflight_gets_permissive_cors() {
        let gateway = FakeGateway::new(GatewayMode::Reply("unused"));
        let (server, _) = test_server(
            gateway,
            RelayConfig::with_key("test-key"),
            Arc::new(FakeSynthesis),
        );

        let request = Request::builder()
            .method("OPTIONS")
            .uri("/api/v1/assistant/chat")
            .header(header::ORIGIN, "https://sahay.example")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap();
        let response = create_app(server).oneshot(request).await.unwrap();

        assert!(response.status().is_success());
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
    }

    #[tokio::test]
    async fn test_health_reports_credential_state() {
        let gateway = FakeGateway::new(GatewayMode::Reply("unused"));
        let (server, _) = test_server(
            gateway,
            RelayConfig::default(),
            Arc::new(FakeSynthesis),
        );

        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = create_app(server).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["checks"]["chat_gateway"], "not_configured");
    }
}
