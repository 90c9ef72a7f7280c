//! Common Test Utilities
//!
//! Shared helpers and test infrastructure. Every `TestApp` owns its own
//! freshly seeded store, so tests are isolated from each other.

use std::sync::Arc;

use axum::{body::Body, http::Request, response::Response, Router};
use tower::ServiceExt;

use webapp_starter::config::{
    CorsSettings, ServerSettings, Settings, SiteSettings, SnowflakeSettings,
};
use webapp_starter::infrastructure::repositories::InMemoryExampleRepository;
use webapp_starter::presentation::http::routes;
use webapp_starter::shared::snowflake::SnowflakeGenerator;
use webapp_starter::startup::AppState;

/// Test application builder
pub struct TestApp {
    pub router: Router,
}

fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        cors: CorsSettings {
            allowed_origins: Vec::new(),
        },
        snowflake: SnowflakeSettings { machine_id: 1 },
        site: SiteSettings {
            name: "웹앱 스타터킷".to_string(),
            description: "테스트 설정".to_string(),
        },
        environment: "test".to_string(),
    }
}

impl TestApp {
    /// Create a test application with its own seeded store
    pub fn new() -> Self {
        let snowflake = Arc::new(SnowflakeGenerator::new(1));
        let examples = Arc::new(InMemoryExampleRepository::seeded(snowflake));
        let state = AppState {
            examples,
            settings: Arc::new(test_settings()),
        };

        Self {
            router: routes::create_router(state),
        }
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a PUT request with JSON body
    pub async fn put_json(&self, uri: &str, body: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a DELETE request
    pub async fn delete(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

/// Read a response body as JSON
pub async fn response_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
