//! Common test utilities for integration tests
//!
//! The service has no external dependencies, so every test drives the real
//! router in-process.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;
use vivefit_backend::{config::AppConfig, routes, state::AppState};

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
}

impl TestApp {
    /// Create a new test application without a metrics recorder
    pub fn new() -> Self {
        let state = AppState::new(test_config(), None);
        let app = routes::create_router(state);

        Self { app }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// Make a GET request and parse the JSON body
    pub async fn get_json(&self, path: &str) -> (StatusCode, serde_json::Value) {
        let (status, body) = self.get(path).await;
        (status, serde_json::from_str(&body).unwrap())
    }

    /// Make a POST request and parse the JSON body
    pub async fn post_json(&self, path: &str, body: &str) -> (StatusCode, serde_json::Value) {
        let (status, body) = self.post(path, body).await;
        (status, serde_json::from_str(&body).unwrap())
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        server: vivefit_backend::config::ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        http: vivefit_backend::config::HttpConfig {
            request_timeout_secs: 5,
            max_body_bytes: 4 * 1024,
        },
        metrics: vivefit_backend::config::MetricsConfig { enabled: false },
    }
}
