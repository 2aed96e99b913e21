//! Common test utilities for integration tests
//!
//! This module provides shared setup for driving the router in-process.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use calorie_coach_backend::{config::AppConfig, routes, state::AppState};
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
}

impl TestApp {
    /// Create a test application with default configuration (AI disabled)
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a test application with a custom configuration
    pub fn with_config(config: AppConfig) -> Self {
        let state = AppState::new(config).expect("state construction must succeed");
        Self {
            app: routes::create_router(state),
        }
    }

    /// Make a GET request
    #[allow(dead_code)]
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with JSON body
    #[allow(dead_code)]
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// Make a DELETE request
    #[allow(dead_code)]
    pub async fn delete(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("DELETE")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
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
