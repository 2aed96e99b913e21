//! Health check endpoints
//!
//! Provides Kubernetes-compatible health check endpoints:
//! - /health - Basic health check
//! - /health/ready - Readiness probe (checks the catalogs loaded)
//! - /health/live - Liveness probe (always returns OK if server is running)

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<HealthChecks>,
}

/// Individual health checks
#[derive(Serialize)]
pub struct HealthChecks {
    pub catalog: CheckStatus,
}

/// Status of an individual check
#[derive(Serialize)]
pub struct CheckStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Basic health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
    })
}

/// Readiness probe - checks if the service is ready to accept traffic
/// Returns 503 if the catalogs failed to load
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let catalog_ok = state.catalog().food_count() > 0 && state.catalog().exercise_count() > 0;

    let catalog_check = if catalog_ok {
        CheckStatus {
            status: "healthy".to_string(),
            message: None,
        }
    } else {
        CheckStatus {
            status: "unhealthy".to_string(),
            message: Some("catalog datasets are empty".to_string()),
        }
    };

    let response = HealthResponse {
        status: if catalog_ok { "ready" } else { "not_ready" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(HealthChecks {
            catalog: catalog_check,
        }),
    };

    if catalog_ok {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Liveness probe - checks if the service is alive
/// Always returns OK if the server is running
pub async fn liveness_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "alive".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
    })
}
