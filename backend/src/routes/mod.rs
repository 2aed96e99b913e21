//! Route definitions for the Calorie Coach API
//!
//! This module organizes all API routes and applies middleware.

use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod advice;
mod catalog;
mod health;
mod logs;
mod recommend;
mod score;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        // The original scoring route, kept at the root
        .route("/api/score", post(score::compute_score))
        .nest("/api/v1", api_routes())
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { "Calorie Coach API v1" }))
        .route("/foods", get(catalog::search_foods))
        .route("/foods/categories", get(catalog::food_categories))
        .route("/exercises", get(catalog::search_exercises))
        .route("/energy", post(score::energy))
        .route("/logs/meals", post(logs::log_meal).get(logs::list_meals))
        .route("/logs/meals/:id", axum::routing::delete(logs::delete_meal))
        .route(
            "/logs/exercises",
            post(logs::log_exercise).get(logs::list_exercises),
        )
        .route(
            "/logs/exercises/:id",
            axum::routing::delete(logs::delete_exercise),
        )
        .route("/summary", get(logs::daily_summary))
        .route("/recommendations", post(recommend::recommend))
        .route("/advice", post(advice::advice))
}
