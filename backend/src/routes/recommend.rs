//! Meal recommendation API route

use crate::error::ApiError;
use crate::services::recommend::RecommendService;
use crate::state::AppState;
use axum::{extract::State, Json};
use calorie_coach_shared::types::{RecommendRequest, RecommendResponse};

/// POST /api/v1/recommendations - Rank catalog foods for the next meal
pub async fn recommend(
    State(state): State<AppState>,
    Json(req): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, ApiError> {
    Ok(Json(RecommendService::recommend(state.catalog(), req)?))
}
