//! Advice API route

use crate::error::ApiError;
use crate::state::AppState;
use axum::{extract::State, Json};
use calorie_coach_shared::types::{AdviceRequest, AdviceResponse};

/// POST /api/v1/advice - Answer a diet/exercise question
///
/// Enriched by the configured LLM when available; always answered from
/// the knowledge base otherwise.
pub async fn advice(
    State(state): State<AppState>,
    Json(req): Json<AdviceRequest>,
) -> Result<Json<AdviceResponse>, ApiError> {
    Ok(Json(state.advisor.answer(req).await?))
}
