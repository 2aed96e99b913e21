//! Scoring and energy API routes

use crate::error::ApiError;
use crate::services::scoring::ScoringService;
use axum::Json;
use calorie_coach_shared::energy::energy_breakdown;
use calorie_coach_shared::types::{EnergyRequest, EnergyResponse, ScoreRequest, ScoreResponse};
use calorie_coach_shared::validation::validate_profile;

/// POST /api/score - Compute the daily diet/exercise score
///
/// Accepts the day's profile, intake, macros, selected foods, and recent
/// balances; returns the component scores, final score, traffic light,
/// and suggestions.
pub async fn compute_score(
    Json(req): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, ApiError> {
    Ok(Json(ScoringService::score(req)?))
}

/// POST /api/v1/energy - BMR/TDEE breakdown for a profile
pub async fn energy(Json(req): Json<EnergyRequest>) -> Result<Json<EnergyResponse>, ApiError> {
    validate_profile(&req.profile).map_err(ApiError::Validation)?;

    let breakdown = energy_breakdown(&req.profile);

    Ok(Json(EnergyResponse {
        bmr: breakdown.bmr.round(),
        tdee: breakdown.tdee.round(),
        activity_multiplier: breakdown.activity_multiplier,
        daily_target: breakdown.daily_target.round(),
        unit: "kcal".to_string(),
    }))
}
