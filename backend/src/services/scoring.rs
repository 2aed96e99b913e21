//! Daily score service
//!
//! Thin orchestration over the pure scoring engine: validate the request,
//! compute the report, attach the energy breakdown.

use crate::error::ApiError;
use calorie_coach_shared::energy::energy_breakdown;
use calorie_coach_shared::scoring::{compute_score, ScoreInput};
use calorie_coach_shared::types::{ScoreRequest, ScoreResponse};
use calorie_coach_shared::validation::validate_profile;
use validator::Validate;

/// Daily score service
pub struct ScoringService;

impl ScoringService {
    /// Compute the daily score report for a request
    pub fn score(request: ScoreRequest) -> Result<ScoreResponse, ApiError> {
        request
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;
        validate_profile(&request.profile).map_err(ApiError::Validation)?;

        let breakdown = energy_breakdown(&request.profile);

        let input = ScoreInput {
            profile: request.profile,
            exercise_calories: request.exercise_calories,
            diet_calories: request.diet_calories,
            protein: request.protein,
            carbs: request.carbs,
            fat: request.fat,
            selected_foods: request.selected_foods,
            weekly_deficits: request.weekly_deficits,
        };

        let report = compute_score(&input);

        Ok(ScoreResponse {
            calorie_score: report.calorie_score,
            nutrition_score: report.nutrition_score,
            diversity_score: report.diversity_score,
            consistency_score: report.consistency_score,
            final_score: report.final_score,
            balance: report.balance,
            traffic_light: report.traffic_light,
            suggestions: report.suggestions,
            bmr: breakdown.bmr.round(),
            tdee: breakdown.tdee.round(),
            daily_target: breakdown.daily_target.round(),
        })
    }
}
