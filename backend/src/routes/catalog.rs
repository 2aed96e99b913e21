//! Food and exercise catalog API routes

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use calorie_coach_shared::models::{ExerciseItem, FoodCategory, FoodItem};
use calorie_coach_shared::types::{ExerciseSearchQuery, FoodSearchQuery};

/// GET /api/v1/foods - Search the food catalog
///
/// Supports a free-text `q`, a `category` filter, and a `limit`.
pub async fn search_foods(
    State(state): State<AppState>,
    Query(query): Query<FoodSearchQuery>,
) -> Result<Json<Vec<FoodItem>>, ApiError> {
    let category = query
        .category
        .as_deref()
        .map(|c| c.parse::<FoodCategory>())
        .transpose()
        .map_err(ApiError::Validation)?;

    Ok(Json(state.catalog().search_foods(
        query.q.as_deref(),
        category,
        query.limit,
    )))
}

/// GET /api/v1/foods/categories - List all food categories
pub async fn food_categories() -> Json<Vec<&'static str>> {
    Json(FoodCategory::ALL.iter().map(|c| c.as_str()).collect())
}

/// GET /api/v1/exercises - Search the exercise catalog
pub async fn search_exercises(
    State(state): State<AppState>,
    Query(query): Query<ExerciseSearchQuery>,
) -> Json<Vec<ExerciseItem>> {
    Json(
        state
            .catalog()
            .search_exercises(query.q.as_deref(), query.limit),
    )
}
