//! Meal/exercise log and daily summary API routes

use crate::error::ApiError;
use crate::services::tracking::TrackingService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use calorie_coach_shared::models::{ExerciseLog, MealLog};
use calorie_coach_shared::types::{
    DailySummaryResponse, LogExerciseRequest, LogMealRequest, LogsQuery,
};
use chrono::Utc;
use uuid::Uuid;

/// POST /api/v1/logs/meals - Log a meal entry
pub async fn log_meal(
    State(state): State<AppState>,
    Json(req): Json<LogMealRequest>,
) -> Result<(StatusCode, Json<MealLog>), ApiError> {
    let log = TrackingService::log_meal(state.catalog(), &state.tracking, req).await?;
    Ok((StatusCode::CREATED, Json(log)))
}

/// GET /api/v1/logs/meals - List meal entries for a date
///
/// Defaults to today (UTC) when no date is given.
pub async fn list_meals(
    State(state): State<AppState>,
    Query(query): Query<LogsQuery>,
) -> Result<Json<Vec<MealLog>>, ApiError> {
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());
    Ok(Json(
        TrackingService::meals_for_date(&state.tracking, &query.user_id, date).await,
    ))
}

/// DELETE /api/v1/logs/meals/{id} - Delete a meal entry
pub async fn delete_meal(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<LogsQuery>,
) -> Result<StatusCode, ApiError> {
    TrackingService::delete_meal(&state.tracking, &query.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/logs/exercises - Log an exercise entry
pub async fn log_exercise(
    State(state): State<AppState>,
    Json(req): Json<LogExerciseRequest>,
) -> Result<(StatusCode, Json<ExerciseLog>), ApiError> {
    let log = TrackingService::log_exercise(state.catalog(), &state.tracking, req).await?;
    Ok((StatusCode::CREATED, Json(log)))
}

/// GET /api/v1/logs/exercises - List exercise entries for a date
pub async fn list_exercises(
    State(state): State<AppState>,
    Query(query): Query<LogsQuery>,
) -> Result<Json<Vec<ExerciseLog>>, ApiError> {
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());
    Ok(Json(
        TrackingService::exercises_for_date(&state.tracking, &query.user_id, date).await,
    ))
}

/// DELETE /api/v1/logs/exercises/{id} - Delete an exercise entry
pub async fn delete_exercise(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<LogsQuery>,
) -> Result<StatusCode, ApiError> {
    TrackingService::delete_exercise(&state.tracking, &query.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/summary - Daily statistics
///
/// Totals per meal slot plus exercise; passing `tdee` adds the balance
/// and traffic light.
pub async fn daily_summary(
    State(state): State<AppState>,
    Query(query): Query<LogsQuery>,
) -> Result<Json<DailySummaryResponse>, ApiError> {
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());
    Ok(Json(
        TrackingService::daily_summary(&state.tracking, &query.user_id, date, query.tdee).await,
    ))
}
