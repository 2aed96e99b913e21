//! Tracking service - meal/exercise logging and daily statistics

use crate::catalog::Catalog;
use crate::error::ApiError;
use crate::store::TrackingStore;
use calorie_coach_shared::energy::{daily_balance, exercise_calories, traffic_light};
use calorie_coach_shared::models::{ExerciseLog, MealLog, MealType};
use calorie_coach_shared::types::{
    DailySummaryResponse, LogExerciseRequest, LogMealRequest, MealSlotTotal,
};
use calorie_coach_shared::validation::{
    validate_calories, validate_duration_minutes, validate_servings,
};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;
use validator::Validate;

/// Body weight assumed for MET calculations when the client omits it
const DEFAULT_WEIGHT_KG: f64 = 70.0;

/// Tracking service
pub struct TrackingService;

impl TrackingService {
    /// Log a meal entry
    ///
    /// Catalog entries derive macros from the food item and servings;
    /// manual entries require a name and explicit calories.
    pub async fn log_meal(
        catalog: &Catalog,
        store: &TrackingStore,
        request: LogMealRequest,
    ) -> Result<MealLog, ApiError> {
        request
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        if request.user_id.trim().is_empty() {
            return Err(ApiError::Validation("user_id cannot be empty".to_string()));
        }
        validate_servings(request.servings).map_err(ApiError::Validation)?;

        let log = if let Some(food_id) = request.food_id {
            let item = catalog
                .food_by_id(food_id)
                .ok_or_else(|| ApiError::NotFound("Food item not found".to_string()))?;

            MealLog {
                id: Uuid::new_v4(),
                user_id: request.user_id,
                food_id: Some(food_id),
                name: item.name.clone(),
                category: Some(item.category),
                meal_type: request.meal_type,
                servings: request.servings,
                calories: item.calories * request.servings,
                protein_g: item.protein_g * request.servings,
                carbs_g: item.carbs_g * request.servings,
                fat_g: item.fat_g * request.servings,
                logged_at: request.logged_at.unwrap_or_else(Utc::now),
            }
        } else {
            let name = request
                .name
                .filter(|n| !n.trim().is_empty())
                .ok_or_else(|| {
                    ApiError::Validation(
                        "Either food_id or name is required".to_string(),
                    )
                })?;
            let calories = request.calories.ok_or_else(|| {
                ApiError::Validation("Manual entries require calories".to_string())
            })?;
            validate_calories(calories).map_err(ApiError::Validation)?;

            MealLog {
                id: Uuid::new_v4(),
                user_id: request.user_id,
                food_id: None,
                name,
                category: None,
                meal_type: request.meal_type,
                servings: request.servings,
                calories,
                protein_g: request.protein_g.unwrap_or(0.0).max(0.0),
                carbs_g: request.carbs_g.unwrap_or(0.0).max(0.0),
                fat_g: request.fat_g.unwrap_or(0.0).max(0.0),
                logged_at: request.logged_at.unwrap_or_else(Utc::now),
            }
        };

        store.add_meal(log.clone()).await;
        Ok(log)
    }

    /// Log an exercise entry
    ///
    /// Catalog entries derive calories from MET, duration, and body
    /// weight; manual entries require a name and explicit calories.
    pub async fn log_exercise(
        catalog: &Catalog,
        store: &TrackingStore,
        request: LogExerciseRequest,
    ) -> Result<ExerciseLog, ApiError> {
        request
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        if request.user_id.trim().is_empty() {
            return Err(ApiError::Validation("user_id cannot be empty".to_string()));
        }
        validate_duration_minutes(request.duration_min).map_err(ApiError::Validation)?;

        let log = if let Some(exercise_id) = request.exercise_id {
            let item = catalog
                .exercise_by_id(exercise_id)
                .ok_or_else(|| ApiError::NotFound("Exercise not found".to_string()))?;

            let weight_kg = request.weight_kg.unwrap_or(DEFAULT_WEIGHT_KG);
            if weight_kg <= 0.0 {
                return Err(ApiError::Validation("weight_kg must be positive".to_string()));
            }

            ExerciseLog {
                id: Uuid::new_v4(),
                user_id: request.user_id,
                exercise_id: Some(exercise_id),
                name: item.name.clone(),
                duration_min: request.duration_min,
                calories: exercise_calories(item.met, weight_kg, request.duration_min),
                logged_at: request.logged_at.unwrap_or_else(Utc::now),
            }
        } else {
            let name = request
                .name
                .filter(|n| !n.trim().is_empty())
                .ok_or_else(|| {
                    ApiError::Validation(
                        "Either exercise_id or name is required".to_string(),
                    )
                })?;
            let calories = request.calories.ok_or_else(|| {
                ApiError::Validation("Manual entries require calories".to_string())
            })?;
            validate_calories(calories).map_err(ApiError::Validation)?;

            ExerciseLog {
                id: Uuid::new_v4(),
                user_id: request.user_id,
                exercise_id: None,
                name,
                duration_min: request.duration_min,
                calories,
                logged_at: request.logged_at.unwrap_or_else(Utc::now),
            }
        };

        store.add_exercise(log.clone()).await;
        Ok(log)
    }

    /// Meals logged on a date
    pub async fn meals_for_date(
        store: &TrackingStore,
        user_id: &str,
        date: NaiveDate,
    ) -> Vec<MealLog> {
        store.meals_for_date(user_id, date).await
    }

    /// Exercises logged on a date
    pub async fn exercises_for_date(
        store: &TrackingStore,
        user_id: &str,
        date: NaiveDate,
    ) -> Vec<ExerciseLog> {
        store.exercises_for_date(user_id, date).await
    }

    /// Delete a meal log entry
    pub async fn delete_meal(
        store: &TrackingStore,
        user_id: &str,
        id: Uuid,
    ) -> Result<(), ApiError> {
        if store.delete_meal(user_id, id).await {
            Ok(())
        } else {
            Err(ApiError::NotFound("Meal log not found".to_string()))
        }
    }

    /// Delete an exercise log entry
    pub async fn delete_exercise(
        store: &TrackingStore,
        user_id: &str,
        id: Uuid,
    ) -> Result<(), ApiError> {
        if store.delete_exercise(user_id, id).await {
            Ok(())
        } else {
            Err(ApiError::NotFound("Exercise log not found".to_string()))
        }
    }

    /// Daily statistics: totals per meal slot, exercise total, and a
    /// balance/traffic-light enrichment when the caller supplies a TDEE
    pub async fn daily_summary(
        store: &TrackingStore,
        user_id: &str,
        date: NaiveDate,
        tdee: Option<f64>,
    ) -> DailySummaryResponse {
        let meals = store.meals_for_date(user_id, date).await;
        let exercises = store.exercises_for_date(user_id, date).await;

        let calories_in: f64 = meals.iter().map(|m| m.calories).sum();
        let protein_g: f64 = meals.iter().map(|m| m.protein_g).sum();
        let carbs_g: f64 = meals.iter().map(|m| m.carbs_g).sum();
        let fat_g: f64 = meals.iter().map(|m| m.fat_g).sum();
        let exercise_total: f64 = exercises.iter().map(|e| e.calories).sum();

        let slots = [
            MealType::Breakfast,
            MealType::Lunch,
            MealType::Dinner,
            MealType::Snack,
        ];
        let by_slot: Vec<MealSlotTotal> = slots
            .iter()
            .map(|slot| MealSlotTotal {
                meal_type: *slot,
                calories: meals
                    .iter()
                    .filter(|m| m.meal_type == *slot)
                    .map(|m| m.calories)
                    .sum(),
            })
            .collect();

        let balance = tdee
            .filter(|t| *t > 0.0)
            .map(|t| daily_balance(calories_in, t, exercise_total));

        DailySummaryResponse {
            date,
            calories_in,
            exercise_calories: exercise_total,
            protein_g,
            carbs_g,
            fat_g,
            meals: by_slot,
            meal_count: meals.len(),
            exercise_count: exercises.len(),
            balance,
            traffic_light: balance.map(traffic_light),
        }
    }
}
