//! API request and response types

use crate::energy::{TrafficLight, UserProfile};
use crate::models::{FoodCategory, FoodItem, MealType};
use crate::scoring::SelectedFood;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

// ============================================================================
// Scoring
// ============================================================================

/// Body of `POST /api/score`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreRequest {
    pub profile: UserProfile,
    /// Calories burned through exercise today
    #[validate(range(min = 0.0, max = 20000.0))]
    pub exercise_calories: f64,
    /// Calories consumed today
    #[validate(range(min = 0.0, max = 50000.0))]
    pub diet_calories: f64,
    /// Grams of protein consumed today
    #[validate(range(min = 0.0, max = 2000.0))]
    pub protein: f64,
    /// Grams of carbohydrates consumed today
    #[validate(range(min = 0.0, max = 2000.0))]
    pub carbs: f64,
    /// Grams of fat consumed today
    #[validate(range(min = 0.0, max = 2000.0))]
    pub fat: f64,
    #[serde(default)]
    pub selected_foods: Vec<SelectedFood>,
    /// Signed daily balances for recent days (negative = deficit)
    #[serde(default)]
    pub weekly_deficits: Vec<f64>,
}

/// Response of `POST /api/score`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub calorie_score: f64,
    pub nutrition_score: f64,
    pub diversity_score: f64,
    pub consistency_score: f64,
    pub final_score: f64,
    pub balance: f64,
    pub traffic_light: TrafficLight,
    pub suggestions: Vec<String>,
    pub bmr: f64,
    pub tdee: f64,
    pub daily_target: f64,
}

// ============================================================================
// Energy
// ============================================================================

/// Body of `POST /api/v1/energy`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyRequest {
    pub profile: UserProfile,
}

/// BMR/TDEE breakdown response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyResponse {
    pub bmr: f64,
    pub tdee: f64,
    pub activity_multiplier: f64,
    pub daily_target: f64,
    pub unit: String,
}

// ============================================================================
// Catalog
// ============================================================================

/// Query parameters for food search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodSearchQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Query parameters for exercise search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseSearchQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

// ============================================================================
// Tracking
// ============================================================================

/// Body of `POST /api/v1/logs/meals`
///
/// Either `food_id` (catalog lookup, macros derived from servings) or
/// `name` plus explicit macros (manual entry).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LogMealRequest {
    pub user_id: String,
    #[serde(default)]
    pub food_id: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    pub meal_type: MealType,
    #[serde(default = "default_servings")]
    #[validate(range(min = 0.1, max = 50.0))]
    pub servings: f64,
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub protein_g: Option<f64>,
    #[serde(default)]
    pub carbs_g: Option<f64>,
    #[serde(default)]
    pub fat_g: Option<f64>,
    #[serde(default)]
    pub logged_at: Option<DateTime<Utc>>,
}

fn default_servings() -> f64 {
    1.0
}

/// Body of `POST /api/v1/logs/exercises`
///
/// Either `exercise_id` (calories derived from MET and body weight) or
/// `name` plus explicit `calories` (manual entry).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LogExerciseRequest {
    pub user_id: String,
    #[serde(default)]
    pub exercise_id: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    #[validate(range(min = 1.0, max = 1440.0))]
    pub duration_min: f64,
    #[serde(default)]
    pub calories: Option<f64>,
    /// Body weight for the MET formula; defaults to 70 kg when omitted
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub logged_at: Option<DateTime<Utc>>,
}

/// Query parameters for listing logs and daily summaries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsQuery {
    pub user_id: String,
    /// Date to filter by; defaults to today (UTC)
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// TDEE for balance/traffic-light enrichment of summaries
    #[serde(default)]
    pub tdee: Option<f64>,
}

/// Per-meal-slot calorie totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSlotTotal {
    pub meal_type: MealType,
    pub calories: f64,
}

/// Daily statistics response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummaryResponse {
    pub date: NaiveDate,
    pub calories_in: f64,
    pub exercise_calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub meals: Vec<MealSlotTotal>,
    pub meal_count: usize,
    pub exercise_count: usize,
    /// Present only when the query supplied a TDEE
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traffic_light: Option<TrafficLight>,
}

// ============================================================================
// Recommendations
// ============================================================================

/// Body of `POST /api/v1/recommendations`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    pub profile: UserProfile,
    /// Calories already consumed today
    #[validate(range(min = 0.0, max = 50000.0))]
    #[serde(default)]
    pub consumed_calories: f64,
    /// Calories burned through exercise today
    #[validate(range(min = 0.0, max = 20000.0))]
    #[serde(default)]
    pub exercise_calories: f64,
    /// Food categories eaten recently, for the variety component
    #[serde(default)]
    pub recent_categories: Vec<FoodCategory>,
    pub meal_type: MealType,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// One ranked candidate with its component breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationItem {
    pub food: FoodItem,
    pub score: f64,
    pub calorie_fit: f64,
    pub macro_fit: f64,
    pub variety: f64,
}

/// Response of `POST /api/v1/recommendations`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    /// Calorie budget for the requested meal slot
    pub slot_kcal: f64,
    pub items: Vec<RecommendationItem>,
}

// ============================================================================
// Advice
// ============================================================================

/// Body of `POST /api/v1/advice`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AdviceRequest {
    pub user_id: String,
    #[validate(length(min = 1, max = 2000))]
    pub question: String,
    #[serde(default)]
    pub profile: Option<UserProfile>,
}

/// Where an advice answer came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceSource {
    Llm,
    KnowledgeBase,
}

/// Response of `POST /api/v1/advice`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceResponse {
    pub answer: String,
    pub source: AdviceSource,
    /// Topics of the knowledge-base entries that informed the answer
    pub references: Vec<String>,
}
