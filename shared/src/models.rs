//! Data models for the Calorie Coach application

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Food group used by the diversity and variety heuristics
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    Staple,
    Protein,
    Vegetable,
    Fruit,
    Dairy,
    Nuts,
    Snack,
    Beverage,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 8] = [
        FoodCategory::Staple,
        FoodCategory::Protein,
        FoodCategory::Vegetable,
        FoodCategory::Fruit,
        FoodCategory::Dairy,
        FoodCategory::Nuts,
        FoodCategory::Snack,
        FoodCategory::Beverage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodCategory::Staple => "staple",
            FoodCategory::Protein => "protein",
            FoodCategory::Vegetable => "vegetable",
            FoodCategory::Fruit => "fruit",
            FoodCategory::Dairy => "dairy",
            FoodCategory::Nuts => "nuts",
            FoodCategory::Snack => "snack",
            FoodCategory::Beverage => "beverage",
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FoodCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "staple" => Ok(FoodCategory::Staple),
            "protein" => Ok(FoodCategory::Protein),
            "vegetable" => Ok(FoodCategory::Vegetable),
            "fruit" => Ok(FoodCategory::Fruit),
            "dairy" => Ok(FoodCategory::Dairy),
            "nuts" => Ok(FoodCategory::Nuts),
            "snack" => Ok(FoodCategory::Snack),
            "beverage" => Ok(FoodCategory::Beverage),
            other => Err(format!("Unknown food category: {other}")),
        }
    }
}

/// Meal slot for a food log entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// Share of the daily calorie budget conventionally given to this slot
    pub fn budget_share(&self) -> f64 {
        match self {
            MealType::Breakfast => 0.3,
            MealType::Lunch => 0.4,
            MealType::Dinner => 0.3,
            MealType::Snack => 0.1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            other => Err(format!("Unknown meal type: {other}")),
        }
    }
}

/// Catalog food item, nutrition per serving
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: u32,
    pub name: String,
    pub category: FoodCategory,
    /// Human-readable serving description, e.g. "1 bowl (200g)"
    pub serving: String,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// Catalog exercise item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseItem {
    pub id: u32,
    pub name: String,
    /// Free-form grouping, e.g. "cardio", "strength"
    pub category: String,
    /// Metabolic equivalent of task
    pub met: f64,
}

/// A logged meal entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealLog {
    pub id: Uuid,
    pub user_id: String,
    /// Catalog food this entry came from, if any
    pub food_id: Option<u32>,
    pub name: String,
    pub category: Option<FoodCategory>,
    pub meal_type: MealType,
    pub servings: f64,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub logged_at: DateTime<Utc>,
}

/// A logged exercise entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseLog {
    pub id: Uuid,
    pub user_id: String,
    /// Catalog exercise this entry came from, if any
    pub exercise_id: Option<u32>,
    pub name: String,
    pub duration_min: f64,
    pub calories: f64,
    pub logged_at: DateTime<Utc>,
}

/// One advice entry in the static knowledge base
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceEntry {
    pub id: u32,
    pub topic: String,
    pub tags: Vec<String>,
    /// Goals this entry applies to (empty = all)
    pub goals: Vec<crate::energy::Goal>,
    pub text: String,
}
