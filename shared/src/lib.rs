//! Calorie Coach Shared Library
//!
//! This crate contains the pure domain core shared by the backend:
//! energy formulas, the scoring engine, models, API types, and input
//! validation. No I/O lives here.

pub mod energy;
pub mod models;
pub mod scoring;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use energy::*;
pub use models::{
    AdviceEntry, ExerciseItem, ExerciseLog, FoodCategory, FoodItem, MealLog, MealType,
};
pub use scoring::{compute_score, ScoreInput, ScoreReport, SelectedFood};
pub use types::*;
