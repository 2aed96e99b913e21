//! In-memory food and exercise catalogs
//!
//! The datasets ship inside the binary as CSV and are parsed once at
//! startup. Search is a case-insensitive substring scan; the catalogs are
//! small enough (a few hundred records) that nothing fancier is needed.

use calorie_coach_shared::models::{ExerciseItem, FoodCategory, FoodItem};
use serde::Deserialize;
use thiserror::Error;

const FOODS_CSV: &str = include_str!("data/foods.csv");
const EXERCISES_CSV: &str = include_str!("data/exercises.csv");

/// Default and maximum search result sizes
pub const DEFAULT_SEARCH_LIMIT: usize = 20;
pub const MAX_SEARCH_LIMIT: usize = 100;

/// Errors raised while loading the embedded datasets
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid record {line}: {message}")]
    InvalidRecord { line: usize, message: String },
}

#[derive(Debug, Deserialize)]
struct FoodRow {
    id: u32,
    name: String,
    category: String,
    serving: String,
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
}

#[derive(Debug, Deserialize)]
struct ExerciseRow {
    id: u32,
    name: String,
    category: String,
    met: f64,
}

/// The loaded catalogs
#[derive(Debug, Clone)]
pub struct Catalog {
    foods: Vec<FoodItem>,
    exercises: Vec<ExerciseItem>,
}

impl Catalog {
    /// Parse the embedded datasets
    pub fn load() -> Result<Self, CatalogError> {
        Ok(Self {
            foods: parse_foods(FOODS_CSV)?,
            exercises: parse_exercises(EXERCISES_CSV)?,
        })
    }

    pub fn food_count(&self) -> usize {
        self.foods.len()
    }

    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }

    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    pub fn food_by_id(&self, id: u32) -> Option<&FoodItem> {
        self.foods.iter().find(|f| f.id == id)
    }

    pub fn exercise_by_id(&self, id: u32) -> Option<&ExerciseItem> {
        self.exercises.iter().find(|e| e.id == id)
    }

    /// Case-insensitive substring search over food names, with an
    /// optional category filter
    pub fn search_foods(
        &self,
        query: Option<&str>,
        category: Option<FoodCategory>,
        limit: Option<usize>,
    ) -> Vec<FoodItem> {
        let limit = limit.unwrap_or(DEFAULT_SEARCH_LIMIT).min(MAX_SEARCH_LIMIT);
        let needle = query.map(|q| q.trim().to_lowercase()).unwrap_or_default();

        self.foods
            .iter()
            .filter(|f| needle.is_empty() || f.name.to_lowercase().contains(&needle))
            .filter(|f| category.map(|c| f.category == c).unwrap_or(true))
            .take(limit)
            .cloned()
            .collect()
    }

    /// Case-insensitive substring search over exercise names
    pub fn search_exercises(&self, query: Option<&str>, limit: Option<usize>) -> Vec<ExerciseItem> {
        let limit = limit.unwrap_or(DEFAULT_SEARCH_LIMIT).min(MAX_SEARCH_LIMIT);
        let needle = query.map(|q| q.trim().to_lowercase()).unwrap_or_default();

        self.exercises
            .iter()
            .filter(|e| needle.is_empty() || e.name.to_lowercase().contains(&needle))
            .take(limit)
            .cloned()
            .collect()
    }
}

fn parse_foods(data: &str) -> Result<Vec<FoodItem>, CatalogError> {
    let mut reader = csv::Reader::from_reader(data.as_bytes());
    let mut foods = Vec::new();

    for (idx, record) in reader.deserialize::<FoodRow>().enumerate() {
        let row = record?;
        let category: FoodCategory =
            row.category
                .parse()
                .map_err(|message| CatalogError::InvalidRecord {
                    line: idx + 2,
                    message,
                })?;

        if row.calories < 0.0 || row.protein_g < 0.0 || row.carbs_g < 0.0 || row.fat_g < 0.0 {
            return Err(CatalogError::InvalidRecord {
                line: idx + 2,
                message: format!("negative nutrition values for '{}'", row.name),
            });
        }

        foods.push(FoodItem {
            id: row.id,
            name: row.name,
            category,
            serving: row.serving,
            calories: row.calories,
            protein_g: row.protein_g,
            carbs_g: row.carbs_g,
            fat_g: row.fat_g,
        });
    }

    Ok(foods)
}

fn parse_exercises(data: &str) -> Result<Vec<ExerciseItem>, CatalogError> {
    let mut reader = csv::Reader::from_reader(data.as_bytes());
    let mut exercises = Vec::new();

    for (idx, record) in reader.deserialize::<ExerciseRow>().enumerate() {
        let row = record?;

        if row.met <= 0.0 {
            return Err(CatalogError::InvalidRecord {
                line: idx + 2,
                message: format!("non-positive MET for '{}'", row.name),
            });
        }

        exercises.push(ExerciseItem {
            id: row.id,
            name: row.name,
            category: row.category,
            met: row.met,
        });
    }

    Ok(exercises)
}
