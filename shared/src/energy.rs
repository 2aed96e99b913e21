//! Energy expenditure calculations
//!
//! Provides BMR/TDEE estimation, daily calorie balance, and the
//! traffic-light classification used across the tracker.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Evidence-Based**: BMR uses the Mifflin-St Jeor equation
//! 3. **Defensive on Garbage**: Invalid profile inputs yield 0, not NaN

use serde::{Deserialize, Serialize};

// ============================================================================
// Profile Types
// ============================================================================

/// Biological sex for energy calculations
/// Note: This is used for physiological calculations only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    #[default]
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise, physical job
    ExtraActive,
}

impl ActivityLevel {
    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::LightlyActive => "Light exercise 1-3 days/week",
            ActivityLevel::ModeratelyActive => "Moderate exercise 3-5 days/week",
            ActivityLevel::VeryActive => "Hard exercise 6-7 days/week",
            ActivityLevel::ExtraActive => "Very hard exercise or physical job",
        }
    }
}

/// Weight-change goal driving calorie targets and macro splits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    #[default]
    Maintain,
    Gain,
}

impl Goal {
    /// Target daily balance (intake minus expenditure) for this goal
    pub fn target_balance(&self) -> f64 {
        match self {
            Goal::Lose => -500.0,
            Goal::Maintain => 0.0,
            Goal::Gain => 300.0,
        }
    }

    /// Ideal macro energy split for this goal
    pub fn ideal_split(&self) -> MacroSplit {
        match self {
            Goal::Lose => MacroSplit {
                protein_pct: 30.0,
                carbs_pct: 45.0,
                fat_pct: 25.0,
            },
            Goal::Maintain => MacroSplit {
                protein_pct: 25.0,
                carbs_pct: 50.0,
                fat_pct: 25.0,
            },
            Goal::Gain => MacroSplit {
                protein_pct: 30.0,
                carbs_pct: 50.0,
                fat_pct: 20.0,
            },
        }
    }
}

/// Macro energy split as percentages of total calories
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein_pct: f64,
    pub carbs_pct: f64,
    pub fat_pct: f64,
}

/// User profile data needed for energy calculations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Current weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age_years: i32,
    /// Biological sex for physiological calculations
    pub sex: Sex,
    /// Activity level for TDEE
    #[serde(default)]
    pub activity_level: ActivityLevel,
    /// Weight-change goal
    #[serde(default)]
    pub goal: Goal,
}

// ============================================================================
// BMR and TDEE
// ============================================================================

/// Energy per gram of each macronutrient (kcal)
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Daily calorie floor for weight-loss targets
pub const MIN_DAILY_CALORIES: f64 = 1200.0;

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
///
/// Returns 0.0 for non-positive or non-finite weight, height, or age.
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: i32, sex: Sex) -> f64 {
    if weight_kg <= 0.0 || height_cm <= 0.0 || age_years <= 0 {
        return 0.0;
    }
    if !weight_kg.is_finite() || !height_cm.is_finite() {
        return 0.0;
    }

    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    let bmr = match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    };
    bmr.max(0.0)
}

/// Calculate Total Daily Energy Expenditure
///
/// TDEE = BMR × Activity Multiplier. A zero BMR propagates to zero TDEE.
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.multiplier()
}

/// Daily calorie target for a goal
///
/// Weight loss never targets below the daily calorie floor.
pub fn calorie_target(tdee: f64, goal: Goal) -> f64 {
    if tdee <= 0.0 {
        return 0.0;
    }
    match goal {
        Goal::Lose => (tdee - 500.0).max(MIN_DAILY_CALORIES),
        Goal::Maintain => tdee,
        Goal::Gain => tdee + 300.0,
    }
}

/// Signed daily calorie balance: intake minus total expenditure
///
/// Negative means a deficit.
pub fn daily_balance(intake_kcal: f64, tdee: f64, exercise_kcal: f64) -> f64 {
    intake_kcal - (tdee + exercise_kcal)
}

/// Calories burned by an exercise, from its MET value
///
/// kcal = MET × weight(kg) × hours
pub fn exercise_calories(met: f64, weight_kg: f64, duration_min: f64) -> f64 {
    if met <= 0.0 || weight_kg <= 0.0 || duration_min <= 0.0 {
        return 0.0;
    }
    met * weight_kg * (duration_min / 60.0)
}

/// Energy breakdown for a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyBreakdown {
    /// Basal Metabolic Rate
    pub bmr: f64,
    /// Total Daily Energy Expenditure
    pub tdee: f64,
    /// Activity multiplier used
    pub activity_multiplier: f64,
    /// Daily calorie target for the profile's goal
    pub daily_target: f64,
}

/// Calculate the complete energy breakdown for a profile
pub fn energy_breakdown(profile: &UserProfile) -> EnergyBreakdown {
    let bmr = calculate_bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.sex,
    );
    let tdee = calculate_tdee(bmr, profile.activity_level);

    EnergyBreakdown {
        bmr,
        tdee,
        activity_multiplier: profile.activity_level.multiplier(),
        daily_target: calorie_target(tdee, profile.goal),
    }
}

// ============================================================================
// Traffic Light
// ============================================================================

/// Traffic-light classification of a daily calorie balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficLight {
    Green,
    Yellow,
    Red,
}

impl TrafficLight {
    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            TrafficLight::Green => "On track",
            TrafficLight::Yellow => "Slightly off target",
            TrafficLight::Red => "Well over budget",
        }
    }
}

/// Balance below this is flagged as excessive restriction
pub const EXCESSIVE_DEFICIT: f64 = -1200.0;
/// Balance above this is a red surplus
pub const RED_SURPLUS: f64 = 300.0;

/// Classify a signed daily balance
///
/// Green: at or healthily under budget. Yellow: slightly over, or an
/// excessive deficit. Red: well over budget.
pub fn traffic_light(balance: f64) -> TrafficLight {
    if balance > RED_SURPLUS {
        TrafficLight::Red
    } else if balance > 0.0 || balance < EXCESSIVE_DEFICIT {
        TrafficLight::Yellow
    } else {
        TrafficLight::Green
    }
}
