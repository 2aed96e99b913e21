//! Input validation functions
//!
//! Range checks for user-supplied values, used by the backend services
//! alongside the `validator` derives on request types.

use crate::energy::UserProfile;

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < 20.0 {
        return Err("Weight must be at least 20 kg".to_string());
    }
    if weight_kg > 500.0 {
        return Err("Weight must be at most 500 kg".to_string());
    }
    Ok(())
}

/// Validate height value (in cm)
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm < 50.0 {
        return Err("Height must be at least 50 cm".to_string());
    }
    if height_cm > 300.0 {
        return Err("Height must be at most 300 cm".to_string());
    }
    Ok(())
}

/// Validate age in years
pub fn validate_age_years(age_years: i32) -> Result<(), String> {
    if age_years < 1 {
        return Err("Age must be at least 1".to_string());
    }
    if age_years > 150 {
        return Err("Age must be at most 150".to_string());
    }
    Ok(())
}

/// Validate calorie value
pub fn validate_calories(calories: f64) -> Result<(), String> {
    if calories.is_nan() || calories.is_infinite() {
        return Err("Calories must be a valid number".to_string());
    }
    if calories < 0.0 {
        return Err("Calories cannot be negative".to_string());
    }
    if calories > 50000.0 {
        return Err("Calorie value unreasonably high".to_string());
    }
    Ok(())
}

/// Validate macro grams
pub fn validate_grams(grams: f64) -> Result<(), String> {
    if grams.is_nan() || grams.is_infinite() {
        return Err("Grams must be a valid number".to_string());
    }
    if grams < 0.0 {
        return Err("Grams cannot be negative".to_string());
    }
    if grams > 5000.0 {
        return Err("Gram value unreasonably high".to_string());
    }
    Ok(())
}

/// Validate duration in minutes
pub fn validate_duration_minutes(minutes: f64) -> Result<(), String> {
    if minutes.is_nan() || minutes.is_infinite() {
        return Err("Duration must be a valid number".to_string());
    }
    if minutes <= 0.0 {
        return Err("Duration must be positive".to_string());
    }
    if minutes > 1440.0 {
        // 24 hours
        return Err("Duration cannot exceed 24 hours".to_string());
    }
    Ok(())
}

/// Validate servings multiplier
pub fn validate_servings(servings: f64) -> Result<(), String> {
    if servings.is_nan() || servings.is_infinite() {
        return Err("Servings must be a valid number".to_string());
    }
    if servings < 0.1 {
        return Err("Servings must be at least 0.1".to_string());
    }
    if servings > 50.0 {
        return Err("Servings must be at most 50".to_string());
    }
    Ok(())
}

/// Validate a complete user profile
pub fn validate_profile(profile: &UserProfile) -> Result<(), String> {
    validate_weight_kg(profile.weight_kg)?;
    validate_height_cm(profile.height_cm)?;
    validate_age_years(profile.age_years)?;
    Ok(())
}
