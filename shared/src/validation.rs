//! Input validation functions
//!
//! Range checks for the calculator and routine forms. Each validator returns
//! a plain message; callers attach the field through [`ValidationError`].

use std::fmt;

/// Heaviest weight the calculator accepts
pub const MAX_WEIGHT_KG: f64 = 500.0;

/// Tallest height the calculator accepts
pub const MAX_HEIGHT_CM: f64 = 300.0;

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg <= 0.0 {
        return Err("Weight must be greater than 0 kg".to_string());
    }
    if weight_kg > MAX_WEIGHT_KG {
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
    if height_cm > MAX_HEIGHT_CM {
        return Err("Height must be at most 300 cm".to_string());
    }
    Ok(())
}

/// Validate age in years: a whole number, at least 1
pub fn validate_age_years(age_years: f64) -> Result<(), String> {
    if age_years.is_nan() || age_years.is_infinite() {
        return Err("Age must be a valid number".to_string());
    }
    if age_years < 1.0 {
        return Err("Age must be at least 1 year".to_string());
    }
    if age_years.fract() != 0.0 {
        return Err("Age must be a whole number of years".to_string());
    }
    if age_years > u32::MAX as f64 {
        return Err("Age is too large".to_string());
    }
    Ok(())
}

/// Validate an hours-per-day value (0-24)
pub fn validate_hours(hours: f64) -> Result<(), String> {
    if hours.is_nan() || hours.is_infinite() {
        return Err("Hours must be a valid number".to_string());
    }
    if !(0.0..=24.0).contains(&hours) {
        return Err("Hours must be between 0 and 24".to_string());
    }
    Ok(())
}

/// Validate that sleep and activity fit in one day
pub fn validate_daily_hours(sleep_hours: f64, active_hours: f64) -> Result<(), String> {
    if sleep_hours + active_hours > 24.0 {
        return Err("Sleep and active hours cannot add up to more than 24".to_string());
    }
    Ok(())
}

/// Valid biological sex values
pub const VALID_BIOLOGICAL_SEX: &[&str] = &["male", "female"];

/// Valid nutrition goals
pub const VALID_GOALS: &[&str] = &["healthy", "train"];

/// Valid routine categories
pub const VALID_ROUTINE_CATEGORIES: &[&str] = &["hypertrophy", "strength", "fitness", "weight_loss"];

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "weight_kg" => "Weight",
        "height_cm" => "Height",
        "age_years" => "Age",
        "sex" => "Sex",
        "goal" => "Goal",
        "sleep_hours" => "Hours of Sleep",
        "active_hours" => "Active Hours",
        "category" => "Routine Type",
        "days" => "Training Days",
        _ => field_name,
    }
}

/// Convert a list of technical field names to user-friendly labels
pub fn get_missing_fields_labels(fields: &[String]) -> Vec<String> {
    fields
        .iter()
        .map(|f| get_field_display_label(f).to_string())
        .collect()
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.user_message())
    }
}
