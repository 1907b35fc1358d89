//! Body metrics calculations module
//!
//! Provides the calculator behind the metrics screen: BMI and its WHO band,
//! basal metabolic rate, activity-adjusted daily energy, a body composition
//! estimate and the macronutrient split for the selected goal.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: every calculation is a function of its arguments only
//! 2. **Explicit Results**: each call returns a fresh [`MetricsResult`]
//! 3. **Two-decimal Outputs**: every reported figure is rounded to hundredths,
//!    and rounded intermediates feed the next step (BMI into body fat, BMR
//!    into daily energy, daily energy into macros)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationGap;
use crate::validation::{
    validate_age_years, validate_daily_hours, validate_height_cm, validate_hours,
    validate_weight_kg, VALID_BIOLOGICAL_SEX, VALID_GOALS,
};

/// Informational note shown next to the two energy figures.
pub const ENERGY_EXPLAINER: &str = "Daily kcal at rest are the calories your body needs to \
keep its basic functions running while completely at rest, whereas daily kcal with activity \
are the calories you need according to your level of daily activity.";

// ============================================================================
// Input Types
// ============================================================================

/// Biological sex for health calculations
/// Note: This is used for physiological calculations only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    Male,
    Female,
}

impl FromStr for BiologicalSex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(BiologicalSex::Male),
            "female" => Ok(BiologicalSex::Female),
            _ => Err(format!(
                "Invalid biological sex. Must be one of: {}",
                VALID_BIOLOGICAL_SEX.join(", ")
            )),
        }
    }
}

/// Nutrition goal selected on the calculator form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Eat for general health
    Healthy,
    /// Eat to support training
    Train,
}

impl Goal {
    /// Lowercase name, as sent by the form
    pub fn key(&self) -> &'static str {
        match self {
            Goal::Healthy => "healthy",
            Goal::Train => "train",
        }
    }
}

impl FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "healthy" => Ok(Goal::Healthy),
            "train" => Ok(Goal::Train),
            _ => Err(format!(
                "Invalid goal. Must be one of: {}",
                VALID_GOALS.join(", ")
            )),
        }
    }
}

/// Everything the calculator needs, already parsed into SI units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnthropometricInput {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in whole years
    pub age_years: u32,
    /// Biological sex for physiological calculations
    pub sex: BiologicalSex,
    /// Nutrition goal driving the macro split
    pub goal: Goal,
    /// Hours slept per day
    pub sleep_hours: f64,
    /// Hours of physical activity per day
    pub active_hours: f64,
}

impl AnthropometricInput {
    /// Check the input invariants before handing the input to [`compute_all`].
    ///
    /// `compute_all` itself never fails; callers that build the input by hand
    /// use this to get the same guarantees the form validation gives.
    pub fn validate(&self) -> Result<(), ValidationGap> {
        validate_weight_kg(self.weight_kg)
            .map_err(|msg| ValidationGap::invalid("weight_kg", &msg))?;
        validate_height_cm(self.height_cm)
            .map_err(|msg| ValidationGap::invalid("height_cm", &msg))?;
        validate_age_years(self.age_years as f64)
            .map_err(|msg| ValidationGap::invalid("age_years", &msg))?;
        validate_hours(self.sleep_hours)
            .map_err(|msg| ValidationGap::invalid("sleep_hours", &msg))?;
        validate_hours(self.active_hours)
            .map_err(|msg| ValidationGap::invalid("active_hours", &msg))?;
        validate_daily_hours(self.sleep_hours, self.active_hours)
            .map_err(|msg| ValidationGap::invalid("active_hours", &msg))?;
        Ok(())
    }
}

/// Round to two decimal places, the precision every reported figure uses
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// BMI Calculations
// ============================================================================

/// WHO BMI classification band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    #[serde(rename = "underweight")]
    Underweight,
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "overweight")]
    Overweight,
    #[serde(rename = "obese_1")]
    ObeseClass1,
    #[serde(rename = "obese_2")]
    ObeseClass2,
    #[serde(rename = "obese_3")]
    ObeseClass3,
}

impl BmiCategory {
    /// Get the BMI range for this category, lower bound inclusive
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (0.0, 18.5),
            BmiCategory::Normal => (18.5, 25.0),
            BmiCategory::Overweight => (25.0, 30.0),
            BmiCategory::ObeseClass1 => (30.0, 35.0),
            BmiCategory::ObeseClass2 => (35.0, 40.0),
            BmiCategory::ObeseClass3 => (40.0, f64::INFINITY),
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObeseClass1 => "Obesity (Class I)",
            BmiCategory::ObeseClass2 => "Obesity (Class II)",
            BmiCategory::ObeseClass3 => "Obesity (Class III, morbid obesity)",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)², rounded to two decimals
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round_to_hundredths(weight_kg / (height_m * height_m))
}

/// Classify BMI into its WHO band
///
/// The published bands are 18.5-24.9, 25-29.9, 30-34.9 and 35-39.9, so the
/// upper figure of each band belongs to it. Values between two published
/// bands (24.95 for instance) stay in the lower one.
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else if bmi < 35.0 {
        BmiCategory::ObeseClass1
    } else if bmi < 40.0 {
        BmiCategory::ObeseClass2
    } else {
        BmiCategory::ObeseClass3
    }
}

// ============================================================================
// BMR and Daily Energy
// ============================================================================

/// Calculate Basal Metabolic Rate
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: u32, sex: BiologicalSex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    let bmr = match sex {
        BiologicalSex::Male => base + 5.0,
        BiologicalSex::Female => base - 161.0,
    };
    round_to_hundredths(bmr)
}

/// Resting kcal burned per hour
pub fn hourly_energy(bmr: f64) -> f64 {
    bmr / 24.0
}

/// Weight applied to hours spent neither asleep nor training
const EXTRA_HOURS_FACTOR: f64 = 1.5;
/// Weight applied to sleeping hours
const SLEEP_HOURS_FACTOR: f64 = 1.0;
/// Weight applied to training hours
const ACTIVE_HOURS_FACTOR: f64 = 2.5;

/// Calculate daily energy expenditure weighted by how the day is spent
///
/// Each hour costs `bmr / 24`, scaled by 1.0 asleep, 2.5 active and 1.5 for
/// the remaining `24 - active - sleep` hours. Returns 0 while no BMR is
/// available. The remaining-hours term is not clamped.
pub fn calculate_active_daily_energy(bmr: Option<f64>, sleep_hours: f64, active_hours: f64) -> f64 {
    let Some(bmr) = bmr.filter(|bmr| *bmr != 0.0) else {
        return 0.0;
    };
    let per_hour = hourly_energy(bmr);

    let extra = (24.0 - active_hours - sleep_hours) * EXTRA_HOURS_FACTOR * per_hour;
    let asleep = sleep_hours * SLEEP_HOURS_FACTOR * per_hour;
    let active = active_hours * ACTIVE_HOURS_FACTOR * per_hour;

    round_to_hundredths(extra + asleep + active)
}

// ============================================================================
// Body Composition Estimation
// ============================================================================

/// Body fat and muscle mass estimate, in percent of body weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyComposition {
    pub body_fat_percent: f64,
    pub muscle_mass_percent: f64,
}

/// Estimate body composition from BMI (rough estimate)
///
/// BF% = 1.20 × BMI + 0.23 × Age - 10.8 × sex - 5.4, where sex = 1 for male.
/// Muscle mass is taken as half of the lean (non-fat) mass.
pub fn estimate_body_composition(
    bmi: f64,
    age_years: u32,
    sex: BiologicalSex,
    weight_kg: f64,
) -> BodyComposition {
    let sex_offset = match sex {
        BiologicalSex::Male => 10.8,
        BiologicalSex::Female => 0.0,
    };
    let body_fat_percent =
        round_to_hundredths(1.2 * bmi + 0.23 * age_years as f64 - sex_offset - 5.4);

    let fat_mass_kg = weight_kg * body_fat_percent / 100.0;
    let muscle_mass_kg = (weight_kg - fat_mass_kg) * 0.5;
    let muscle_mass_percent = round_to_hundredths(muscle_mass_kg / weight_kg * 100.0);

    BodyComposition {
        body_fat_percent,
        muscle_mass_percent,
    }
}

// ============================================================================
// Macronutrients
// ============================================================================

const KCAL_PER_GRAM_FAT: f64 = 9.0;
const KCAL_PER_GRAM_CARBS: f64 = 4.0;
const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

/// Share of daily energy assigned to each macronutrient (fractions of 1)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub fat: f64,
    pub carbs: f64,
    pub protein: f64,
}

/// Pick the energy split for a goal
///
/// | goal    | sex    | fat | carbs | protein |
/// |---------|--------|-----|-------|---------|
/// | healthy | any    | 20% | 60%   | 20%     |
/// | train   | male   | 20% | 50%   | 30%     |
/// | train   | female | 25% | 50%   | 25%     |
pub fn macro_split(goal: Goal, sex: BiologicalSex) -> MacroSplit {
    match (goal, sex) {
        (Goal::Healthy, _) => MacroSplit {
            fat: 0.20,
            carbs: 0.60,
            protein: 0.20,
        },
        (Goal::Train, BiologicalSex::Male) => MacroSplit {
            fat: 0.20,
            carbs: 0.50,
            protein: 0.30,
        },
        (Goal::Train, BiologicalSex::Female) => MacroSplit {
            fat: 0.25,
            carbs: 0.50,
            protein: 0.25,
        },
    }
}

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroBreakdown {
    pub fat_g: f64,
    pub carbs_g: f64,
    pub protein_g: f64,
}

/// Convert daily energy into gram targets for the goal's split
pub fn calculate_macros(goal: Goal, sex: BiologicalSex, active_daily_energy: f64) -> MacroBreakdown {
    let split = macro_split(goal, sex);
    MacroBreakdown {
        fat_g: round_to_hundredths(active_daily_energy * split.fat / KCAL_PER_GRAM_FAT),
        carbs_g: round_to_hundredths(active_daily_energy * split.carbs / KCAL_PER_GRAM_CARBS),
        protein_g: round_to_hundredths(active_daily_energy * split.protein / KCAL_PER_GRAM_PROTEIN),
    }
}

// ============================================================================
// Full Calculation
// ============================================================================

/// Every figure shown on the results screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsResult {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    /// Resting daily energy (kcal)
    pub bmr: f64,
    /// Resting energy per hour (kcal), unrounded
    pub hourly_energy: f64,
    /// Daily energy with activity (kcal)
    pub active_daily_energy: f64,
    pub body_fat_percent: f64,
    pub muscle_mass_percent: f64,
    pub macros: MacroBreakdown,
}

/// Run the whole calculator for one input
///
/// Assumes `input` satisfies [`AnthropometricInput::validate`].
pub fn compute_all(input: &AnthropometricInput) -> MetricsResult {
    let bmi = calculate_bmi(input.weight_kg, input.height_cm);
    let bmr = calculate_bmr(input.weight_kg, input.height_cm, input.age_years, input.sex);
    let active_daily_energy =
        calculate_active_daily_energy(Some(bmr), input.sleep_hours, input.active_hours);
    let composition = estimate_body_composition(bmi, input.age_years, input.sex, input.weight_kg);

    MetricsResult {
        bmi,
        bmi_category: classify_bmi(bmi),
        bmr,
        hourly_energy: hourly_energy(bmr),
        active_daily_energy,
        body_fat_percent: composition.body_fat_percent,
        muscle_mass_percent: composition.muscle_mass_percent,
        macros: calculate_macros(input.goal, input.sex, active_daily_energy),
    }
}
