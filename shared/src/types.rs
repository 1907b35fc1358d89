//! API request and response types
//!
//! Requests mirror the forms: every field is optional so that an empty form
//! can be told apart from a filled-in form with a bad value.

use serde::{Deserialize, Serialize};

use crate::body_metrics::{AnthropometricInput, BiologicalSex, Goal, MetricsResult};
use crate::errors::ValidationGap;
use crate::routines::{
    CategoryDescription, RoutineCategory, RoutineLookup, RoutinePlan, TrainingDays,
};
use crate::validation::{
    validate_age_years, validate_daily_hours, validate_height_cm, validate_hours,
    validate_weight_kg,
};

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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

// ============================================================================
// Landing
// ============================================================================

/// Entry point listing the available tools
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandingResponse {
    pub name: String,
    pub version: String,
    pub tools: Vec<ToolLink>,
}

/// One tool reachable from the landing page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolLink {
    pub name: String,
    pub path: String,
    pub description: String,
}

/// Informational text attached to a screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainerResponse {
    pub title: String,
    pub text: String,
}

// ============================================================================
// Calculator
// ============================================================================

/// Calculator form submission
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorRequest {
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub age_years: Option<f64>,
    pub sex: Option<String>,
    pub goal: Option<String>,
    pub sleep_hours: Option<f64>,
    pub active_hours: Option<f64>,
}

impl CalculatorRequest {
    /// Turn the form into calculator input
    ///
    /// Missing or blank fields are all reported together as
    /// [`ValidationGap::Incomplete`]; once the form is complete, the first
    /// out-of-range field is reported as [`ValidationGap::Invalid`].
    pub fn to_input(&self) -> Result<AnthropometricInput, ValidationGap> {
        let (
            Some(weight_kg),
            Some(height_cm),
            Some(age_years),
            Some(sex),
            Some(goal),
            Some(sleep_hours),
            Some(active_hours),
        ) = (
            self.weight_kg,
            self.height_cm,
            self.age_years,
            non_blank(&self.sex),
            non_blank(&self.goal),
            self.sleep_hours,
            self.active_hours,
        )
        else {
            return Err(ValidationGap::Incomplete(self.missing_fields()));
        };

        check("weight_kg", validate_weight_kg(weight_kg))?;
        check("height_cm", validate_height_cm(height_cm))?;
        check("age_years", validate_age_years(age_years))?;
        let sex: BiologicalSex = sex
            .parse()
            .map_err(|msg: String| ValidationGap::invalid("sex", &msg))?;
        let goal: Goal = goal
            .parse()
            .map_err(|msg: String| ValidationGap::invalid("goal", &msg))?;
        check("sleep_hours", validate_hours(sleep_hours))?;
        check("active_hours", validate_hours(active_hours))?;
        check("active_hours", validate_daily_hours(sleep_hours, active_hours))?;

        Ok(AnthropometricInput {
            weight_kg,
            height_cm,
            age_years: age_years as u32,
            sex,
            goal,
            sleep_hours,
            active_hours,
        })
    }

    /// Technical names of every field left empty
    pub fn missing_fields(&self) -> Vec<String> {
        let present = [
            ("weight_kg", self.weight_kg.is_some()),
            ("height_cm", self.height_cm.is_some()),
            ("age_years", self.age_years.is_some()),
            ("sex", non_blank(&self.sex).is_some()),
            ("goal", non_blank(&self.goal).is_some()),
            ("sleep_hours", self.sleep_hours.is_some()),
            ("active_hours", self.active_hours.is_some()),
        ];
        present
            .iter()
            .filter(|(_, is_present)| !is_present)
            .map(|(field, _)| field.to_string())
            .collect()
    }
}

/// Calculator results screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorResponse {
    pub input: AnthropometricInput,
    pub results: MetricsResult,
    /// Readable name of the BMI band
    pub bmi_label: String,
}

impl CalculatorResponse {
    pub fn new(input: AnthropometricInput, results: MetricsResult) -> Self {
        Self {
            input,
            bmi_label: results.bmi_category.description().to_string(),
            results,
        }
    }
}

// ============================================================================
// Routines
// ============================================================================

/// Routine form submission
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutineQuery {
    pub category: Option<String>,
    pub days: Option<String>,
}

impl RoutineQuery {
    /// Check the form is complete and the day count is an integer
    ///
    /// The category name is passed through as typed; an unknown name is a
    /// lookup miss, not a validation problem. The same goes for any integer
    /// day count, however large or negative.
    pub fn to_parts(&self) -> Result<(&str, i64), ValidationGap> {
        let (Some(category), Some(days)) = (non_blank(&self.category), non_blank(&self.days)) else {
            let mut missing = Vec::new();
            if non_blank(&self.category).is_none() {
                missing.push("category".to_string());
            }
            if non_blank(&self.days).is_none() {
                missing.push("days".to_string());
            }
            return Err(ValidationGap::Incomplete(missing));
        };

        let days = parse_day_count(days)
            .ok_or_else(|| ValidationGap::invalid("days", "Training days must be a whole number"))?;

        Ok((category, days))
    }
}

/// Parse an integer day count, saturating values beyond the `i64` range
fn parse_day_count(days: &str) -> Option<i64> {
    if let Ok(days) = days.parse::<i64>() {
        return Some(days);
    }
    let (negative, digits) = match days.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, days.strip_prefix('+').unwrap_or(days)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(if negative { i64::MIN } else { i64::MAX })
}

/// Routine results screen
#[derive(Debug, Clone, Serialize)]
pub struct RoutineResponse {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<RoutineCategory>,
    pub days: i64,
    pub plan: Option<RoutinePlan>,
    pub description: Option<CategoryDescription>,
}

impl RoutineResponse {
    pub fn new(category: &str, days: i64, lookup: RoutineLookup) -> Self {
        Self {
            found: lookup.is_found(),
            category: category.parse().ok(),
            days,
            plan: lookup.plan,
            description: lookup.description,
        }
    }
}

/// Choices offered on the routine form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineOptions {
    pub categories: Vec<CategoryOption>,
    pub days: Vec<u32>,
}

/// One routine type choice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryOption {
    pub key: String,
    pub label: String,
}

impl RoutineOptions {
    pub fn from_catalog() -> Self {
        Self {
            categories: RoutineCategory::ALL
                .iter()
                .map(|c| CategoryOption {
                    key: c.key().to_string(),
                    label: c.label().to_string(),
                })
                .collect(),
            days: TrainingDays::ALL.iter().map(TrainingDays::count).collect(),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn check(field: &str, result: Result<(), String>) -> Result<(), ValidationGap> {
    result.map_err(|msg| ValidationGap::invalid(field, &msg))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_request() -> CalculatorRequest {
        CalculatorRequest {
            weight_kg: Some(70.0),
            height_cm: Some(175.0),
            age_years: Some(30.0),
            sex: Some("male".to_string()),
            goal: Some("healthy".to_string()),
            sleep_hours: Some(8.0),
            active_hours: Some(1.0),
        }
    }

    #[test]
    fn test_complete_request_converts() {
        let input = complete_request().to_input().unwrap();
        assert_eq!(input.age_years, 30);
        assert_eq!(input.sex, BiologicalSex::Male);
        assert_eq!(input.goal, Goal::Healthy);
    }

    #[test]
    fn test_empty_request_lists_every_field() {
        let err = CalculatorRequest::default().to_input().unwrap_err();
        match err {
            ValidationGap::Incomplete(fields) => assert_eq!(fields.len(), 7),
            other => panic!("expected incomplete, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_string_counts_as_missing() {
        let req = CalculatorRequest {
            goal: Some("   ".to_string()),
            ..complete_request()
        };
        assert_eq!(
            req.to_input().unwrap_err(),
            ValidationGap::Incomplete(vec!["goal".to_string()])
        );
    }

    #[test]
    fn test_incomplete_wins_over_invalid() {
        let req = CalculatorRequest {
            weight_kg: Some(-1.0),
            sleep_hours: None,
            ..complete_request()
        };
        assert_eq!(req.to_input().unwrap_err().kind(), "incomplete");
    }

    #[test]
    fn test_invalid_values() {
        let cases = [
            (CalculatorRequest { height_cm: Some(30.0), ..complete_request() }, "height_cm"),
            (CalculatorRequest { age_years: Some(0.0), ..complete_request() }, "age_years"),
            (CalculatorRequest { sex: Some("x".to_string()), ..complete_request() }, "sex"),
            (CalculatorRequest { goal: Some("bulk".to_string()), ..complete_request() }, "goal"),
            (CalculatorRequest { sleep_hours: Some(25.0), ..complete_request() }, "sleep_hours"),
            (
                CalculatorRequest { sleep_hours: Some(12.0), active_hours: Some(13.0), ..complete_request() },
                "active_hours",
            ),
        ];
        for (req, field) in cases {
            let err = req.to_input().unwrap_err();
            assert_eq!(err.kind(), "invalid");
            assert_eq!(err.field(), Some(field));
        }
    }

    #[test]
    fn test_request_deserializes_with_missing_fields() {
        let req: CalculatorRequest = serde_json::from_str(r#"{"weight_kg": 80}"#).unwrap();
        assert_eq!(req.weight_kg, Some(80.0));
        assert_eq!(req.missing_fields().len(), 6);
    }

    #[test]
    fn test_routine_query_parts() {
        let query = RoutineQuery {
            category: Some("strength".to_string()),
            days: Some(" 4 ".to_string()),
        };
        assert_eq!(query.to_parts().unwrap(), ("strength", 4));

        let query = RoutineQuery {
            category: Some("strength".to_string()),
            days: Some("four".to_string()),
        };
        assert_eq!(query.to_parts().unwrap_err().field(), Some("days"));

        let err = RoutineQuery::default().to_parts().unwrap_err();
        assert_eq!(
            err,
            ValidationGap::Incomplete(vec!["category".to_string(), "days".to_string()])
        );
    }

    #[test]
    fn test_routine_query_accepts_any_integer_days() {
        for (days, expected) in [
            ("-1", -1),
            ("4294967296", 4_294_967_296),
            ("99999999999999999999", i64::MAX),
            ("-99999999999999999999", i64::MIN),
        ] {
            let query = RoutineQuery {
                category: Some("hypertrophy".to_string()),
                days: Some(days.to_string()),
            };
            assert_eq!(query.to_parts().unwrap(), ("hypertrophy", expected));
        }

        for days in ["3.5", "-", "1e3", "three"] {
            let query = RoutineQuery {
                category: Some("hypertrophy".to_string()),
                days: Some(days.to_string()),
            };
            assert_eq!(query.to_parts().unwrap_err().kind(), "invalid");
        }
    }

    #[test]
    fn test_routine_response_for_unknown_category() {
        let response = RoutineResponse::new("yoga", 3, crate::routines::lookup_routine("yoga", 3));
        assert!(!response.found);
        assert!(response.category.is_none());
        assert!(response.plan.is_none());
        assert!(response.description.is_none());
    }

    #[test]
    fn test_routine_options() {
        let options = RoutineOptions::from_catalog();
        assert_eq!(options.categories.len(), 4);
        assert_eq!(options.days, vec![3, 4, 5]);
        assert_eq!(options.categories[3].key, "weight_loss");
    }
}
