//! Calculator service - runs the body metrics calculator on form input

use crate::error::ApiError;
use tracing::{debug, info};
use vivefit_shared::body_metrics::compute_all;
use vivefit_shared::types::{CalculatorRequest, CalculatorResponse};

/// Calculator service
pub struct CalculatorService;

impl CalculatorService {
    /// Validate the form and compute every metric
    pub fn calculate(req: &CalculatorRequest) -> Result<CalculatorResponse, ApiError> {
        let input = req.to_input().map_err(|gap| {
            info!(kind = gap.kind(), field = gap.field(), "Calculator form rejected");
            metrics::counter!("vivefit_validation_failures_total", "form" => "calculator", "kind" => gap.kind())
                .increment(1);
            ApiError::from(gap)
        })?;

        let results = compute_all(&input);
        debug!(
            bmi = results.bmi,
            bmi_category = ?results.bmi_category,
            bmr = results.bmr,
            active_daily_energy = results.active_daily_energy,
            "Metrics calculated"
        );
        metrics::counter!("vivefit_calculations_total", "goal" => input.goal.key()).increment(1);

        Ok(CalculatorResponse::new(input, results))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use vivefit_shared::body_metrics::BmiCategory;
    use vivefit_shared::errors::ValidationGap;

    fn request() -> CalculatorRequest {
        CalculatorRequest {
            weight_kg: Some(95.0),
            height_cm: Some(170.0),
            age_years: Some(45.0),
            sex: Some("female".to_string()),
            goal: Some("train".to_string()),
            sleep_hours: Some(7.0),
            active_hours: Some(2.0),
        }
    }

    #[test]
    fn test_calculate_returns_results() {
        let response = CalculatorService::calculate(&request()).unwrap();
        // 95 / 1.7² = 32.87
        assert_eq!(response.results.bmi, 32.87);
        assert_eq!(response.results.bmi_category, BmiCategory::ObeseClass1);
        assert_eq!(response.bmi_label, "Obesity (Class I)");
        // 950 + 1062.5 - 225 - 161
        assert_eq!(response.results.bmr, 1626.5);
    }

    #[test]
    fn test_calculate_rejects_incomplete_form() {
        let req = CalculatorRequest {
            height_cm: None,
            ..request()
        };
        let err = CalculatorService::calculate(&req).unwrap_err();
        assert!(matches!(err, ApiError::Form(ValidationGap::Incomplete(ref f)) if f == &["height_cm"]));
    }

    proptest! {
        #[test]
        fn calculate_accepts_realistic_forms(
            weight in 30.0f64..200.0,
            height in 140.0f64..210.0,
            age in 18u32..90,
            sleep in 0.0f64..12.0,
            active in 0.0f64..12.0,
        ) {
            let req = CalculatorRequest {
                weight_kg: Some(weight),
                height_cm: Some(height),
                age_years: Some(age as f64),
                sleep_hours: Some(sleep),
                active_hours: Some(active),
                ..request()
            };
            let response = CalculatorService::calculate(&req).unwrap();
            prop_assert!(response.results.bmi > 0.0);
            prop_assert!(response.results.active_daily_energy >= response.results.bmr * 0.99);
        }
    }
}
