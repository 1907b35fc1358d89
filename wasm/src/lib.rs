//! ViveFit WASM Module
//!
//! WebAssembly bindings so the calculator and routine screens can run
//! entirely in the browser. Every binding speaks JSON so the page can keep
//! using the same payloads as the HTTP API.

use serde::Serialize;
use vivefit_shared::{
    body_metrics::{compute_all, ENERGY_EXPLAINER},
    routines::{lookup_routine, EXERCISE_TYPES_EXPLAINER},
    types::{CalculatorRequest, CalculatorResponse, ExplainerResponse, RoutineOptions, RoutineResponse},
};
use wasm_bindgen::prelude::*;

/// Run the calculator on a JSON-encoded `CalculatorRequest`
///
/// Returns the `CalculatorResponse` as JSON, or an error carrying the
/// message to show in the form dialog.
#[wasm_bindgen]
pub fn compute_metrics(request_json: &str) -> Result<String, JsError> {
    compute_metrics_json(request_json).map_err(|msg| JsError::new(&msg))
}

/// Look up a routine; the result is a JSON `RoutineResponse`
#[wasm_bindgen]
pub fn find_routine(category: &str, days: i32) -> String {
    let days = i64::from(days);
    to_json(&RoutineResponse::new(category, days, lookup_routine(category, days)))
}

/// Routine types and day counts offered on the routine form, as JSON
#[wasm_bindgen]
pub fn routine_options() -> String {
    to_json(&RoutineOptions::from_catalog())
}

/// Text explaining resting versus active daily energy, as JSON
#[wasm_bindgen]
pub fn energy_explainer() -> String {
    to_json(&ExplainerResponse {
        title: "Difference between the two results".to_string(),
        text: ENERGY_EXPLAINER.to_string(),
    })
}

/// Text explaining compound versus isolation exercises, as JSON
#[wasm_bindgen]
pub fn exercise_types_explainer() -> String {
    to_json(&ExplainerResponse {
        title: "What are compound and isolation exercises?".to_string(),
        text: EXERCISE_TYPES_EXPLAINER.to_string(),
    })
}

fn compute_metrics_json(request_json: &str) -> Result<String, String> {
    let request: CalculatorRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Malformed request: {}", e))?;
    let input = request.to_input().map_err(|gap| gap.to_string())?;
    Ok(to_json(&CalculatorResponse::new(input, compute_all(&input))))
}

fn to_json<T: Serialize>(value: &T) -> String {
    // Response types hold only strings, numbers and enums
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}
