//! Integration tests for the calculator endpoint

mod common;

use axum::http::StatusCode;
use serde_json::json;

const COMPLETE_FORM: &str = r#"{
    "weight_kg": 70,
    "height_cm": 175,
    "age_years": 30,
    "sex": "male",
    "goal": "healthy",
    "sleep_hours": 8,
    "active_hours": 1
}"#;

#[tokio::test]
async fn test_calculate_complete_form() {
    let app = common::TestApp::new();

    let (status, json) = app.post_json("/api/v1/calculator", COMPLETE_FORM).await;

    assert_eq!(status, StatusCode::OK);
    let results = &json["results"];
    assert_eq!(results["bmi"], 22.86);
    assert_eq!(results["bmi_category"], "normal");
    assert_eq!(results["bmr"], 1648.75);
    assert_eq!(results["body_fat_percent"], 18.13);
    assert_eq!(json["bmi_label"], "Normal weight");
    assert_eq!(json["input"]["goal"], "healthy");

    // healthy split: 20% fat, 60% carbs, 20% protein
    let energy = results["active_daily_energy"].as_f64().unwrap();
    let carbs = results["macros"]["carbs_g"].as_f64().unwrap();
    assert!((carbs - energy * 0.6 / 4.0).abs() < 0.01);
}

#[tokio::test]
async fn test_calculate_is_repeatable() {
    let app = common::TestApp::new();

    let (_, first) = app.post("/api/v1/calculator", COMPLETE_FORM).await;
    let (_, second) = app.post("/api/v1/calculator", COMPLETE_FORM).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_calculate_empty_form_is_incomplete() {
    let app = common::TestApp::new();

    let (status, json) = app.post_json("/api/v1/calculator", "{}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "INCOMPLETE_FORM");
    assert_eq!(
        json["error"]["details"]["missing_fields"].as_array().map(Vec::len),
        Some(7)
    );
}

#[tokio::test]
async fn test_calculate_rejects_out_of_range_values() {
    let app = common::TestApp::new();
    let cases = [
        (json!({"height_cm": 45}), "height_cm"),
        (json!({"weight_kg": 1e308, "height_cm": 50}), "weight_kg"),
        (json!({"height_cm": 1e308}), "height_cm"),
        (json!({"goal": "bulk"}), "goal"),
        (json!({"sleep_hours": 12, "active_hours": 13}), "active_hours"),
    ];

    for (overrides, field) in cases {
        let mut form: serde_json::Value = serde_json::from_str(COMPLETE_FORM).unwrap();
        for (key, value) in overrides.as_object().unwrap() {
            form[key] = value.clone();
        }

        let (status, json) = app.post_json("/api/v1/calculator", &form.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"]["field"], field);
    }
}

#[tokio::test]
async fn test_calculate_malformed_json() {
    let app = common::TestApp::new();

    let (status, json) = app.post_json("/api/v1/calculator", "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_energy_explainer() {
    let app = common::TestApp::new();

    let (status, json) = app.get_json("/api/v1/calculator/explainer").await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["text"].as_str().unwrap().contains("activity"));
}
