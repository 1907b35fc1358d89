//! Body metrics calculator API routes

use crate::error::{ApiError, ApiResult};
use crate::services::CalculatorService;
use crate::state::AppState;
use axum::{
    extract::rejection::JsonRejection,
    routing::{get, post},
    Json, Router,
};
use vivefit_shared::body_metrics::ENERGY_EXPLAINER;
use vivefit_shared::types::{CalculatorRequest, CalculatorResponse, ExplainerResponse};

/// Create calculator routes
pub fn calculator_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(calculate))
        .route("/explainer", get(energy_explainer))
}

/// POST /api/v1/calculator - Compute all metrics for the submitted form
async fn calculate(
    payload: Result<Json<CalculatorRequest>, JsonRejection>,
) -> ApiResult<Json<CalculatorResponse>> {
    let Json(req) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    CalculatorService::calculate(&req).map(Json)
}

/// GET /api/v1/calculator/explainer - Resting versus active daily energy
async fn energy_explainer() -> Json<ExplainerResponse> {
    Json(ExplainerResponse {
        title: "Difference between the two results".to_string(),
        text: ENERGY_EXPLAINER.to_string(),
    })
}
