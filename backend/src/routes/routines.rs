//! Workout routine API routes

use crate::error::ApiResult;
use crate::services::RoutineService;
use crate::state::AppState;
use axum::{extract::Query, routing::get, Json, Router};
use vivefit_shared::routines::EXERCISE_TYPES_EXPLAINER;
use vivefit_shared::types::{ExplainerResponse, RoutineOptions, RoutineQuery, RoutineResponse};

/// Create routine routes
pub fn routine_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(find_routine))
        .route("/options", get(routine_options))
        .route("/explainer", get(exercise_types_explainer))
}

/// GET /api/v1/routines?category=..&days=.. - Look up a routine
async fn find_routine(Query(query): Query<RoutineQuery>) -> ApiResult<Json<RoutineResponse>> {
    RoutineService::find(&query).map(Json)
}

/// GET /api/v1/routines/options - Choices for the routine form
async fn routine_options() -> Json<RoutineOptions> {
    Json(RoutineOptions::from_catalog())
}

/// GET /api/v1/routines/explainer - Compound versus isolation exercises
async fn exercise_types_explainer() -> Json<ExplainerResponse> {
    Json(ExplainerResponse {
        title: "What are compound and isolation exercises?".to_string(),
        text: EXERCISE_TYPES_EXPLAINER.to_string(),
    })
}
