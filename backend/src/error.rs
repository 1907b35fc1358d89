//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting validation gaps to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::debug;
use vivefit_shared::errors::ValidationGap;
use vivefit_shared::types::{ErrorDetail, ErrorResponse};
use vivefit_shared::validation::get_missing_fields_labels;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Form(#[from] ValidationGap),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (code, field, details) = match &self {
            ApiError::Form(ValidationGap::Incomplete(fields)) => (
                "INCOMPLETE_FORM",
                self_field(&self),
                Some(serde_json::json!({ "missing_fields": get_missing_fields_labels(fields) })),
            ),
            ApiError::Form(ValidationGap::Invalid(_)) => ("VALIDATION_ERROR", self_field(&self), None),
            ApiError::BadRequest(_) => ("BAD_REQUEST", None, None),
        };
        debug!(code, error = %self, "Rejecting request");

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
                field,
                details,
            },
        });

        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

fn self_field(error: &ApiError) -> Option<String> {
    match error {
        ApiError::Form(gap) => gap.field().map(str::to_string),
        ApiError::BadRequest(_) => None,
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
