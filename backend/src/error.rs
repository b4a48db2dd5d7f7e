//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting engine and request errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use nutrition_tracker_shared::types::{ErrorDetail, ErrorResponse};
use nutrition_tracker_shared::validation::get_field_display_label;
use nutrition_tracker_shared::NutritionError;
use thiserror::Error;
use tracing::warn;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Nutrition(#[from] NutritionError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::Validation(errors.to_string())
    }
}

impl ApiError {
    /// Label used for the error counter
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Nutrition(NutritionError::InvalidProfile { .. }) => "invalid_profile",
            ApiError::Nutrition(NutritionError::UnknownMealType(_)) => "unknown_meal_type",
            ApiError::Nutrition(NutritionError::NegativeResult { .. }) => "negative_result",
            ApiError::Nutrition(NutritionError::OutOfRange { .. }) => "out_of_range",
            ApiError::Validation(_) => "validation",
            ApiError::NotFound(_) => "not_found",
        }
    }
}

fn nutrition_status(err: &NutritionError) -> StatusCode {
    match err {
        NutritionError::InvalidProfile { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        NutritionError::UnknownMealType(_) => StatusCode::BAD_REQUEST,
        NutritionError::NegativeResult { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        NutritionError::OutOfRange { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

fn nutrition_message(err: &NutritionError) -> String {
    match err {
        NutritionError::InvalidProfile { field, reason } => {
            format!("{}: {}", get_field_display_label(field), reason)
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        metrics::counter!("nutrition_errors_total", "kind" => self.kind()).increment(1);

        let (status, code, message, field) = match &self {
            ApiError::Nutrition(err) => {
                warn!(code = err.code(), error = %err, "Calculation rejected");
                (
                    nutrition_status(err),
                    err.code(),
                    nutrition_message(err),
                    err.field().map(str::to_string),
                )
            }
            ApiError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone(), None)
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone(), None),
        };

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                field,
                details: None,
            },
        });

        (status, body).into_response()
    }
}
