//! Error handling for the Weather Report Service
//!
//! Every failure either maps to one fixed client message (city not found)
//! or surfaces as a generic server error; no partial responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// The weather provider answered with a non-success status. The mapping
    /// is fixed: unknown city and provider-side rejection are not
    /// distinguished.
    #[error("City not found")]
    CityNotFound,

    #[error("Validation error: {0}")]
    Validation(String),

    /// The weather provider request could not be sent or completed
    #[error("Weather provider request failed: {0}")]
    WeatherProvider(String),

    /// The weather provider returned success but the body did not match the
    /// documented shape
    #[error("Malformed weather provider response: {0}")]
    MalformedWeatherResponse(String),

    /// The chat-completion provider failed (network, auth, quota)
    #[error("Narrative provider error: {0}")]
    NarrativeProvider(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::CityNotFound => (StatusCode::NOT_FOUND, "City not found".to_string()),
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::WeatherProvider(_)
            | AppError::MalformedWeatherResponse(_)
            | AppError::NarrativeProvider(_)
            | AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_not_found_maps_to_404() {
        let response = AppError::CityNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_422() {
        let response = AppError::Validation("city_name must not be empty".into()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn provider_failures_map_to_500() {
        for err in [
            AppError::WeatherProvider("connection refused".into()),
            AppError::MalformedWeatherResponse("missing field".into()),
            AppError::NarrativeProvider("quota exceeded".into()),
        ] {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
