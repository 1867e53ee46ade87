//! HTTP handler for the weather report endpoint

use axum::{extract::State, Json};

use crate::error::{AppError, AppResult};
use crate::models::{CityQuery, WeatherReportResponse};
use crate::services::format_weather_report;
use crate::AppState;

/// Produce a weather report with clothing recommendations for a city.
///
/// One-shot linear pipeline: fetch the snapshot, render the report, then ask
/// the model for the narrative. The narrative call depends on the formatted
/// report, so the two outbound calls run in sequence.
pub async fn get_weather_report(
    State(state): State<AppState>,
    Json(query): Json<CityQuery>,
) -> AppResult<Json<WeatherReportResponse>> {
    if query.city_name.trim().is_empty() {
        return Err(AppError::Validation(
            "city_name must not be empty".to_string(),
        ));
    }

    let snapshot = state.weather.fetch_current(&query.city_name).await?;
    let weather_report = format_weather_report(&snapshot);
    let openai_response = state.narrative.generate(&weather_report).await?;

    Ok(Json(WeatherReportResponse {
        weather_report,
        openai_response,
    }))
}
