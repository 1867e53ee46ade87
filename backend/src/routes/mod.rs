//! Route definitions for the Weather Report Service

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Weather report pipeline (public)
        .route("/get_weather/", post(handlers::get_weather_report))
}
