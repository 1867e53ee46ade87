//! Weather Report Service - Backend
//!
//! Fetches current weather for a named city, renders it into a fixed
//! natural-language paragraph, and asks an LLM for a human-readable report
//! with clothing recommendations.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use config::Config;

use external::{openai::OpenAiClient, weather::WeatherClient};
use services::narrative::NarrativeGenerator;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather: WeatherClient,
    pub narrative: NarrativeGenerator,
}

impl AppState {
    /// Build the provider clients once at startup from the loaded configuration
    pub fn new(config: Config) -> Self {
        let weather = WeatherClient::new(&config.weather);
        let narrative = NarrativeGenerator::new(OpenAiClient::new(&config.openai));

        Self {
            config: Arc::new(config),
            weather,
            narrative,
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration: any origin, method, and header, with credentials.
    // Credentialed CORS cannot use the wildcard, so the request values are
    // mirrored back instead.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/", get(root))
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Weather Report API v1.0"
}
