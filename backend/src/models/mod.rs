//! Request and response data model

use serde::{Deserialize, Serialize};

use crate::external::openai::ChatCompletion;

/// Incoming request body: the city to report on
#[derive(Debug, Deserialize)]
pub struct CityQuery {
    pub city_name: String,
}

/// A single point-in-time weather reading, normalized from the provider
/// response. Every field is required; a provider body missing any of them is
/// rejected during decoding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSnapshot {
    pub location: String,
    pub temperature_fahrenheit: f64,
    pub condition: String,
    pub wind_speed_mph: f64,
    pub humidity_percent: i32,
}

/// Handler output: the formatted report plus the provider completion
#[derive(Debug, Serialize)]
pub struct WeatherReportResponse {
    pub weather_report: String,
    pub openai_response: ChatCompletion,
}
