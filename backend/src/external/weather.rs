//! Weather API client for fetching current conditions
//!
//! Integrates with the OpenWeatherMap current-weather API

use reqwest::Client;
use serde::Deserialize;

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};
use crate::models::WeatherSnapshot;

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// OpenWeatherMap current-weather response. Only the fields the snapshot
/// needs are declared; everything else in the body is ignored.
#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    name: String,
    weather: Vec<OwmWeather>,
    main: OwmMain,
    wind: OwmWind,
}

#[derive(Debug, Deserialize)]
struct OwmWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    humidity: i32,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

impl WeatherClient {
    /// Create a new WeatherClient from the provider configuration
    pub fn new(config: &WeatherConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.api_endpoint.clone(),
        }
    }

    /// Fetch current weather conditions for a named city, in imperial units.
    ///
    /// Any non-success status from the provider maps to `CityNotFound`; the
    /// provider reports unknown cities this way and no finer distinction is
    /// made.
    pub async fn fetch_current(&self, city_name: &str) -> AppResult<WeatherSnapshot> {
        let url = format!("{}/weather", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city_name),
                ("appid", self.api_key.as_str()),
                ("units", "imperial"),
            ])
            .send()
            .await
            .map_err(|e| AppError::WeatherProvider(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::CityNotFound);
        }

        let data: OwmCurrentResponse = response.json().await.map_err(|e| {
            AppError::MalformedWeatherResponse(format!("failed to decode body: {}", e))
        })?;

        convert_current_response(data)
    }
}

/// Convert the provider response to a snapshot. The `weather` array must
/// hold at least one condition entry.
fn convert_current_response(data: OwmCurrentResponse) -> AppResult<WeatherSnapshot> {
    let condition = data
        .weather
        .first()
        .map(|w| w.description.clone())
        .ok_or_else(|| {
            AppError::MalformedWeatherResponse("missing weather condition entry".to_string())
        })?;

    Ok(WeatherSnapshot {
        location: data.name,
        temperature_fahrenheit: data.main.temp,
        condition,
        wind_speed_mph: data.wind.speed,
        humidity_percent: data.main.humidity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trimmed-down real response body; extra provider fields must be ignored.
    const SAMPLE_BODY: &str = r#"{
        "coord": {"lon": -97.74, "lat": 30.27},
        "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
        "main": {"temp": 55.0, "feels_like": 53.2, "temp_min": 52.0, "temp_max": 58.1, "pressure": 1017, "humidity": 80},
        "visibility": 10000,
        "wind": {"speed": 8.5, "deg": 170},
        "dt": 1717000000,
        "name": "Austin",
        "cod": 200
    }"#;

    #[test]
    fn decodes_and_converts_provider_body() {
        let data: OwmCurrentResponse = serde_json::from_str(SAMPLE_BODY).unwrap();
        let snapshot = convert_current_response(data).unwrap();

        assert_eq!(
            snapshot,
            WeatherSnapshot {
                location: "Austin".to_string(),
                temperature_fahrenheit: 55.0,
                condition: "light rain".to_string(),
                wind_speed_mph: 8.5,
                humidity_percent: 80,
            }
        );
    }

    #[test]
    fn empty_condition_array_is_malformed() {
        let body = r#"{
            "weather": [],
            "main": {"temp": 55.0, "humidity": 80},
            "wind": {"speed": 8.5},
            "name": "Austin"
        }"#;

        let data: OwmCurrentResponse = serde_json::from_str(body).unwrap();
        let err = convert_current_response(data).unwrap_err();
        assert!(matches!(err, AppError::MalformedWeatherResponse(_)));
    }

    #[test]
    fn missing_required_field_fails_decoding() {
        // No "main" section at all
        let body = r#"{
            "weather": [{"description": "light rain"}],
            "wind": {"speed": 8.5},
            "name": "Austin"
        }"#;

        assert!(serde_json::from_str::<OwmCurrentResponse>(body).is_err());
    }
}
