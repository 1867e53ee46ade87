//! Weather report formatting
//!
//! Pure rendering of a snapshot into the fixed report template.

use crate::models::WeatherSnapshot;

/// Render a snapshot into the fixed multi-line report paragraph. Pure and
/// deterministic; identical input yields byte-identical output.
pub fn format_weather_report(snapshot: &WeatherSnapshot) -> String {
    format!(
        "Location: {}\nTemperature: {}°F\nCondition: Current weather condition: {}\nWind Speed: {} mph\nHumidity: {}%",
        snapshot.location,
        snapshot.temperature_fahrenheit,
        snapshot.condition,
        snapshot.wind_speed_mph,
        snapshot.humidity_percent,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seattle_snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            location: "Seattle".to_string(),
            temperature_fahrenheit: 55.0,
            condition: "light rain".to_string(),
            wind_speed_mph: 8.5,
            humidity_percent: 80,
        }
    }

    #[test]
    fn report_contains_every_value_and_label() {
        let report = format_weather_report(&seattle_snapshot());

        assert!(report.contains("Location: Seattle"));
        assert!(report.contains("Temperature: 55°F"));
        assert!(report.contains("Condition: Current weather condition: light rain"));
        assert!(report.contains("Wind Speed: 8.5 mph"));
        assert!(report.contains("Humidity: 80%"));
    }

    #[test]
    fn labels_appear_in_template_order() {
        let report = format_weather_report(&seattle_snapshot());

        let positions: Vec<usize> = [
            "Location:",
            "Temperature:",
            "Condition:",
            "Wind Speed:",
            "Humidity:",
        ]
        .iter()
        .map(|label| report.find(label).unwrap())
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn formatting_is_idempotent() {
        let snapshot = seattle_snapshot();
        assert_eq!(
            format_weather_report(&snapshot),
            format_weather_report(&snapshot)
        );
    }
}
