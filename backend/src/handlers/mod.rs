//! HTTP handlers for the Weather Report Service

pub mod health;
pub mod weather;

pub use health::health_check;
pub use weather::get_weather_report;
