//! Request-scoped services for the Weather Report Service

pub mod narrative;
pub mod report;

pub use narrative::NarrativeGenerator;
pub use report::format_weather_report;
