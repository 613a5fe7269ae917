//! Daily forecast entries and the combined weather report

use super::{Coordinates, CurrentConditions, WeatherIcon};
use serde::Serialize;
use std::fmt::Display;

/// Number of daily entries every report carries, day 0 being today
pub const FORECAST_DAYS: usize = 5;

/// One day of the short-range forecast
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ForecastDay {
    /// ISO date as reported by the provider
    pub date: String,
    /// "Today - Aug 07" or "Thursday - Aug 08"
    pub label: String,
    pub condition: String,
    pub icon: WeatherIcon,
    /// Maximum temperature in Celsius
    pub temp_max: f64,
    /// Minimum temperature in Celsius
    pub temp_min: f64,
    /// Precipitation sum in mm
    pub precipitation: f64,
    /// Maximum wind speed in km/h
    pub wind_max: f64,
}

impl Display for ForecastDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {:<22} {:>5.1}°C / {:>5.1}°C  {:>5.1} mm  {:>5.1} km/h  {}",
            self.icon.glyph(),
            self.label,
            self.temp_max,
            self.temp_min,
            self.precipitation,
            self.wind_max,
            self.condition
        )
    }
}

/// Current conditions plus the fixed-length daily forecast
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastDay>,
    pub coordinates: Coordinates,
}

impl Display for WeatherReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.current)?;
        writeln!(f, "   📍 {}", self.coordinates.format_coordinates())?;
        writeln!(f)?;
        writeln!(f, "{}-day forecast:", self.forecast.len())?;
        for day in &self.forecast {
            writeln!(f, "  {day}")?;
        }
        Ok(())
    }
}

/// Outcome of a weather lookup: either a full report or a user-facing error.
/// Serializes to `{current, forecast, coordinates}` or `{error}`.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum WeatherResult {
    Report(WeatherReport),
    Error { error: String },
}

impl WeatherResult {
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, WeatherResult::Error { .. })
    }

    #[must_use]
    pub fn report(&self) -> Option<&WeatherReport> {
        match self {
            WeatherResult::Report(report) => Some(report),
            WeatherResult::Error { .. } => None,
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            WeatherResult::Report(_) => None,
            WeatherResult::Error { error } => Some(error),
        }
    }
}
