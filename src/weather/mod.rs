//! Weather fetching and normalization
//!
//! Maps the raw `OpenMeteo` response into display-ready current conditions
//! and exactly [`FORECAST_DAYS`] daily entries.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{
    Coordinates, CurrentConditions, FORECAST_DAYS, ForecastDay, LocationInfo, WeatherIcon,
    WeatherReport, weather_code_to_description,
};
use crate::{Result, SkycastError};

pub mod open_meteo;

pub use open_meteo::{ForecastResponse, OpenMeteoForecastClient};

/// Source of raw forecast data for validated coordinates
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    async fn fetch_forecast(&self, coordinates: Coordinates) -> Result<ForecastResponse>;
}

/// Round to one decimal place for display
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// "Today - Aug 07" for the first day, "Thursday - Aug 08" afterwards
#[must_use]
pub fn day_label(index: usize, date: NaiveDate) -> String {
    let day_name = if index == 0 {
        "Today".to_string()
    } else {
        date.format("%A").to_string()
    };
    format!("{} - {}", day_name, date.format("%b %d"))
}

/// Build the full report for a resolved location
pub fn normalize(
    location: &LocationInfo,
    raw: &ForecastResponse,
    observed_at: DateTime<Utc>,
) -> Result<WeatherReport> {
    let current = raw.current.clone();
    let current = CurrentConditions {
        location: location.label(),
        temperature_c: round1(current.temperature),
        feels_like_c: round1(current.feels_like),
        condition: weather_code_to_description(current.weather_code).to_string(),
        icon: WeatherIcon::from_wmo_code(current.weather_code),
        humidity_pct: current.humidity,
        wind_speed: round1(current.wind_speed),
        wind_direction: current.wind_direction,
        pressure: round1(current.pressure),
        precipitation: round1(current.precipitation.unwrap_or(0.0)),
        is_day: current.is_day != 0,
        observed_at,
    };

    Ok(WeatherReport {
        current,
        forecast: forecast_days(&raw.daily)?,
        coordinates: location.coordinates(),
    })
}

/// Take the first [`FORECAST_DAYS`] daily entries. Fewer usable entries is an
/// upstream failure; no partial forecast is ever produced.
pub fn forecast_days(daily: &open_meteo::DailyData) -> Result<Vec<ForecastDay>> {
    (0..FORECAST_DAYS)
        .map(|i| forecast_day(daily, i))
        .collect()
}

fn missing(field: &str, index: usize) -> SkycastError {
    SkycastError::upstream(format!("Forecast is missing {field} for day {index}"))
}

fn daily_value(values: &[Option<f64>], index: usize, field: &str) -> Result<f64> {
    values
        .get(index)
        .copied()
        .flatten()
        .ok_or_else(|| missing(field, index))
}

fn forecast_day(daily: &open_meteo::DailyData, index: usize) -> Result<ForecastDay> {
    let date = daily.time.get(index).ok_or_else(|| missing("time", index))?;
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| {
        SkycastError::upstream(format!("Invalid forecast date '{date}': {e}"))
    })?;
    let code = daily
        .weather_code
        .get(index)
        .copied()
        .flatten()
        .ok_or_else(|| missing("weather_code", index))?;

    Ok(ForecastDay {
        date: date.clone(),
        label: day_label(index, parsed),
        condition: weather_code_to_description(code).to_string(),
        icon: WeatherIcon::from_wmo_code(code),
        temp_max: round1(daily_value(&daily.temperature_max, index, "temperature_2m_max")?),
        temp_min: round1(daily_value(&daily.temperature_min, index, "temperature_2m_min")?),
        precipitation: round1(daily_value(&daily.precipitation, index, "precipitation_sum")?),
        wind_max: round1(daily_value(&daily.wind_speed_max, index, "wind_speed_10m_max")?),
    })
}
