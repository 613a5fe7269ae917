//! Data models for skycast
//!
//! This module contains the core domain models organized by concern:
//! - Location: validated coordinates and resolved place metadata
//! - Condition: WMO weather code descriptions and icons
//! - Weather: current conditions
//! - Forecast: daily entries and the combined result

pub mod condition;
pub mod forecast;
pub mod location;
pub mod weather;

// Re-export all public types for convenient access
pub use condition::{WeatherIcon, weather_code_to_description};
pub use forecast::{FORECAST_DAYS, ForecastDay, WeatherReport, WeatherResult};
pub use location::{Coordinates, LocationInfo};
pub use weather::CurrentConditions;
