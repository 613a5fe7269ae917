//! `skycast` - resolve a location and fetch its weather
//!
//! This library turns a free-form location (place name, postal code or a
//! "lat,lon" pair) into coordinates using a chain of geocoding providers,
//! then fetches current conditions and a 5-day forecast from Open-Meteo.

pub mod config;
pub mod error;
pub mod geocoding;
pub mod location_parser;
pub mod location_resolver;
pub mod models;
pub mod service;
pub mod weather;

// Re-export core types for public API
pub use crate::config::SkycastConfig;
pub use error::SkycastError;
pub use location_parser::LocationParser;
pub use location_resolver::LocationResolver;
pub use models::{Coordinates, CurrentConditions, ForecastDay, LocationInfo, WeatherReport, WeatherResult};
pub use service::WeatherService;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SkycastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
