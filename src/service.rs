//! Location-to-weather orchestration
//!
//! Ties the resolver and the forecast provider together. The service holds
//! only immutable configuration and HTTP clients, so one instance can serve
//! any number of concurrent callers.

use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::config::SkycastConfig;
use crate::geocoding::{GeocodingProvider, NominatimClient, OpenMeteoGeocoder};
use crate::location_resolver::LocationResolver;
use crate::models::{WeatherReport, WeatherResult};
use crate::weather::{self, ForecastProvider, OpenMeteoForecastClient};
use crate::{Result, SkycastError};

/// Resolves a free-form location and returns normalized weather for it
pub struct WeatherService {
    resolver: LocationResolver,
    forecast: Box<dyn ForecastProvider>,
}

impl WeatherService {
    #[must_use]
    pub fn new(resolver: LocationResolver, forecast: Box<dyn ForecastProvider>) -> Self {
        Self { resolver, forecast }
    }

    /// Build the default provider stack: Open-Meteo geocoding, then Nominatim
    /// postal search; Nominatim for reverse lookups; Open-Meteo forecasts.
    pub fn from_config(config: &SkycastConfig) -> Result<Self> {
        let providers = &config.providers;
        let client_error =
            |e: reqwest::Error| SkycastError::config(format!("Failed to create HTTP client: {e}"));

        let nominatim = NominatimClient::new(providers).map_err(client_error)?;
        let chain: Vec<Box<dyn GeocodingProvider>> = vec![
            Box::new(OpenMeteoGeocoder::new(providers).map_err(client_error)?),
            Box::new(nominatim.clone()),
        ];
        let resolver = LocationResolver::new(Box::new(nominatim), chain);
        let forecast = OpenMeteoForecastClient::new(providers).map_err(client_error)?;

        Ok(Self::new(resolver, Box::new(forecast)))
    }

    /// Resolve the location and fetch its weather. Never fails: any error is
    /// folded into [`WeatherResult::Error`] with a user-facing message.
    ///
    /// The input must already be trimmed and non-empty.
    #[instrument(skip(self))]
    pub async fn resolve_weather(&self, location_input: &str) -> WeatherResult {
        match self.try_resolve_weather(location_input).await {
            Ok(report) => WeatherResult::Report(report),
            Err(e) => {
                warn!("Weather lookup for '{}' failed: {}", location_input, e);
                WeatherResult::Error {
                    error: e.user_message(),
                }
            }
        }
    }

    async fn try_resolve_weather(&self, location_input: &str) -> Result<WeatherReport> {
        let location = self
            .resolver
            .resolve_location(location_input)
            .await
            .ok_or_else(|| SkycastError::not_found(location_input))?;

        info!(
            "Fetching weather for {} ({})",
            location.label(),
            location.coordinates().format_coordinates()
        );

        let raw = self
            .forecast
            .fetch_forecast(location.coordinates())
            .await?;

        weather::normalize(&location, &raw, Utc::now())
    }
}
