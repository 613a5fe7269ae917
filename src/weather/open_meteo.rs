//! `OpenMeteo` forecast client and API response structures

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

use super::ForecastProvider;
use crate::config::ProviderConfig;
use crate::models::{Coordinates, FORECAST_DAYS};
use crate::{Result, SkycastError};

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,precipitation,weather_code,surface_pressure,wind_speed_10m,wind_direction_10m,is_day";
const DAILY_FIELDS: &str =
    "weather_code,temperature_2m_max,temperature_2m_min,precipitation_sum,wind_speed_10m_max";

/// Current weather and daily forecast response from `OpenMeteo` API
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: Option<String>,
    pub current: CurrentData,
    pub daily: DailyData,
}

/// Current weather data from `OpenMeteo`
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentData {
    #[serde(rename = "temperature_2m")]
    pub temperature: f64,
    #[serde(rename = "relative_humidity_2m")]
    pub humidity: u8,
    #[serde(rename = "apparent_temperature")]
    pub feels_like: f64,
    #[serde(default)]
    pub precipitation: Option<f64>,
    pub weather_code: i32,
    #[serde(rename = "surface_pressure")]
    pub pressure: f64,
    #[serde(rename = "wind_speed_10m")]
    pub wind_speed: f64,
    #[serde(rename = "wind_direction_10m")]
    pub wind_direction: u16,
    pub is_day: u8,
}

/// Daily aggregates from `OpenMeteo`, one array slot per day
#[derive(Debug, Clone, Deserialize)]
pub struct DailyData {
    pub time: Vec<String>,
    pub weather_code: Vec<Option<i32>>,
    #[serde(rename = "temperature_2m_max")]
    pub temperature_max: Vec<Option<f64>>,
    #[serde(rename = "temperature_2m_min")]
    pub temperature_min: Vec<Option<f64>>,
    #[serde(rename = "precipitation_sum")]
    pub precipitation: Vec<Option<f64>>,
    #[serde(rename = "wind_speed_10m_max")]
    pub wind_speed_max: Vec<Option<f64>>,
}

/// Forecast client for the Open-Meteo `/v1/forecast` endpoint
#[derive(Debug, Clone)]
pub struct OpenMeteoForecastClient {
    client: Client,
    base_url: String,
}

impl OpenMeteoForecastClient {
    pub fn new(config: &ProviderConfig) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(config.forecast_timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self::with_client(client, &config.forecast_url))
    }

    #[must_use]
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    fn forecast_url(&self, coordinates: Coordinates) -> String {
        format!(
            "{}?latitude={}&longitude={}&current={}&daily={}&timezone=auto&forecast_days={}",
            self.base_url,
            coordinates.lat(),
            coordinates.lon(),
            CURRENT_FIELDS,
            DAILY_FIELDS,
            FORECAST_DAYS
        )
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoForecastClient {
    #[instrument(skip(self), fields(lat = coordinates.lat(), lon = coordinates.lon()))]
    async fn fetch_forecast(&self, coordinates: Coordinates) -> Result<ForecastResponse> {
        let start_time = Instant::now();
        let url = self.forecast_url(coordinates);
        debug!("OpenMeteo API request URL: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Forecast request failed: {}", e);
            SkycastError::transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Forecast API returned status {}", status);
            return Err(SkycastError::upstream(format!(
                "Forecast API request failed with status: {status}"
            )));
        }

        let forecast: ForecastResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse forecast response: {}", e);
            SkycastError::upstream(format!("Invalid forecast data received: {e}"))
        })?;

        info!(
            "Retrieved forecast with {} daily entries in {:.3}s",
            forecast.daily.time.len(),
            start_time.elapsed().as_secs_f64()
        );
        Ok(forecast)
    }
}
