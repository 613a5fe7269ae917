//! Open-Meteo geocoding search (no API key required)

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

use super::GeocodingProvider;
use crate::config::ProviderConfig;
use crate::models::{Coordinates, LocationInfo};

/// Number of candidates requested; only the first one is used
const CANDIDATE_COUNT: u32 = 3;

/// Geocoding response from Open-Meteo
#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
    admin1: Option<String>,
}

impl GeocodingResult {
    fn into_location(self) -> Option<LocationInfo> {
        let coordinates = Coordinates::new(self.latitude, self.longitude)?;
        Some(LocationInfo::new(
            coordinates,
            self.name,
            self.country.unwrap_or_else(|| "Unknown".to_string()),
            self.admin1.unwrap_or_default(),
        ))
    }
}

/// Primary name-based geocoder
#[derive(Debug, Clone)]
pub struct OpenMeteoGeocoder {
    client: Client,
    base_url: String,
}

impl OpenMeteoGeocoder {
    pub fn new(config: &ProviderConfig) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(config.geocoding_timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self::with_client(client, &config.geocoding_url))
    }

    #[must_use]
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    async fn search(&self, name: &str) -> reqwest::Result<Option<GeocodingResponse>> {
        let url = format!(
            "{}?name={}&count={}&language=en&format=json",
            self.base_url,
            urlencoding::encode(name),
            CANDIDATE_COUNT
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            warn!("Open-Meteo geocoding returned status {}", response.status());
            return Ok(None);
        }

        response.json().await.map(Some)
    }
}

#[async_trait]
impl GeocodingProvider for OpenMeteoGeocoder {
    fn name(&self) -> &'static str {
        "open-meteo"
    }

    #[instrument(skip(self), fields(provider = "open-meteo"))]
    async fn resolve(&self, query: &str) -> Option<LocationInfo> {
        let start_time = Instant::now();

        let response = match self.search(query).await {
            Ok(Some(response)) => response,
            Ok(None) => return None,
            Err(e) => {
                warn!("Open-Meteo geocoding request failed: {}", e);
                return None;
            }
        };

        let Some(first) = response.results.unwrap_or_default().into_iter().next() else {
            debug!("No Open-Meteo results for '{}'", query);
            return None;
        };

        let location = first.into_location();
        match &location {
            Some(location) => info!(
                "Geocoded '{}' to {} ({:.4}, {:.4}) in {:.3}s",
                query,
                location.display_name(),
                location.latitude(),
                location.longitude(),
                start_time.elapsed().as_secs_f64()
            ),
            None => warn!("Open-Meteo returned out-of-range coordinates for '{}'", query),
        }
        location
    }
}
