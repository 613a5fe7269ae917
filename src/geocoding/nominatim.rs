//! Nominatim (OpenStreetMap) address search and reverse geocoding.
//! Free, no API key required, but a descriptive User-Agent is mandatory.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use super::{GeocodingProvider, ReverseGeocoder};
use crate::config::ProviderConfig;
use crate::location_parser::LocationParser;
use crate::models::{Coordinates, LocationInfo};

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    address: Option<NominatimAddress>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    /// Nominatim encodes coordinates as strings
    lat: String,
    lon: String,
    address: Option<NominatimAddress>,
}

#[derive(Debug, Default, Deserialize)]
struct NominatimAddress {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    county: Option<String>,
    state: Option<String>,
    country: Option<String>,
}

impl NominatimAddress {
    /// Prefer city > town > village for the place name
    fn locality(&self) -> Option<&str> {
        self.city
            .as_deref()
            .or(self.town.as_deref())
            .or(self.village.as_deref())
    }
}

/// Client for the Nominatim `/search` and `/reverse` endpoints.
///
/// As a [`GeocodingProvider`] it only answers postal-code-like queries;
/// anything else is left to the other providers.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: Client,
    base_url: String,
}

impl NominatimClient {
    pub fn new(config: &ProviderConfig) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(config.geocoding_timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self::with_client(client, &config.nominatim_url))
    }

    #[must_use]
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Option<T> {
        let response = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("Nominatim request failed: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!("Nominatim returned status {}", response.status());
            return None;
        }

        match response.json().await {
            Ok(body) => Some(body),
            Err(e) => {
                debug!("Nominatim parse error: {}", e);
                None
            }
        }
    }

    /// Look up a postal code, optionally qualified by a country token
    #[instrument(skip(self), fields(provider = "nominatim"))]
    pub async fn search_postal_code(&self, input: &str) -> Option<LocationInfo> {
        let postal = LocationParser::postal_query(input)?;
        let url = format!(
            "{}/search?q={}&format=json&limit=1&addressdetails=1",
            self.base_url,
            urlencoding::encode(&postal.query())
        );

        let results: Vec<SearchResult> = self.get_json(&url).await?;
        let Some(result) = results.into_iter().next() else {
            debug!("No Nominatim results for '{}'", postal.query());
            return None;
        };

        let (Ok(lat), Ok(lon)) = (result.lat.parse::<f64>(), result.lon.parse::<f64>()) else {
            warn!("Nominatim returned non-numeric coordinates: {}, {}", result.lat, result.lon);
            return None;
        };
        let coordinates = Coordinates::new(lat, lon)?;

        let address = result.address.unwrap_or_default();
        let name = address.locality().unwrap_or(postal.code.as_str()).to_string();
        let country = address.country.or(postal.country).unwrap_or_default();
        let region = address.state.unwrap_or_default();

        info!("Postal code '{}' resolved to {}", postal.code, name);
        Some(LocationInfo::new(coordinates, name, country, region))
    }
}

#[async_trait]
impl GeocodingProvider for NominatimClient {
    fn name(&self) -> &'static str {
        "nominatim"
    }

    async fn resolve(&self, query: &str) -> Option<LocationInfo> {
        if !LocationParser::is_postal_code(query) {
            debug!("'{}' does not look like a postal code, skipping Nominatim", query);
            return None;
        }
        self.search_postal_code(query).await
    }
}

#[async_trait]
impl ReverseGeocoder for NominatimClient {
    /// Reverse geocode coordinates to a place name. `None` when the lookup
    /// fails or the address has no city, town, village or county.
    #[instrument(skip(self), fields(provider = "nominatim"))]
    async fn reverse(&self, coordinates: Coordinates) -> Option<LocationInfo> {
        let url = format!(
            "{}/reverse?lat={}&lon={}&format=json&addressdetails=1",
            self.base_url,
            coordinates.lat(),
            coordinates.lon()
        );

        let body: ReverseResponse = self.get_json(&url).await?;
        let address = body.address?;

        let name = address
            .locality()
            .or(address.county.as_deref())?
            .to_string();

        info!("Reverse geocoded to: {}", name);
        Some(LocationInfo::new(
            coordinates,
            name,
            address.country.unwrap_or_default(),
            address.state.unwrap_or_default(),
        ))
    }
}
