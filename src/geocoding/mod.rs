//! Geocoding providers
//!
//! Every provider degrades to `None` on transport errors, non-success
//! statuses, unparsable bodies and empty result sets so that the resolver
//! can move on to the next provider in its chain.

use async_trait::async_trait;

use crate::models::{Coordinates, LocationInfo};

pub mod nominatim;
pub mod open_meteo;

pub use nominatim::NominatimClient;
pub use open_meteo::OpenMeteoGeocoder;

/// Forward geocoding: free text to a location
#[async_trait]
pub trait GeocodingProvider: Send + Sync {
    /// Short provider name used in logs
    fn name(&self) -> &'static str;

    async fn resolve(&self, query: &str) -> Option<LocationInfo>;
}

/// Reverse geocoding: coordinates to a named location
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    async fn reverse(&self, coordinates: Coordinates) -> Option<LocationInfo>;
}
