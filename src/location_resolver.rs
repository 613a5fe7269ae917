//! Location Resolution Module
//!
//! This module handles resolving location inputs (coordinates, names, postal codes)
//! into structured `LocationInfo` values ready for a weather lookup.

use tracing::debug;

use crate::geocoding::{GeocodingProvider, ReverseGeocoder};
use crate::location_parser::LocationParser;
use crate::models::{Coordinates, LocationInfo};

/// Service for resolving location inputs.
///
/// Literal coordinates are named through the reverse geocoder; everything
/// else goes through the provider chain in order until one answers.
pub struct LocationResolver {
    reverse: Box<dyn ReverseGeocoder>,
    providers: Vec<Box<dyn GeocodingProvider>>,
}

impl LocationResolver {
    #[must_use]
    pub fn new(
        reverse: Box<dyn ReverseGeocoder>,
        providers: Vec<Box<dyn GeocodingProvider>>,
    ) -> Self {
        Self { reverse, providers }
    }

    /// Resolve a trimmed, non-empty location input. `None` means no provider
    /// could resolve it.
    pub async fn resolve_location(&self, input: &str) -> Option<LocationInfo> {
        debug!("Resolving location input: {:?}", input);

        let location = match LocationParser::parse_coordinates(input) {
            Some(coordinates) => self.resolve_coordinates(coordinates).await,
            None => self.resolve_name(input).await?,
        };

        debug!(
            "Resolved location: {} at ({}, {})",
            location.display_name(),
            location.latitude(),
            location.longitude()
        );

        Some(location)
    }

    /// Name coordinates via reverse geocoding, falling back to the coordinates
    /// themselves. The parsed coordinates are kept either way.
    async fn resolve_coordinates(&self, coordinates: Coordinates) -> LocationInfo {
        debug!("Resolving coordinates: {}", coordinates.format_coordinates());

        match self.reverse.reverse(coordinates).await {
            Some(named) => LocationInfo::new(
                coordinates,
                named.display_name(),
                named.country(),
                named.admin_region(),
            ),
            None => {
                debug!("No reverse geocoding result, using coordinates as name");
                LocationInfo::from_coordinates(coordinates)
            }
        }
    }

    /// Try each geocoding provider in order, first answer wins
    async fn resolve_name(&self, name: &str) -> Option<LocationInfo> {
        for provider in &self.providers {
            debug!("Geocoding '{}' with {}", name, provider.name());
            if let Some(location) = provider.resolve(name).await {
                return Some(location);
            }
        }

        debug!("No provider could resolve '{}'", name);
        None
    }
}
