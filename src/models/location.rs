//! Location model for geographic coordinates and metadata

use serde::Serialize;

/// A latitude/longitude pair that is known to lie within the valid ranges
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    lat: f64,
    /// Longitude in decimal degrees
    lon: f64,
}

impl Coordinates {
    /// Create validated coordinates, `None` when out of range or not finite
    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Option<Self> {
        if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon) {
            Some(Self { lat, lon })
        } else {
            None
        }
    }

    #[must_use]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    #[must_use]
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Format as "lat, lon" with four decimals
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.lat, self.lon)
    }
}

/// A resolved location, produced by coordinate parsing or geocoding
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct LocationInfo {
    coordinates: Coordinates,
    display_name: String,
    country: String,
    admin_region: String,
}

impl LocationInfo {
    #[must_use]
    pub fn new(
        coordinates: Coordinates,
        display_name: impl Into<String>,
        country: impl Into<String>,
        admin_region: impl Into<String>,
    ) -> Self {
        Self {
            coordinates,
            display_name: display_name.into(),
            country: country.into(),
            admin_region: admin_region.into(),
        }
    }

    /// Location named after its own coordinates, used when no place name is known
    #[must_use]
    pub fn from_coordinates(coordinates: Coordinates) -> Self {
        Self::new(coordinates, coordinates.format_coordinates(), "", "")
    }

    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.coordinates.lat
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.coordinates.lon
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    #[must_use]
    pub fn admin_region(&self) -> &str {
        &self.admin_region
    }

    /// Label shown to the user: "name, country" without dangling separators
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}, {}", self.display_name, self.country)
            .trim_matches(|c| c == ',' || c == ' ')
            .to_string()
    }
}
