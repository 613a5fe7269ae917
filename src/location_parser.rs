//! Location input parsing utilities
//!
//! Pure heuristics over the raw user input: literal coordinate pairs and
//! postal-code detection. Nothing here performs I/O.

use crate::models::Coordinates;

/// Location parsing utilities
pub struct LocationParser;

impl LocationParser {
    /// Parse coordinates from a string like "40.7128,-74.0060" or "40.7128, -74.0060".
    ///
    /// Returns `None` unless the input splits into exactly two numeric tokens
    /// that lie within the latitude/longitude ranges.
    #[must_use]
    pub fn parse_coordinates(input: &str) -> Option<Coordinates> {
        let compact: String = input.chars().filter(|c| *c != ' ').collect();
        let parts: Vec<&str> = compact.split(',').collect();

        let [lat, lon] = parts.as_slice() else {
            return None;
        };

        let lat = lat.parse::<f64>().ok()?;
        let lon = lon.parse::<f64>().ok()?;

        Coordinates::new(lat, lon)
    }

    /// Check if input looks like a postal code: the first token is all digits
    /// or carries a digit within its first three characters.
    #[must_use]
    pub fn is_postal_code(input: &str) -> bool {
        let Some(first) = Self::tokens(input).next() else {
            return false;
        };

        first.chars().all(|c| c.is_ascii_digit())
            || first.chars().take(3).any(|c| c.is_ascii_digit())
    }

    /// Build the free-text address query for a postal code input:
    /// "<code>, <country>" when a second token is present, else "<code>".
    /// Returns the code alongside the optional country token.
    #[must_use]
    pub fn postal_query(input: &str) -> Option<PostalQuery> {
        let mut tokens = Self::tokens(input);
        let code = tokens.next()?.to_string();
        let country = tokens.next().map(str::to_string);
        Some(PostalQuery { code, country })
    }

    fn tokens(input: &str) -> impl Iterator<Item = &str> {
        input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
    }
}

/// A postal code with an optional country hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalQuery {
    pub code: String,
    pub country: Option<String>,
}

impl PostalQuery {
    /// Free-text query sent to the address search provider
    #[must_use]
    pub fn query(&self) -> String {
        match &self.country {
            Some(country) => format!("{}, {}", self.code, country),
            None => self.code.clone(),
        }
    }
}
