//! WMO weather code lookups
//!
//! Two independent tables keyed by the WMO code reported by Open-Meteo:
//! a description table with one entry per documented code, and an icon
//! table keyed by code ranges.
//! See: https://open-meteo.com/en/docs#weathervariables

use serde::{Serialize, Serializer};

/// Convert a WMO weather code to a human-readable description
#[must_use]
pub fn weather_code_to_description(code: i32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snow",
        73 => "Moderate snow",
        75 => "Heavy snow",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => "Unknown",
    }
}

/// Icon bucket for a weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeatherIcon {
    #[default]
    Sun,
    Fog,
    LightRain,
    Rain,
    Snow,
    Storm,
}

impl WeatherIcon {
    /// Map a WMO code range to its icon bucket. Codes outside the known
    /// ranges (snow showers included) fall back to the clear-sky icon.
    #[must_use]
    pub fn from_wmo_code(code: i32) -> Self {
        match code {
            0..=3 => Self::Sun,
            45..=48 => Self::Fog,
            51..=57 => Self::LightRain,
            61..=67 => Self::Rain,
            71..=77 => Self::Snow,
            80..=82 => Self::LightRain,
            95..=99 => Self::Storm,
            _ => Self::Sun,
        }
    }

    /// Emoji glyph used for display
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Sun => "☀️",
            Self::Fog => "🌫️",
            Self::LightRain => "🌦️",
            Self::Rain => "🌧️",
            Self::Snow => "❄️",
            Self::Storm => "⛈️",
        }
    }
}

impl Serialize for WeatherIcon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.glyph())
    }
}
