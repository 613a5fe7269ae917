//! Current weather conditions

use super::WeatherIcon;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Display;

/// Display-ready current conditions for a resolved location
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CurrentConditions {
    /// "name, country" label of the resolved location
    pub location: String,
    /// Temperature in Celsius
    pub temperature_c: f64,
    /// Apparent temperature in Celsius
    pub feels_like_c: f64,
    /// Human-readable description of weather conditions
    pub condition: String,
    pub icon: WeatherIcon,
    /// Relative humidity percentage (0-100)
    pub humidity_pct: u8,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Wind direction in degrees (0-360, where 0/360 is North)
    pub wind_direction: u16,
    /// Surface pressure in hPa
    pub pressure: f64,
    /// Precipitation amount in mm
    pub precipitation: f64,
    pub is_day: bool,
    /// When these conditions were fetched
    pub observed_at: DateTime<Utc>,
}

impl CurrentConditions {
    pub fn wind_direction_to_cardinal(degrees: u16) -> &'static str {
        match degrees {
            0..=11 | 349..=360 => "N",
            12..=33 => "NNE",
            34..=56 => "NE",
            57..=78 => "ENE",
            79..=101 => "E",
            102..=123 => "ESE",
            124..=146 => "SE",
            147..=168 => "SSE",
            169..=191 => "S",
            192..=213 => "SSW",
            214..=236 => "SW",
            237..=258 => "WSW",
            259..=281 => "W",
            282..=303 => "WNW",
            304..=326 => "NW",
            327..=348 => "NNW",
            _ => "Unknown",
        }
    }

    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!(
            "{:.1}°C (feels like {:.1}°C)",
            self.temperature_c, self.feels_like_c
        )
    }

    /// Format wind information
    #[must_use]
    pub fn format_wind(&self) -> String {
        let direction = Self::wind_direction_to_cardinal(self.wind_direction);
        format!("{:.1} km/h {}", self.wind_speed, direction)
    }

    /// Format atmospheric pressure with unit
    #[must_use]
    pub fn format_pressure(&self) -> String {
        format!("{:.1} hPa", self.pressure)
    }
}

impl Display for CurrentConditions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} {}", self.icon.glyph(), self.location)?;
        writeln!(f, "   {}", self.condition)?;
        writeln!(f, "   🌡️ {}", self.format_temperature())?;
        writeln!(f, "   💧 Humidity: {}%", self.humidity_pct)?;
        writeln!(f, "   💨 Wind: {}", self.format_wind())?;
        writeln!(f, "   📈 Pressure: {}", self.format_pressure())?;
        writeln!(f, "   ☔ Precipitation: {:.1} mm", self.precipitation)?;
        write!(
            f,
            "   🕒 Updated: {}",
            self.observed_at.format("%Y-%m-%d %H:%M:%S UTC")
        )
    }
}
