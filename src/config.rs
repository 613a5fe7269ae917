//! Configuration management for `skycast`
//!
//! Handles loading configuration from files and environment variables
//! and provides validation for all configuration settings.

use crate::SkycastError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure for `skycast`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkycastConfig {
    /// External provider endpoints and timeouts
    #[serde(default)]
    pub providers: ProviderConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Endpoints of the three external HTTP APIs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Open-Meteo geocoding search endpoint
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: String,
    /// Nominatim base URL (`/search` and `/reverse` are appended)
    #[serde(default = "default_nominatim_url")]
    pub nominatim_url: String,
    /// Open-Meteo forecast endpoint
    #[serde(default = "default_forecast_url")]
    pub forecast_url: String,
    /// User-Agent sent with every request (Nominatim rejects anonymous clients)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Timeout for geocoding and reverse geocoding calls
    #[serde(default = "default_geocoding_timeout")]
    pub geocoding_timeout_seconds: u32,
    /// Timeout for the forecast call
    #[serde(default = "default_forecast_timeout")]
    pub forecast_timeout_seconds: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_geocoding_url() -> String {
    "https://geocoding-api.open-meteo.com/v1/search".to_string()
}

fn default_nominatim_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_forecast_url() -> String {
    "https://api.open-meteo.com/v1/forecast".to_string()
}

fn default_user_agent() -> String {
    concat!("skycast/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_geocoding_timeout() -> u32 {
    10
}

fn default_forecast_timeout() -> u32 {
    15
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            geocoding_url: default_geocoding_url(),
            nominatim_url: default_nominatim_url(),
            forecast_url: default_forecast_url(),
            user_agent: default_user_agent(),
            geocoding_timeout_seconds: default_geocoding_timeout(),
            forecast_timeout_seconds: default_forecast_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl ProviderConfig {
    #[must_use]
    pub fn geocoding_timeout(&self) -> Duration {
        Duration::from_secs(self.geocoding_timeout_seconds.into())
    }

    #[must_use]
    pub fn forecast_timeout(&self) -> Duration {
        Duration::from_secs(self.forecast_timeout_seconds.into())
    }
}

impl SkycastConfig {
    /// Load configuration from the default file location and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("skycast.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // SKYCAST_PROVIDERS__FORECAST_URL, SKYCAST_LOGGING__LEVEL, ...
        builder = builder.add_source(
            Environment::with_prefix("SKYCAST")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: SkycastConfig = settings
            .try_deserialize()
            .with_context(|| format!("Failed to deserialize configuration from {}", config_file.display()))?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("skycast").join("config.toml"))
    }

    /// Apply default values to blank configuration fields
    pub fn apply_defaults(&mut self) {
        let providers = &mut self.providers;
        if providers.geocoding_url.is_empty() {
            providers.geocoding_url = default_geocoding_url();
        }
        if providers.nominatim_url.is_empty() {
            providers.nominatim_url = default_nominatim_url();
        }
        if providers.forecast_url.is_empty() {
            providers.forecast_url = default_forecast_url();
        }
        if providers.user_agent.is_empty() {
            providers.user_agent = default_user_agent();
        }
        if providers.geocoding_timeout_seconds == 0 {
            providers.geocoding_timeout_seconds = default_geocoding_timeout();
        }
        if providers.forecast_timeout_seconds == 0 {
            providers.forecast_timeout_seconds = default_forecast_timeout();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_urls()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_urls(&self) -> Result<()> {
        let urls = [
            ("geocoding_url", &self.providers.geocoding_url),
            ("nominatim_url", &self.providers.nominatim_url),
            ("forecast_url", &self.providers.forecast_url),
        ];

        for (name, url) in urls {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(SkycastError::config(format!(
                    "Provider {name} must be a valid HTTP or HTTPS URL, got '{url}'"
                ))
                .into());
            }
        }

        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.providers.geocoding_timeout_seconds > 120 {
            return Err(
                SkycastError::config("Geocoding timeout cannot exceed 120 seconds").into(),
            );
        }

        if self.providers.forecast_timeout_seconds > 120 {
            return Err(
                SkycastError::config("Forecast timeout cannot exceed 120 seconds").into(),
            );
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(SkycastError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(SkycastError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = SkycastConfig::default();
        assert_eq!(
            config.providers.geocoding_url,
            "https://geocoding-api.open-meteo.com/v1/search"
        );
        assert_eq!(config.providers.geocoding_timeout(), Duration::from_secs(10));
        assert_eq!(config.providers.forecast_timeout(), Duration::from_secs(15));
        assert_eq!(config.logging.level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = SkycastConfig::default();
        config.logging.level = "loud".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_bad_url() {
        let mut config = SkycastConfig::default();
        config.providers.forecast_url = "ftp://example.com".to_string();
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("forecast_url"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = SkycastConfig::default();
        config.providers.forecast_timeout_seconds = 500;
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("cannot exceed"));
    }

    #[test]
    fn test_apply_defaults_fills_blanks() {
        let mut config = SkycastConfig::default();
        config.providers.nominatim_url.clear();
        config.providers.geocoding_timeout_seconds = 0;
        config.logging.format.clear();
        config.apply_defaults();
        assert_eq!(config.providers.nominatim_url, "https://nominatim.openstreetmap.org");
        assert_eq!(config.providers.geocoding_timeout_seconds, 10);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[providers]\nforecast_url = \"http://localhost:9999/v1/forecast\"\nforecast_timeout_seconds = 5\n\n[logging]\nlevel = \"debug\""
        )
        .unwrap();

        let config = SkycastConfig::load_from_path(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.providers.forecast_url, "http://localhost:9999/v1/forecast");
        assert_eq!(config.providers.forecast_timeout_seconds, 5);
        assert_eq!(config.providers.geocoding_timeout_seconds, 10);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = SkycastConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("skycast"));
            assert!(path.to_string_lossy().ends_with("config.toml"));
        }
    }
}
