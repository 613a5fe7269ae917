//! Error types and handling for `skycast`

use thiserror::Error;

/// Main error type for the `skycast` library
#[derive(Error, Debug)]
pub enum SkycastError {
    /// Empty or unusable location input, rejected by the caller layer
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// No geocoding provider could resolve the location
    #[error("Location not found: {query}")]
    NotFound { query: String },

    /// The forecast provider failed after a location was resolved
    #[error("Weather data unavailable: {message}")]
    UpstreamUnavailable { message: String },

    /// A single external call failed (network, status or body)
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl SkycastError {
    /// Create a new invalid input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a new not-found error for the given query
    pub fn not_found<S: Into<String>>(query: S) -> Self {
        Self::NotFound {
            query: query.into(),
        }
    }

    /// Create a new upstream error
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::UpstreamUnavailable {
            message: message.into(),
        }
    }

    /// Create a new transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SkycastError::InvalidInput { message } => message.clone(),
            SkycastError::NotFound { .. } => {
                "Location not found. Please check spelling or try a different format.".to_string()
            }
            SkycastError::UpstreamUnavailable { .. } | SkycastError::Transport { .. } => {
                "Could not fetch weather data. Please try again.".to_string()
            }
            SkycastError::Config { .. } => {
                "Configuration error. Please check your config file and environment.".to_string()
            }
            SkycastError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = SkycastError::not_found("Atlantis");
        assert!(matches!(err, SkycastError::NotFound { .. }));
        assert_eq!(err.to_string(), "Location not found: Atlantis");

        let err = SkycastError::upstream("HTTP 503");
        assert!(matches!(err, SkycastError::UpstreamUnavailable { .. }));

        let err = SkycastError::invalid_input("Please enter a location");
        assert!(matches!(err, SkycastError::InvalidInput { .. }));
    }

    #[test]
    fn test_user_messages() {
        assert!(
            SkycastError::not_found("x")
                .user_message()
                .starts_with("Location not found")
        );
        assert!(
            SkycastError::upstream("x")
                .user_message()
                .starts_with("Could not fetch weather data")
        );
        assert!(
            SkycastError::transport("timeout")
                .user_message()
                .starts_with("Could not fetch weather data")
        );
        assert_eq!(
            SkycastError::invalid_input("Please enter a location").user_message(),
            "Please enter a location"
        );
    }

    #[test]
    fn test_user_message_hides_details() {
        let err = SkycastError::upstream("connection reset by 10.0.0.1");
        assert!(!err.user_message().contains("10.0.0.1"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SkycastError = io_err.into();
        assert!(matches!(err, SkycastError::Io { .. }));
    }
}
