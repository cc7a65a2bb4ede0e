//! Centralized error types for WeatherNow.
//!
//! This module provides a typed error hierarchy that:
//! - Enables precise error handling throughout the codebase
//! - Provides the short messages shown as notifications
//! - Preserves full error context for logging

use thiserror::Error;

/// Top-level application error type.
///
/// Every failure that reaches the user is converted to this type first.
/// Use `user_message()` to get the notification text.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("Location error: {0}")]
    Location(#[from] LocationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Invalid input: {0}")]
    Input(#[from] InputError),
}

impl AppError {
    /// Returns the message shown to the user in a notification.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Network(e) => e.user_message(),
            AppError::Weather(e) => e.user_message(),
            AppError::Location(e) => e.user_message(),
            AppError::Storage(e) => e.user_message(),
            AppError::Input(e) => e.user_message(),
        }
    }

    /// Input problems are the user's to fix and surface as warnings;
    /// everything else is an error.
    pub fn is_warning(&self) -> bool {
        matches!(self, AppError::Input(_))
    }
}

/// Network-related errors (HTTP, connectivity).
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },
}

impl NetworkError {
    pub fn user_message(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed(_) => {
                "Unable to connect. Check your internet connection."
            }
            NetworkError::Timeout => "The request timed out. Please try again.",
            NetworkError::ServerError { status, .. } if *status >= 500 => {
                "The weather service is having issues. Please try again later."
            }
            NetworkError::ServerError { .. } => "The weather request failed. Please try again.",
        }
    }
}

/// Weather and geocoding lookup errors.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("City not found: {0}")]
    CityNotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl WeatherError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::CityNotFound(_) => "City not found",
            WeatherError::InvalidResponse(_) => {
                "Received an unexpected response. Please try again."
            }
        }
    }
}

/// Device location errors.
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    Denied,

    #[error("Location not supported")]
    Unsupported,
}

impl LocationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            LocationError::Denied => "Location denied",
            LocationError::Unsupported => "Not supported",
        }
    }
}

/// Local storage errors (preferences, history).
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage unavailable for {key}: {message}")]
    Unavailable { key: String, message: String },

    #[error("Failed to encode {key}: {message}")]
    Encoding { key: String, message: String },
}

impl StorageError {
    pub fn user_message(&self) -> &'static str {
        match self {
            StorageError::Unavailable { .. } => {
                "Unable to access saved settings. Check disk space and permissions."
            }
            StorageError::Encoding { .. } => "Unable to save settings. Please try again.",
        }
    }
}

/// Rejected user input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("City name is empty")]
    EmptyCity,

    #[error("Alert threshold is not a number: {0:?}")]
    InvalidAlertThreshold(String),
}

impl InputError {
    pub fn user_message(&self) -> &'static str {
        match self {
            InputError::EmptyCity => "Enter city name",
            InputError::InvalidAlertThreshold(_) => "Enter alert temp",
        }
    }
}

/// Extension trait for converting reqwest errors to our error types.
pub trait ReqwestErrorExt {
    fn into_network_error(self) -> NetworkError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_network_error(self) -> NetworkError {
        if self.is_timeout() {
            NetworkError::Timeout
        } else if self.is_connect() {
            NetworkError::ConnectionFailed(self.to_string())
        } else if let Some(status) = self.status() {
            NetworkError::ServerError {
                status: status.as_u16(),
                message: self.to_string(),
            }
        } else {
            NetworkError::ConnectionFailed(self.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_conversion() {
        let app_err: AppError = LocationError::Denied.into();
        assert!(matches!(app_err, AppError::Location(LocationError::Denied)));
    }

    #[test]
    fn test_user_message_propagation() {
        let app_err = AppError::Weather(WeatherError::CityNotFound("Nowhereville".into()));
        assert_eq!(app_err.user_message(), "City not found");

        let app_err = AppError::Location(LocationError::Unsupported);
        assert_eq!(app_err.user_message(), "Not supported");
    }

    #[test]
    fn test_input_errors_are_warnings() {
        assert!(AppError::Input(InputError::EmptyCity).is_warning());
        assert_eq!(
            AppError::Input(InputError::InvalidAlertThreshold("abc".into())).user_message(),
            "Enter alert temp"
        );
        assert!(!AppError::Network(NetworkError::Timeout).is_warning());
    }

    #[test]
    fn test_server_error_messages_split_on_5xx() {
        let upstream = NetworkError::ServerError {
            status: 503,
            message: "unavailable".into(),
        };
        let client = NetworkError::ServerError {
            status: 400,
            message: "bad request".into(),
        };
        assert_ne!(upstream.user_message(), client.user_message());
        assert!(upstream.user_message().contains("later"));
    }
}
