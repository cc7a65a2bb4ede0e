use thiserror::Error;

/// Geocoding and forecast lookup errors
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("No geocoding results for {0:?}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Location source errors
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Location service unsupported")]
    Unsupported,
}
