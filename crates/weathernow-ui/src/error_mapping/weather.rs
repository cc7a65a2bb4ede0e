use weathernow_core::{AppError, NetworkError, ReqwestErrorExt, WeatherError};
use weathernow_weather::WeatherError as LookupError;

use super::IntoAppError;

impl IntoAppError for LookupError {
    fn into_app_error(self) -> AppError {
        match self {
            LookupError::NotFound(name) => AppError::Weather(WeatherError::CityNotFound(name)),
            LookupError::Network(e) => AppError::Network(e.into_network_error()),
            LookupError::Status { status, url } => AppError::Network(NetworkError::ServerError {
                status,
                message: url,
            }),
            LookupError::Parse(s) => AppError::Weather(WeatherError::InvalidResponse(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_keeps_city_message() {
        let err = LookupError::NotFound("Nowhereville".into()).into_app_error();
        assert_eq!(err.user_message(), "City not found");
    }

    #[test]
    fn status_maps_to_server_error() {
        let err = LookupError::Status {
            status: 502,
            url: "http://example.invalid".into(),
        }
        .into_app_error();
        assert!(matches!(
            err,
            AppError::Network(NetworkError::ServerError { status: 502, .. })
        ));
    }

    #[test]
    fn parse_maps_to_invalid_response() {
        let err = LookupError::Parse("expected value".into()).into_app_error();
        assert!(matches!(err, AppError::Weather(WeatherError::InvalidResponse(_))));
    }
}
