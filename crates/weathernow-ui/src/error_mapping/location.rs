use weathernow_core::{AppError, LocationError};
use weathernow_weather::LocationError as SourceError;

use super::IntoAppError;

impl IntoAppError for SourceError {
    fn into_app_error(self) -> AppError {
        match self {
            SourceError::PermissionDenied => AppError::Location(LocationError::Denied),
            SourceError::Unsupported => AppError::Location(LocationError::Unsupported),
        }
    }
}
