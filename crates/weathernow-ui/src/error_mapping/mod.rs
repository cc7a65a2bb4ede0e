//! Maps library errors to weathernow_core::AppError for consistent user-facing messages.
//! Each source crate has its own module to keep mappings small and readable.

mod location;
mod storage;
mod weather;

use weathernow_core::AppError;

/// Conversion into the top-level error type. A trait rather than `From`
/// because neither side of the conversion is defined in this crate.
pub trait IntoAppError {
    fn into_app_error(self) -> AppError;
}
