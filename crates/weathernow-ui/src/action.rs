use std::time::Duration;

use weathernow_core::AppError;
use weathernow_weather::{AlertSpec, Coordinates, Place, TemperatureUnit, WeatherSnapshot};

use crate::notify::Severity;
use crate::render::{RecentView, WeatherView};
use crate::state::RequestId;

/// Everything that can change the application state: user input and the
/// completion of a network request.
#[derive(Debug)]
pub enum Action {
    /// Initial render plus a fetch for the most recent place
    Start,
    Search(String),
    UseLocation,
    ToggleUnit,
    SetAlert {
        threshold: String,
        unit: TemperatureUnit,
    },
    ClearAlert,
    ClearHistory,
    /// Zero-based index into the recency list
    SelectRecent(usize),
    DismissNotice(u64),

    Geocoded {
        request: RequestId,
        result: Result<Place, AppError>,
    },
    Located {
        request: RequestId,
        result: Result<Coordinates, AppError>,
    },
    ForecastLoaded {
        request: RequestId,
        place_name: String,
        result: Result<WeatherSnapshot, AppError>,
    },
}

/// Side effects requested by [`crate::update`]
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Geocode {
        request: RequestId,
        query: String,
    },
    Locate {
        request: RequestId,
    },
    FetchForecast {
        request: RequestId,
        place_name: String,
        coordinates: Coordinates,
    },

    PersistUnit(TemperatureUnit),
    PersistAlert(AlertSpec),
    RemoveAlert,
    RecordRecent(Place),
    ClearRecent,

    RenderWeather(WeatherView),
    RenderRecent(RecentView),
    RenderAlertInfo(Option<String>),
    RenderUnitLabel(&'static str),

    Notify {
        message: String,
        severity: Severity,
        duration: Duration,
    },
    DismissNotice(u64),
}
