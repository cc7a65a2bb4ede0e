//! Weather lookups for WeatherNow
//!
//! Geocoding and 5-day forecasts via the Open-Meteo API, plus the pure
//! pieces layered on top: weather code presentation, unit conversion and
//! threshold alerts.

pub mod alert;
pub mod client;
pub mod condition;
pub mod error;
pub mod location;
pub mod types;
pub mod units;

pub use alert::{evaluate, AlertTrigger};
pub use client::ForecastClient;
pub use condition::{classify, Presentation, Theme};
pub use error::{LocationError, WeatherError};
pub use location::{ConfiguredLocation, LocationSource};
pub use types::*;
