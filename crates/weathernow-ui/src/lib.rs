//! Interactive front end for WeatherNow.
//!
//! User actions and network completions flow through [`update`], which
//! returns the new [`AppState`] plus the side effects to run. The
//! [`WeatherService`] runs those effects: persistence, network calls (whose
//! results come back as actions) and drawing on a [`Surface`].

pub mod action;
pub mod controller;
pub mod error_mapping;
pub mod notify;
pub mod render;
pub mod services;
pub mod state;
pub mod surface;
pub mod update;

pub use action::{Action, Command};
pub use controller::Controller;
pub use notify::{Notice, Notifications, Severity};
pub use render::{render_recent, render_weather, ForecastCard, RecentView, WeatherView};
pub use services::weather_service::WeatherService;
pub use state::{AppState, Displayed, NoticeDurations, RequestId};
pub use surface::{Surface, TerminalSurface};
pub use update::update;
