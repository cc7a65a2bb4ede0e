//! Command handlers: `(state, action) -> (state, commands)`.
//!
//! Nothing in here touches storage, the network or the screen. Those are
//! expressed as [`Command`]s for the service to run.

use weathernow_core::{AppError, InputError};
use weathernow_weather::{alert, AlertSpec, Place};

use crate::action::{Action, Command};
use crate::notify::Severity;
use crate::render::{render_recent, render_weather};
use crate::state::{AppState, Displayed, RequestId};

pub const LOCATION_LABEL: &str = "Your Location";

pub fn update(mut state: AppState, action: Action) -> (AppState, Vec<Command>) {
    let mut commands = Vec::new();

    match action {
        Action::Start => {
            commands.push(Command::RenderUnitLabel(state.unit.label()));
            commands.push(Command::RenderRecent(render_recent(&state.recent)));
            commands.push(Command::RenderAlertInfo(state.alert.as_ref().map(alert_info)));
            if let Some(place) = state.recent.first().cloned() {
                begin_fetch(&mut state, &mut commands, place);
            }
        }

        Action::Search(text) => {
            let query = text.trim();
            if query.is_empty() {
                report(&state, &mut commands, &InputError::EmptyCity.into());
            } else {
                let request = state.issue_request();
                commands.push(Command::Geocode {
                    request,
                    query: query.to_string(),
                });
            }
        }

        Action::UseLocation => {
            let request = state.issue_request();
            commands.push(Command::Locate { request });
        }

        Action::ToggleUnit => {
            state.unit = state.unit.toggled();
            commands.push(Command::PersistUnit(state.unit));
            commands.push(Command::RenderUnitLabel(state.unit.label()));

            // Redrawn from the held snapshot. Alerts compare in their own
            // unit, so the display unit never changes whether one fires.
            if let Some(shown) = &state.displayed {
                commands.push(Command::RenderWeather(render_weather(
                    &shown.snapshot,
                    &shown.place_name,
                    state.unit,
                )));
            } else if let Some(place) = state.recent.first().cloned() {
                begin_fetch(&mut state, &mut commands, place);
            }
        }

        Action::SetAlert { threshold, unit } => match parse_threshold(&threshold) {
            Some(value) => {
                let spec = AlertSpec {
                    threshold: value,
                    unit,
                };
                state.alert = Some(spec);
                commands.push(Command::PersistAlert(spec));
                commands.push(Command::RenderAlertInfo(Some(alert_info(&spec))));
                notice(&state, &mut commands, "Alert saved", Severity::Info);
            }
            None => {
                report(
                    &state,
                    &mut commands,
                    &InputError::InvalidAlertThreshold(threshold).into(),
                );
            }
        },

        Action::ClearAlert => {
            state.alert = None;
            commands.push(Command::RemoveAlert);
            commands.push(Command::RenderAlertInfo(None));
            notice(&state, &mut commands, "Alert cleared", Severity::Info);
        }

        Action::ClearHistory => {
            state.recent.clear();
            commands.push(Command::ClearRecent);
            commands.push(Command::RenderRecent(render_recent(&state.recent)));
            notice(&state, &mut commands, "History cleared", Severity::Info);
        }

        Action::SelectRecent(index) => match state.recent.get(index).cloned() {
            Some(place) => begin_fetch(&mut state, &mut commands, place),
            None => tracing::debug!("No recent place at index {}", index),
        },

        Action::DismissNotice(id) => commands.push(Command::DismissNotice(id)),

        Action::Geocoded { request, result } => {
            if is_stale(&state, request) {
                return (state, commands);
            }
            match result {
                Ok(place) => {
                    state.recent.add(place.clone());
                    commands.push(Command::RecordRecent(place.clone()));
                    commands.push(Command::RenderRecent(render_recent(&state.recent)));
                    begin_fetch(&mut state, &mut commands, place);
                }
                Err(e) => report(&state, &mut commands, &e),
            }
        }

        Action::Located { request, result } => {
            if is_stale(&state, request) {
                return (state, commands);
            }
            match result {
                Ok(coordinates) => {
                    let place = Place::new(LOCATION_LABEL, coordinates.latitude, coordinates.longitude);
                    begin_fetch(&mut state, &mut commands, place);
                }
                Err(e) => report(&state, &mut commands, &e),
            }
        }

        Action::ForecastLoaded {
            request,
            place_name,
            result,
        } => {
            if is_stale(&state, request) {
                return (state, commands);
            }
            match result {
                Ok(snapshot) => {
                    commands.push(Command::RenderWeather(render_weather(
                        &snapshot,
                        &place_name,
                        state.unit,
                    )));
                    if let Some(trigger) =
                        alert::evaluate(snapshot.current_temperature_c, state.alert.as_ref())
                    {
                        commands.push(Command::Notify {
                            message: trigger.message(),
                            severity: Severity::Warn,
                            duration: state.durations.alert,
                        });
                    }
                    state.displayed = Some(Displayed {
                        place_name,
                        snapshot,
                    });
                }
                Err(e) => report(&state, &mut commands, &e),
            }
        }
    }

    (state, commands)
}

/// Text for the alert indicator, e.g. `Alert set: 30°C`
pub fn alert_info(spec: &AlertSpec) -> String {
    format!("Alert set: {}°{}", spec.threshold, spec.unit.symbol())
}

fn parse_threshold(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn begin_fetch(state: &mut AppState, commands: &mut Vec<Command>, place: Place) {
    let coordinates = place.coordinates();
    let request = state.issue_request();
    commands.push(Command::Notify {
        message: "Fetching weather...".to_string(),
        severity: Severity::Info,
        duration: state.durations.fetching,
    });
    commands.push(Command::FetchForecast {
        request,
        place_name: place.name,
        coordinates,
    });
}

fn is_stale(state: &AppState, request: RequestId) -> bool {
    let stale = !state.is_current(request);
    if stale {
        tracing::debug!(
            "Discarding response for request {} (latest is {})",
            request,
            state.last_request()
        );
    }
    stale
}

fn notice(state: &AppState, commands: &mut Vec<Command>, message: &str, severity: Severity) {
    commands.push(Command::Notify {
        message: message.to_string(),
        severity,
        duration: state.durations.default,
    });
}

/// Surface an error. Prior display state is left untouched.
fn report(state: &AppState, commands: &mut Vec<Command>, error: &AppError) {
    tracing::debug!("Reporting error: {}", error);
    let severity = if error.is_warning() {
        Severity::Warn
    } else {
        Severity::Error
    };
    notice(state, commands, error.user_message(), severity);
}
