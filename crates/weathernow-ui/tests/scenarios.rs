//! End-to-end flows through the command handlers, without network or screen.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};
use weathernow_core::{AppError, NetworkError, WeatherError};
use weathernow_ui::{update, Action, AppState, Command, Severity, WeatherView};
use weathernow_weather::{
    AlertSpec, DailyForecast, Place, TemperatureUnit, Theme, WeatherSnapshot,
};

fn snapshot(temp_c: f64, code: i32) -> WeatherSnapshot {
    let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    WeatherSnapshot {
        current_temperature_c: temp_c,
        current_weather_code: code,
        wind_speed: 9.4,
        observation_time: NaiveDateTime::parse_from_str("2024-06-01T14:00", "%Y-%m-%dT%H:%M")
            .unwrap(),
        daily: (0..5)
            .map(|i| DailyForecast {
                date: start + chrono::Days::new(i),
                min_temp_c: 11.0,
                max_temp_c: 21.0,
                weather_code: code,
                precipitation_sum: 0.0,
                max_wind_speed: Some(14.0),
            })
            .collect(),
    }
}

fn geocode_request(commands: &[Command]) -> u64 {
    commands
        .iter()
        .find_map(|c| match c {
            Command::Geocode { request, .. } => Some(*request),
            _ => None,
        })
        .expect("no geocode command")
}

fn fetch_request(commands: &[Command]) -> Option<(u64, String)> {
    commands.iter().find_map(|c| match c {
        Command::FetchForecast {
            request,
            place_name,
            ..
        } => Some((*request, place_name.clone())),
        _ => None,
    })
}

fn rendered(commands: &[Command]) -> Option<&WeatherView> {
    commands.iter().find_map(|c| match c {
        Command::RenderWeather(view) => Some(view),
        _ => None,
    })
}

fn notices(commands: &[Command]) -> Vec<(String, Severity, Duration)> {
    commands
        .iter()
        .filter_map(|c| match c {
            Command::Notify {
                message,
                severity,
                duration,
            } => Some((message.clone(), *severity, *duration)),
            _ => None,
        })
        .collect()
}

/// Search, geocode and load a forecast for `city`
fn show(state: AppState, city: &str, temp_c: f64, code: i32) -> (AppState, Vec<Command>) {
    let (state, commands) = update(state, Action::Search(city.into()));
    let request = geocode_request(&commands);

    let (state, commands) = update(
        state,
        Action::Geocoded {
            request,
            result: Ok(Place::new(city, 48.85, 2.35)),
        },
    );
    let (request, place_name) = fetch_request(&commands).expect("no forecast fetch");

    update(
        state,
        Action::ForecastLoaded {
            request,
            place_name,
            result: Ok(snapshot(temp_c, code)),
        },
    )
}

#[test]
fn paris_in_celsius_then_fahrenheit() {
    let (state, commands) = show(AppState::default(), "Paris", 18.0, 0);

    let view = rendered(&commands).expect("weather not rendered");
    assert_eq!(view.location, "Paris");
    assert_eq!(view.description, "Clear");
    assert_eq!(view.theme, Theme::Sunny);
    assert_eq!(view.temperature, "18°C");
    assert_eq!(state.recent.first().map(|p| p.name.as_str()), Some("Paris"));

    let (state, commands) = update(state, Action::ToggleUnit);
    let view = rendered(&commands).expect("toggle did not re-render");
    assert_eq!(view.temperature, "64.4°F");
    assert!(fetch_request(&commands).is_none(), "toggle should reuse the snapshot");
    assert_eq!(state.unit, TemperatureUnit::Fahrenheit);
}

#[test]
fn paris_with_fahrenheit_preference() {
    let mut state = AppState::default();
    state.unit = TemperatureUnit::Fahrenheit;
    let (_, commands) = show(state, "Paris", 18.0, 0);
    assert_eq!(rendered(&commands).unwrap().temperature, "64.4°F");
}

#[test]
fn unknown_city_notifies_and_skips_fetch() {
    let (state, commands) = update(AppState::default(), Action::Search("Nowhereville".into()));
    let request = geocode_request(&commands);

    let (state, commands) = update(
        state,
        Action::Geocoded {
            request,
            result: Err(WeatherError::CityNotFound("Nowhereville".into()).into()),
        },
    );

    assert!(fetch_request(&commands).is_none());
    assert!(!commands.iter().any(|c| matches!(c, Command::RecordRecent(_))));
    let notes = notices(&commands);
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].0, "City not found");
    assert_eq!(notes[0].1, Severity::Error);
    assert!(state.recent.is_empty());
}

#[test]
fn failed_fetch_keeps_previous_display() {
    let (state, _) = show(AppState::default(), "Paris", 18.0, 0);

    let (state, commands) = update(state, Action::Search("Rome".into()));
    let request = geocode_request(&commands);
    let (state, commands) = update(
        state,
        Action::Geocoded {
            request,
            result: Ok(Place::new("Rome", 41.89, 12.48)),
        },
    );
    let (request, place_name) = fetch_request(&commands).unwrap();

    let (state, commands) = update(
        state,
        Action::ForecastLoaded {
            request,
            place_name,
            result: Err(AppError::Network(NetworkError::Timeout)),
        },
    );

    assert!(rendered(&commands).is_none());
    assert_eq!(notices(&commands)[0].1, Severity::Error);
    assert_eq!(state.displayed.unwrap().place_name, "Paris");
}

#[test]
fn alert_fires_on_threshold_every_fetch() {
    let mut state = AppState::default();
    state.alert = Some(AlertSpec {
        threshold: 30.0,
        unit: TemperatureUnit::Celsius,
    });

    let (state, commands) = show(state, "Athens", 29.9, 0);
    assert!(!notices(&commands).iter().any(|(m, ..)| m.contains("exceeds")));

    let (state, commands) = show(state, "Athens", 30.0, 0);
    let alert = notices(&commands)
        .into_iter()
        .find(|(m, ..)| m.contains("exceeds"))
        .expect("alert did not fire");
    assert_eq!(alert.0, "🔥 30.0°C exceeds your alert!");
    assert_eq!(alert.1, Severity::Warn);
    assert_eq!(alert.2, Duration::from_millis(7000));

    // No suppression of repeats
    let (_, commands) = show(state, "Athens", 31.0, 0);
    assert!(notices(&commands).iter().any(|(m, ..)| m.contains("31.0°C")));
}

#[test]
fn every_fetch_announces_itself() {
    let (state, commands) = update(AppState::default(), Action::Search("Paris".into()));
    let request = geocode_request(&commands);
    let (_, commands) = update(
        state,
        Action::Geocoded {
            request,
            result: Ok(Place::new("Paris", 48.85, 2.35)),
        },
    );
    let notes = notices(&commands);
    assert_eq!(
        notes,
        [(
            "Fetching weather...".to_string(),
            Severity::Info,
            Duration::from_millis(2000)
        )]
    );
}

#[test]
fn clearing_history_empties_the_list() {
    let mut state = AppState::default();
    for name in ["A", "B", "C", "D", "E", "F"] {
        state.recent.add(Place::new(name, 0.0, 0.0));
    }

    let (state, commands) = update(state, Action::ClearHistory);
    assert!(state.recent.is_empty());
    assert!(commands.contains(&Command::ClearRecent));
    assert!(commands.contains(&Command::RenderRecent(Default::default())));
    assert_eq!(notices(&commands)[0].0, "History cleared");
}

#[test]
fn double_submit_only_latest_wins() {
    let (state, first) = update(AppState::default(), Action::Search("Paris".into()));
    let (state, second) = update(state, Action::Search("Rome".into()));
    let first = geocode_request(&first);
    let second = geocode_request(&second);

    // Responses arrive out of order
    let (state, commands) = update(
        state,
        Action::Geocoded {
            request: second,
            result: Ok(Place::new("Rome", 41.89, 12.48)),
        },
    );
    let (fetch, _) = fetch_request(&commands).unwrap();

    let (state, commands) = update(
        state,
        Action::Geocoded {
            request: first,
            result: Ok(Place::new("Paris", 48.85, 2.35)),
        },
    );
    assert!(commands.is_empty());

    let (state, commands) = update(
        state,
        Action::ForecastLoaded {
            request: fetch,
            place_name: "Rome".into(),
            result: Ok(snapshot(25.0, 1)),
        },
    );
    assert_eq!(rendered(&commands).unwrap().location, "Rome");
    assert_eq!(state.recent.len(), 1);
}
