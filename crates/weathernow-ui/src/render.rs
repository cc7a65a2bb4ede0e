//! Projection of fetched weather and history onto display-ready text.
//!
//! Pure functions: the same inputs always give the same view.

use weathernow_store::RecencyList;
use weathernow_weather::units::format_temperature;
use weathernow_weather::{classify, TemperatureUnit, Theme, WeatherSnapshot};

pub const FORECAST_CARDS: usize = 5;
pub const NO_RECENT: &str = "No recent cities";

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherView {
    pub location: String,
    pub theme: Theme,
    pub description: &'static str,
    pub icon: &'static str,
    pub temperature: String,
    pub wind: String,
    pub precipitation: String,
    pub min_max: String,
    pub local_time: String,
    pub forecast: Vec<ForecastCard>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastCard {
    pub weekday: String,
    pub icon: &'static str,
    pub description: &'static str,
    pub high_low: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecentView {
    pub entries: Vec<String>,
}

impl RecentView {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Daily highs and lows are shown as the provider sent them, in Celsius
fn degrees(temp_c: f64) -> String {
    format!("{}°", temp_c)
}

pub fn render_weather(
    snapshot: &WeatherSnapshot,
    place_name: &str,
    unit: TemperatureUnit,
) -> WeatherView {
    let current = classify(snapshot.current_weather_code);

    let (precipitation, min_max) = match snapshot.today() {
        Some(today) => (
            format!("{}%", today.precipitation_sum),
            format!(
                "{} / {}",
                degrees(today.min_temp_c),
                degrees(today.max_temp_c)
            ),
        ),
        None => ("—".to_string(), "—".to_string()),
    };

    let forecast = snapshot
        .daily
        .iter()
        .take(FORECAST_CARDS)
        .map(|day| {
            let p = classify(day.weather_code);
            ForecastCard {
                weekday: day.date.format("%a").to_string(),
                icon: p.icon,
                description: p.description,
                high_low: format!(
                    "{}/{}",
                    degrees(day.max_temp_c),
                    degrees(day.min_temp_c)
                ),
            }
        })
        .collect();

    WeatherView {
        location: place_name.to_string(),
        theme: current.theme,
        description: current.description,
        icon: current.icon,
        temperature: format_temperature(snapshot.current_temperature_c, unit),
        wind: format!("Wind: {} km/h", snapshot.wind_speed),
        precipitation,
        min_max,
        local_time: snapshot.observation_time.format("%H:%M").to_string(),
        forecast,
    }
}

pub fn render_recent(recent: &RecencyList) -> RecentView {
    RecentView {
        entries: recent.iter().map(|p| p.name.clone()).collect(),
    }
}
