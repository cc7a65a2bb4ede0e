//! Open-Meteo geocoding and forecast client. No API key required.

use chrono::{NaiveDate, NaiveDateTime};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

use crate::error::WeatherError;
use crate::types::{DailyForecast, Place, WeatherSnapshot};

pub const GEOCODE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
const DAILY_FIELDS: &str =
    "temperature_2m_max,temperature_2m_min,weathercode,windspeed_10m_max,precipitation_sum";
const FORECAST_DAYS: u32 = 5;
const USER_AGENT: &str = concat!("WeatherNow/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Option<Vec<GeocodeResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    name: String,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: CurrentWeatherBody,
    daily: DailyBody,
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherBody {
    temperature: f64,
    weathercode: i32,
    windspeed: f64,
    time: String,
}

#[derive(Debug, Deserialize)]
struct DailyBody {
    time: Vec<NaiveDate>,
    temperature_2m_max: Vec<Option<f64>>,
    temperature_2m_min: Vec<Option<f64>>,
    weathercode: Vec<Option<i32>>,
    #[serde(default)]
    windspeed_10m_max: Vec<Option<f64>>,
    #[serde(default)]
    precipitation_sum: Vec<Option<f64>>,
}

/// Client for the geocoding and forecast endpoints.
///
/// No retries: a failed call is returned to the caller as is.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Arc<Client>,
    geocode_url: String,
    forecast_url: String,
}

impl ForecastClient {
    /// Client for the public Open-Meteo endpoints with no request timeout
    pub fn new() -> Result<Self, WeatherError> {
        Self::with_endpoints(GEOCODE_URL, FORECAST_URL, None)
    }

    /// Client for custom endpoints. `timeout` of `None` leaves requests unbounded.
    pub fn with_endpoints(
        geocode_url: impl Into<String>,
        forecast_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, WeatherError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: Arc::new(builder.build()?),
            geocode_url: geocode_url.into(),
            forecast_url: forecast_url.into(),
        })
    }

    /// Resolve a city name to its first geocoding match.
    #[instrument(skip(self), level = "info")]
    pub async fn geocode(&self, city: &str) -> Result<Place, WeatherError> {
        let url = format!("{}?name={}", self.geocode_url, urlencoding::encode(city));
        let body: GeocodeResponse = self.get_json(&url).await?;

        let first = body
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::NotFound(city.to_string()))?;

        tracing::info!(
            "Geocoded {:?} to {} ({}, {})",
            city,
            first.name,
            first.latitude,
            first.longitude
        );
        Ok(Place::new(first.name, first.latitude, first.longitude))
    }

    /// Fetch current conditions and a 5-day daily forecast.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherSnapshot, WeatherError> {
        let url = format!(
            "{}?latitude={}&longitude={}&current_weather=true&daily={}&forecast_days={}&timezone=auto",
            self.forecast_url, latitude, longitude, DAILY_FIELDS, FORECAST_DAYS
        );
        let body: ForecastResponse = self.get_json(&url).await?;
        WeatherSnapshot::try_from(body)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, WeatherError> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| WeatherError::Parse(e.to_string()))
    }
}

impl TryFrom<ForecastResponse> for WeatherSnapshot {
    type Error = WeatherError;

    fn try_from(body: ForecastResponse) -> Result<Self, Self::Error> {
        let current = body.current_weather;
        let daily = body.daily;
        let days = daily.time.len();

        if daily.temperature_2m_max.len() != days
            || daily.temperature_2m_min.len() != days
            || daily.weathercode.len() != days
        {
            return Err(WeatherError::Parse(
                "daily arrays have mismatched lengths".to_string(),
            ));
        }

        let forecast = daily
            .time
            .iter()
            .enumerate()
            .map(|(i, date)| {
                let missing =
                    |field: &str| WeatherError::Parse(format!("daily.{} missing for {}", field, date));
                Ok(DailyForecast {
                    date: *date,
                    max_temp_c: daily.temperature_2m_max[i].ok_or_else(|| missing("temperature_2m_max"))?,
                    min_temp_c: daily.temperature_2m_min[i].ok_or_else(|| missing("temperature_2m_min"))?,
                    weather_code: daily.weathercode[i].ok_or_else(|| missing("weathercode"))?,
                    precipitation_sum: daily.precipitation_sum.get(i).copied().flatten().unwrap_or(0.0),
                    max_wind_speed: daily.windspeed_10m_max.get(i).copied().flatten(),
                })
            })
            .collect::<Result<Vec<_>, WeatherError>>()?;

        Ok(WeatherSnapshot {
            current_temperature_c: current.temperature,
            current_weather_code: current.weathercode,
            wind_speed: current.windspeed,
            observation_time: parse_local_time(&current.time)?,
            daily: forecast,
        })
    }
}

/// Open-Meteo reports local times without seconds (`2024-06-01T14:15`).
fn parse_local_time(s: &str) -> Result<NaiveDateTime, WeatherError> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|e| WeatherError::Parse(format!("invalid time {:?}: {}", s, e)))
}
