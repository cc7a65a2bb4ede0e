use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Temperature unit preference.
///
/// Stored as the single letter the unit label uses (`"C"` / `"F"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TemperatureUnit {
    #[default]
    #[serde(rename = "C")]
    Celsius,
    #[serde(rename = "F")]
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "C",
            Self::Fahrenheit => "F",
        }
    }

    /// Label for the unit toggle, e.g. `°C`
    pub fn label(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Celsius => Self::Fahrenheit,
            Self::Fahrenheit => Self::Celsius,
        }
    }

    /// Parse `C`/`F` (case-insensitive, optional leading `°`)
    pub fn from_symbol(s: &str) -> Option<Self> {
        let s = s.trim();
        let s = s.strip_prefix('°').unwrap_or(s);
        match s.to_ascii_uppercase().as_str() {
            "C" | "CELSIUS" => Some(Self::Celsius),
            "F" | "FAHRENHEIT" => Some(Self::Fahrenheit),
            _ => None,
        }
    }
}

/// Geographic position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A named place resolved by geocoding. Identity is the exact name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Place {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// A temperature threshold. At most one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlertSpec {
    #[serde(rename = "value")]
    pub threshold: f64,
    pub unit: TemperatureUnit,
}

/// One day of the forecast strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub min_temp_c: f64,
    pub max_temp_c: f64,
    pub weather_code: i32,
    pub precipitation_sum: f64,
    pub max_wind_speed: Option<f64>,
}

/// Current conditions plus the daily forecast, as of one fetch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub current_temperature_c: f64,
    pub current_weather_code: i32,
    pub wind_speed: f64,
    /// Local time at the place (the API resolves the timezone)
    pub observation_time: NaiveDateTime,
    pub daily: Vec<DailyForecast>,
}

impl WeatherSnapshot {
    pub fn today(&self) -> Option<&DailyForecast> {
        self.daily.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_serializes_as_letter() {
        assert_eq!(
            serde_json::to_string(&TemperatureUnit::Fahrenheit).unwrap(),
            "\"F\""
        );
        let unit: TemperatureUnit = serde_json::from_str("\"C\"").unwrap();
        assert_eq!(unit, TemperatureUnit::Celsius);
    }

    #[test]
    fn test_unit_toggle() {
        assert_eq!(TemperatureUnit::Celsius.toggled(), TemperatureUnit::Fahrenheit);
        assert_eq!(TemperatureUnit::Fahrenheit.toggled(), TemperatureUnit::Celsius);
    }

    #[test]
    fn test_unit_from_symbol() {
        assert_eq!(TemperatureUnit::from_symbol("c"), Some(TemperatureUnit::Celsius));
        assert_eq!(TemperatureUnit::from_symbol(" °F "), Some(TemperatureUnit::Fahrenheit));
        assert_eq!(TemperatureUnit::from_symbol("K"), None);
    }

    #[test]
    fn test_alert_wire_format() {
        let spec: AlertSpec = serde_json::from_str(r#"{"value":30,"unit":"C"}"#).unwrap();
        assert_eq!(spec.threshold, 30.0);
        assert_eq!(spec.unit, TemperatureUnit::Celsius);
    }
}
