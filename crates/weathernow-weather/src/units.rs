//! Celsius/Fahrenheit conversion.

use crate::types::TemperatureUnit;

pub fn to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Unrounded value in `unit`. Alert comparisons use this.
pub fn convert(temp_c: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => temp_c,
        TemperatureUnit::Fahrenheit => to_fahrenheit(temp_c),
    }
}

/// Value shown to the user: Celsius passes through untouched, Fahrenheit is
/// rounded to one decimal place.
pub fn to_display(temp_c: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => temp_c,
        TemperatureUnit::Fahrenheit => round_tenth(to_fahrenheit(temp_c)),
    }
}

/// e.g. `18°C`, `64.4°F`
pub fn format_temperature(temp_c: f64, unit: TemperatureUnit) -> String {
    format!("{}°{}", to_display(temp_c, unit), unit.symbol())
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
