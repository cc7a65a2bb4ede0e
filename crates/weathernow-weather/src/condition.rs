//! Weather code presentation: description, theme and icon.
//!
//! See: https://open-meteo.com/en/docs#weathervariables

use serde::Serialize;

/// Visual category driving the surface styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Sunny,
    Cloudy,
    Rainy,
    Snow,
    Storm,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::Cloudy => "cloudy",
            Self::Rainy => "rainy",
            Self::Snow => "snow",
            Self::Storm => "storm",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub description: &'static str,
    pub theme: Theme,
    pub icon: &'static str,
}

const fn presentation(description: &'static str, theme: Theme, icon: &'static str) -> Presentation {
    Presentation {
        description,
        theme,
        icon,
    }
}

/// Map a weather code to its presentation. First matching range wins;
/// codes outside every range (including negatives) get the neutral fallback.
pub fn classify(code: i32) -> Presentation {
    match code {
        0 => presentation("Clear", Theme::Sunny, "☀️"),
        1..=2 => presentation("Mostly clear", Theme::Sunny, "🌤️"),
        3 => presentation("Cloudy", Theme::Cloudy, "☁️"),
        4..=67 => presentation("Rain", Theme::Rainy, "🌧️"),
        68..=77 => presentation("Snow", Theme::Snow, "❄️"),
        95.. => presentation("Thunder", Theme::Storm, "⛈️"),
        _ => presentation("—", Theme::Cloudy, "🌥️"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear() {
        let p = classify(0);
        assert_eq!(p.description, "Clear");
        assert_eq!(p.theme, Theme::Sunny);
        assert_eq!(p.icon, "☀️");
    }

    #[test]
    fn test_mostly_clear() {
        assert_eq!(classify(1).description, "Mostly clear");
        assert_eq!(classify(2).theme, Theme::Sunny);
    }

    #[test]
    fn test_documented_themes() {
        let cases = [
            (0, Theme::Sunny),
            (1, Theme::Sunny),
            (2, Theme::Sunny),
            (3, Theme::Cloudy),
            (50, Theme::Rainy),
            (70, Theme::Snow),
            (96, Theme::Storm),
        ];
        for (code, theme) in cases {
            assert_eq!(classify(code).theme, theme, "code {}", code);
        }
    }

    #[test]
    fn test_range_edges() {
        assert_eq!(classify(4).description, "Rain");
        assert_eq!(classify(67).description, "Rain");
        assert_eq!(classify(68).description, "Snow");
        assert_eq!(classify(77).description, "Snow");
        assert_eq!(classify(95).description, "Thunder");
    }

    #[test]
    fn test_gap_falls_back() {
        for code in [78, 80, 94] {
            let p = classify(code);
            assert_eq!(p.description, "—");
            assert_eq!(p.theme, Theme::Cloudy);
            assert_eq!(p.icon, "🌥️");
        }
    }

    #[test]
    fn test_total_over_extremes() {
        assert_eq!(classify(i32::MAX).theme, Theme::Storm);
        assert_eq!(classify(-1).description, "—");
        assert_eq!(classify(i32::MIN).description, "—");
    }
}
