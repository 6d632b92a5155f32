//! WMO weather-code classification.

/// Display category for a weather code: icon glyph plus short label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherCategory {
    pub icon: &'static str,
    pub text: &'static str,
}

const UNKNOWN: WeatherCategory = WeatherCategory {
    icon: "❓",
    text: "Unknown",
};

/// Map an Open-Meteo weather code to its display category.
///
/// Total over every integer and over "no code at all"; anything not in the
/// table is [`Unknown`](WeatherCategory). See
/// <https://open-meteo.com/en/docs> for the WMO code reference.
#[must_use]
pub const fn classify(code: Option<i64>) -> WeatherCategory {
    let code = match code {
        Some(code) => code,
        None => return UNKNOWN,
    };
    match code {
        0 => WeatherCategory {
            icon: "☀️",
            text: "Clear sky",
        },
        1 | 2 => WeatherCategory {
            icon: "🌤️",
            text: "Mostly clear",
        },
        3 => WeatherCategory {
            icon: "☁️",
            text: "Cloudy",
        },
        45 | 48 => WeatherCategory {
            icon: "🌫️",
            text: "Foggy",
        },
        51 | 53 | 55 | 56 | 57 => WeatherCategory {
            icon: "🌦️",
            text: "Drizzle",
        },
        61 | 63 | 65 | 80 | 81 | 82 => WeatherCategory {
            icon: "🌧️",
            text: "Rain",
        },
        71 | 73 | 75 | 77 | 85 | 86 => WeatherCategory {
            icon: "🌨️",
            text: "Snow",
        },
        95 | 96 | 99 => WeatherCategory {
            icon: "⛈️",
            text: "Thunderstorm",
        },
        _ => UNKNOWN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_code_is_unknown() {
        assert_eq!(classify(None).text, "Unknown");
    }

    #[test]
    fn every_listed_code_maps_to_its_category() {
        assert_eq!(classify(Some(0)).text, "Clear sky");
        for code in [1, 2] {
            assert_eq!(classify(Some(code)).text, "Mostly clear");
        }
        assert_eq!(classify(Some(3)).text, "Cloudy");
        for code in [45, 48] {
            assert_eq!(classify(Some(code)).text, "Foggy");
        }
        for code in [51, 53, 55, 56, 57] {
            assert_eq!(classify(Some(code)).text, "Drizzle");
        }
        for code in [61, 63, 65, 80, 81, 82] {
            assert_eq!(classify(Some(code)).text, "Rain");
        }
        for code in [71, 73, 75, 77, 85, 86] {
            assert_eq!(classify(Some(code)).text, "Snow");
        }
        for code in [95, 96, 99] {
            assert_eq!(classify(Some(code)).text, "Thunderstorm");
        }
    }

    #[test]
    fn unlisted_codes_are_unknown() {
        for code in [-1, 4, 44, 50, 58, 60, 66, 70, 79, 90, 100, 255] {
            assert_eq!(classify(Some(code)).text, "Unknown", "code {code}");
        }
    }

    #[test]
    fn categories_carry_an_icon() {
        assert_eq!(classify(Some(0)).icon, "☀️");
        assert_eq!(classify(Some(61)).icon, "🌧️");
        assert_eq!(classify(None).icon, "❓");
    }
}
