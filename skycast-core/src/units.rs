//! Unit conversion and display formatting.
//!
//! Everything the provider sends is metric (°C, km/h); conversion to the
//! imperial presentation happens here, at display time. Absent or NaN
//! values render as [`PLACEHOLDER`] instead of failing.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Rendered wherever a value is unavailable.
pub const PLACEHOLDER: &str = "--";

const KMH_TO_MPH: f64 = 0.621_371;

/// Active display unit. The wind-speed unit rides on this toggle as well:
/// Fahrenheit mode reports mph, Celsius mode km/h.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl Unit {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Unit::Celsius => Unit::Fahrenheit,
            Unit::Fahrenheit => Unit::Celsius,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
        }
    }
}

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

/// Round a Celsius reading into the active unit, e.g. `22°C` / `72°F`.
pub fn format_temperature(celsius: Option<f64>, unit: Unit) -> String {
    let Some(c) = celsius else {
        return PLACEHOLDER.to_string();
    };
    if c.is_nan() {
        return PLACEHOLDER.to_string();
    }
    let value = match unit {
        Unit::Celsius => c,
        Unit::Fahrenheit => celsius_to_fahrenheit(c),
    };
    format!("{}{}", value.round() as i64, unit.symbol())
}

/// Round a km/h reading into the active unit, e.g. `14 km/h` / `9 mph`.
pub fn format_speed(kmh: Option<f64>, unit: Unit) -> String {
    let Some(kmh) = kmh else {
        return PLACEHOLDER.to_string();
    };
    if kmh.is_nan() {
        return PLACEHOLDER.to_string();
    }
    match unit {
        Unit::Celsius => format!("{} km/h", kmh.round() as i64),
        Unit::Fahrenheit => format!("{} mph", (kmh * KMH_TO_MPH).round() as i64),
    }
}

pub fn format_percent(value: Option<i64>) -> String {
    match value {
        Some(v) => format!("{v}%"),
        None => PLACEHOLDER.to_string(),
    }
}

/// UV index with one decimal, e.g. `6.5`.
pub fn format_uv_index(value: Option<f64>) -> String {
    match value {
        Some(v) if !v.is_nan() => format!("{v:.1}"),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Parse the provider's location-local ISO-8601 timestamps
/// (`2026-08-05T14:00`, with or without seconds).
pub fn parse_local_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.naive_local())
        })
}

/// Parse a date (`2026-08-05`), also accepting full timestamps.
pub fn parse_local_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_local_datetime(value).map(|dt| dt.date()))
}

/// 12-hour label for an hourly slot: `12 AM` .. `11 PM`.
pub fn hour_label(timestamp: &str) -> String {
    match parse_local_datetime(timestamp) {
        Some(dt) => dt.format("%-I %p").to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Short weekday name: `Mon`, `Tue`, ...
pub fn day_name(date: &str) -> String {
    match parse_local_date(date) {
        Some(d) => d.format("%a").to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Full timestamp label: `Wed, Aug 5, 2:00 PM`.
pub fn full_date_time(timestamp: &str) -> String {
    match parse_local_datetime(timestamp) {
        Some(dt) => dt.format("%a, %b %-d, %-I:%M %p").to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Full date label: `Wednesday, August 5`.
pub fn full_date(date: &str) -> String {
    match parse_local_date(date) {
        Some(d) => d.format("%A, %B %-d").to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Clock label: `6:12 AM`.
pub fn clock_time(timestamp: &str) -> String {
    match parse_local_datetime(timestamp) {
        Some(dt) => dt.format("%-I:%M %p").to_string(),
        None => PLACEHOLDER.to_string(),
    }
}
