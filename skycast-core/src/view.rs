//! Projections from the raw payload to display-ready view models.
//!
//! Each projection is a pure function of `(payload, unit)`, plus the wall
//! clock for the hourly cutoff and an index for the drill-downs, and knows
//! nothing about the output sink. Re-running a projection on the same
//! inputs yields the same view model; rendering is somebody else's job.

use chrono::NaiveDateTime;

use crate::conditions::classify;
use crate::model::{ForecastPayload, slot, slot_str};
use crate::units::{self, PLACEHOLDER, Unit};

/// At most this many upcoming hours are shown.
pub const HOURLY_WINDOW: usize = 24;
/// At most this many days are shown.
pub const DAILY_WINDOW: usize = 7;

/// Current-conditions panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentView {
    pub location: String,
    pub icon: &'static str,
    pub description: &'static str,
    /// `Updated <timestamp>` label, absent when the provider sent no time.
    pub updated: Option<String>,
    pub temperature: String,
    pub feels_like: String,
    /// Today's `high / low`, sourced from the first daily entry.
    pub high_low: String,
    pub humidity: String,
    pub wind: String,
    pub uv_index: String,
    pub sunrise_sunset: String,
}

/// One card in the hourly strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourCard {
    /// Index into the payload's hourly series (not the card position).
    pub index: usize,
    pub time_label: String,
    pub icon: &'static str,
    pub temperature: String,
}

/// The hourly strip: either upcoming cards or an explicit empty state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HourlyView {
    Upcoming(Vec<HourCard>),
    NoUpcomingData,
}

impl HourlyView {
    pub fn cards(&self) -> &[HourCard] {
        match self {
            HourlyView::Upcoming(cards) => cards,
            HourlyView::NoUpcomingData => &[],
        }
    }
}

/// Drill-down panel for one hour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourDetail {
    pub time_label: String,
    pub icon: &'static str,
    pub description: &'static str,
    pub temperature: String,
    pub feels_like: String,
    pub humidity: String,
    pub wind: String,
    pub precipitation: String,
}

/// One card in the daily grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCard {
    pub index: usize,
    /// `Today` for index 0, else the short weekday name.
    pub name: String,
    pub icon: &'static str,
    pub description: &'static str,
    pub high: String,
    pub low: String,
    pub precipitation: String,
    pub uv_index: String,
}

/// Drill-down panel for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayDetail {
    pub date_label: String,
    pub icon: &'static str,
    pub description: &'static str,
    pub high: String,
    pub low: String,
    pub precipitation: String,
    pub uv_index: String,
    pub sunrise: String,
    pub sunset: String,
}

/// Build the current-conditions panel.
///
/// Today's high/low and the UV fallback cross over into the first daily
/// entry; when `daily` is empty those fields degrade to the placeholder.
pub fn project_current(payload: &ForecastPayload, location: &str, unit: Unit) -> CurrentView {
    let current = payload.current.clone().unwrap_or_default();
    let category = classify(current.weather_code);

    let daily = payload.daily.as_ref();

    let high_low = match daily {
        Some(d) if !d.temperature_2m_max.is_empty() || !d.temperature_2m_min.is_empty() => {
            format!(
                "{} / {}",
                units::format_temperature(slot(&d.temperature_2m_max, 0), unit),
                units::format_temperature(slot(&d.temperature_2m_min, 0), unit),
            )
        }
        _ => PLACEHOLDER.to_string(),
    };

    let uv = current
        .uv_index
        .or_else(|| daily.and_then(|d| slot(&d.uv_index_max, 0)));

    let sunrise_sunset = daily
        .and_then(|d| {
            let sunrise = slot_str(&d.sunrise, 0)?;
            let sunset = slot_str(&d.sunset, 0)?;
            Some(format!(
                "{} / {}",
                units::clock_time(sunrise),
                units::clock_time(sunset)
            ))
        })
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    CurrentView {
        location: location.to_string(),
        icon: category.icon,
        description: category.text,
        updated: current
            .time
            .as_deref()
            .map(|t| format!("Updated {}", units::full_date_time(t))),
        temperature: units::format_temperature(current.temperature_2m, unit),
        feels_like: units::format_temperature(current.apparent_temperature, unit),
        high_low,
        humidity: units::format_percent(current.relative_humidity_2m),
        wind: units::format_speed(current.wind_speed_10m, unit),
        uv_index: units::format_uv_index(uv),
        sunrise_sunset,
    }
}

/// Build the hourly strip: entries at or after `now`, first
/// [`HOURLY_WINDOW`] of them in chronological order.
pub fn project_hourly(payload: &ForecastPayload, unit: Unit, now: NaiveDateTime) -> HourlyView {
    let Some(hourly) = payload.hourly.as_ref() else {
        return HourlyView::NoUpcomingData;
    };

    let mut cards = Vec::new();
    for (index, raw) in hourly.time.iter().enumerate() {
        let Some(timestamp) = units::parse_local_datetime(raw) else {
            continue;
        };
        if timestamp < now {
            continue;
        }
        cards.push(HourCard {
            index,
            time_label: units::hour_label(raw),
            icon: classify(slot(&hourly.weather_code, index)).icon,
            temperature: units::format_temperature(slot(&hourly.temperature_2m, index), unit),
        });
        if cards.len() >= HOURLY_WINDOW {
            break;
        }
    }

    if cards.is_empty() {
        HourlyView::NoUpcomingData
    } else {
        HourlyView::Upcoming(cards)
    }
}

/// Build the drill-down panel for the hourly slot at `index`.
/// Total: anything missing at that index renders as the placeholder.
pub fn hour_detail(payload: &ForecastPayload, unit: Unit, index: usize) -> HourDetail {
    let hourly = payload.hourly.clone().unwrap_or_default();
    let category = classify(slot(&hourly.weather_code, index));

    HourDetail {
        time_label: hourly
            .time
            .get(index)
            .map(|t| units::full_date_time(t))
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        icon: category.icon,
        description: category.text,
        temperature: units::format_temperature(slot(&hourly.temperature_2m, index), unit),
        feels_like: units::format_temperature(slot(&hourly.apparent_temperature, index), unit),
        humidity: units::format_percent(slot(&hourly.relative_humidity_2m, index)),
        wind: units::format_speed(slot(&hourly.wind_speed_10m, index), unit),
        precipitation: units::format_percent(slot(&hourly.precipitation_probability, index)),
    }
}

/// Build the daily grid: the first `min(7, len)` entries in payload order.
pub fn project_daily(payload: &ForecastPayload, unit: Unit) -> Vec<DayCard> {
    let Some(daily) = payload.daily.as_ref() else {
        return Vec::new();
    };

    daily
        .time
        .iter()
        .take(DAILY_WINDOW)
        .enumerate()
        .map(|(index, date)| {
            let category = classify(slot(&daily.weather_code, index));
            DayCard {
                index,
                name: if index == 0 {
                    "Today".to_string()
                } else {
                    units::day_name(date)
                },
                icon: category.icon,
                description: category.text,
                high: units::format_temperature(slot(&daily.temperature_2m_max, index), unit),
                low: units::format_temperature(slot(&daily.temperature_2m_min, index), unit),
                precipitation: units::format_percent(slot(
                    &daily.precipitation_probability_max,
                    index,
                )),
                uv_index: units::format_uv_index(slot(&daily.uv_index_max, index)),
            }
        })
        .collect()
}

/// Build the drill-down panel for the day at `index`.
/// Total: anything missing at that index renders as the placeholder.
pub fn day_detail(payload: &ForecastPayload, unit: Unit, index: usize) -> DayDetail {
    let daily = payload.daily.clone().unwrap_or_default();
    let category = classify(slot(&daily.weather_code, index));

    DayDetail {
        date_label: daily
            .time
            .get(index)
            .map(|d| units::full_date(d))
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        icon: category.icon,
        description: category.text,
        high: units::format_temperature(slot(&daily.temperature_2m_max, index), unit),
        low: units::format_temperature(slot(&daily.temperature_2m_min, index), unit),
        precipitation: units::format_percent(slot(&daily.precipitation_probability_max, index)),
        uv_index: units::format_uv_index(slot(&daily.uv_index_max, index)),
        sunrise: slot_str(&daily.sunrise, index)
            .map(units::clock_time)
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        sunset: slot_str(&daily.sunset, index)
            .map(units::clock_time)
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> ForecastPayload {
        serde_json::from_value(value).expect("test payload parses")
    }

    fn hourly_payload(hours: usize, start_hour: u32) -> ForecastPayload {
        let time: Vec<String> = (0..hours)
            .map(|i| {
                let h = start_hour as usize + i;
                format!("2026-08-{:02}T{:02}:00", 5 + h / 24, h % 24)
            })
            .collect();
        let temps: Vec<f64> = (0..hours).map(|i| 15.0 + i as f64 * 0.5).collect();
        let codes: Vec<i64> = vec![0; hours];
        payload(json!({
            "hourly": { "time": time, "temperature_2m": temps, "weather_code": codes }
        }))
    }

    fn noon() -> NaiveDateTime {
        units::parse_local_datetime("2026-08-05T12:00").expect("valid timestamp")
    }

    #[test]
    fn current_view_reads_snapshot_and_todays_daily_entry() {
        let p = payload(json!({
            "current": {
                "time": "2026-08-05T14:00",
                "temperature_2m": 22.4,
                "apparent_temperature": 21.0,
                "relative_humidity_2m": 40,
                "wind_speed_10m": 14.0,
                "weather_code": 0
            },
            "daily": {
                "time": ["2026-08-05"],
                "temperature_2m_max": [28.3],
                "temperature_2m_min": [17.8],
                "sunrise": ["2026-08-05T06:12"],
                "sunset": ["2026-08-05T19:54"],
                "uv_index_max": [8.0]
            }
        }));

        let view = project_current(&p, "San Diego, CA", Unit::Celsius);
        assert_eq!(view.location, "San Diego, CA");
        assert_eq!(view.temperature, "22°C");
        assert_eq!(view.feels_like, "21°C");
        assert_eq!(view.description, "Clear sky");
        assert_eq!(view.updated.as_deref(), Some("Updated Wed, Aug 5, 2:00 PM"));
        assert_eq!(view.high_low, "28°C / 18°C");
        assert_eq!(view.humidity, "40%");
        assert_eq!(view.wind, "14 km/h");
        // current.uv_index absent, falls back to the daily max
        assert_eq!(view.uv_index, "8.0");
        assert_eq!(view.sunrise_sunset, "6:12 AM / 7:54 PM");
    }

    #[test]
    fn current_view_in_fahrenheit() {
        let p = payload(json!({
            "current": { "temperature_2m": 22.4, "wind_speed_10m": 14.0 }
        }));

        let view = project_current(&p, "San Diego, CA", Unit::Fahrenheit);
        assert_eq!(view.temperature, "72°F");
        assert_eq!(view.wind, "9 mph");
        assert_eq!(view.high_low, PLACEHOLDER);
        assert_eq!(view.sunrise_sunset, PLACEHOLDER);
        assert!(view.updated.is_none());
    }

    #[test]
    fn current_view_prefers_snapshot_uv_over_daily() {
        let p = payload(json!({
            "current": { "uv_index": 3.2 },
            "daily": { "time": ["2026-08-05"], "uv_index_max": [8.0] }
        }));
        assert_eq!(project_current(&p, "x", Unit::Celsius).uv_index, "3.2");
    }

    #[test]
    fn hourly_takes_first_24_entries_at_or_after_now() {
        // 48 hourly slots starting at midnight; "now" is noon.
        let p = hourly_payload(48, 0);
        let view = project_hourly(&p, Unit::Celsius, noon());

        let cards = view.cards();
        assert_eq!(cards.len(), HOURLY_WINDOW);
        assert_eq!(cards[0].index, 12);
        assert_eq!(cards[0].time_label, "12 PM");
        assert_eq!(cards[23].index, 35);
        // chronological order
        for pair in cards.windows(2) {
            assert!(pair[0].index < pair[1].index);
        }
    }

    #[test]
    fn hourly_keeps_fewer_than_24_when_that_is_all_there_is() {
        let p = hourly_payload(15, 6);
        let view = project_hourly(&p, Unit::Celsius, noon());
        // slots 12:00..20:00 qualify
        assert_eq!(view.cards().len(), 9);
    }

    #[test]
    fn hourly_with_nothing_upcoming_is_an_explicit_empty_state() {
        // all slots in the past
        let p = hourly_payload(6, 0);
        assert_eq!(
            project_hourly(&p, Unit::Celsius, noon()),
            HourlyView::NoUpcomingData
        );

        // no hourly section at all
        assert_eq!(
            project_hourly(&ForecastPayload::default(), Unit::Celsius, noon()),
            HourlyView::NoUpcomingData
        );
    }

    #[test]
    fn hourly_cards_degrade_missing_values_to_placeholder() {
        let p = payload(json!({
            "hourly": {
                "time": ["2026-08-05T13:00", "2026-08-05T14:00"],
                "temperature_2m": [21.0, null]
            }
        }));
        let view = project_hourly(&p, Unit::Celsius, noon());
        let cards = view.cards();
        assert_eq!(cards[0].temperature, "21°C");
        assert_eq!(cards[1].temperature, PLACEHOLDER);
        // weather_code vector missing entirely
        assert_eq!(cards[0].icon, "❓");
    }

    #[test]
    fn hour_detail_is_total_over_missing_data() {
        let p = payload(json!({
            "hourly": {
                "time": ["2026-08-05T13:00"],
                "temperature_2m": [21.0],
                "weather_code": [61]
            }
        }));

        let detail = hour_detail(&p, Unit::Celsius, 0);
        assert_eq!(detail.time_label, "Wed, Aug 5, 1:00 PM");
        assert_eq!(detail.description, "Rain");
        assert_eq!(detail.temperature, "21°C");
        assert_eq!(detail.humidity, PLACEHOLDER);
        assert_eq!(detail.wind, PLACEHOLDER);

        // index out of range never panics
        let out_of_range = hour_detail(&p, Unit::Celsius, 99);
        assert_eq!(out_of_range.time_label, PLACEHOLDER);
        assert_eq!(out_of_range.description, "Unknown");
    }

    fn daily_payload(days: usize) -> ForecastPayload {
        let time: Vec<String> = (0..days).map(|i| format!("2026-08-{:02}", 5 + i)).collect();
        let codes: Vec<i64> = (0..days).map(|i| if i == 2 { 61 } else { 0 }).collect();
        let highs: Vec<f64> = (0..days).map(|i| 25.0 + i as f64).collect();
        let lows: Vec<f64> = (0..days).map(|i| 15.0 + i as f64).collect();
        payload(json!({
            "daily": {
                "time": time,
                "weather_code": codes,
                "temperature_2m_max": highs,
                "temperature_2m_min": lows
            }
        }))
    }

    #[test]
    fn daily_caps_at_seven_cards_in_payload_order() {
        let cards = project_daily(&daily_payload(10), Unit::Celsius);
        assert_eq!(cards.len(), DAILY_WINDOW);
        assert_eq!(cards[0].name, "Today");
        assert_eq!(cards[1].name, "Thu");
        assert_eq!(cards[6].name, "Tue");
        assert_eq!(cards[0].high, "25°C");
        assert_eq!(cards[6].high, "31°C");
    }

    #[test]
    fn daily_shows_all_entries_when_fewer_than_seven() {
        let cards = project_daily(&daily_payload(3), Unit::Celsius);
        assert_eq!(cards.len(), 3);
        assert!(project_daily(&ForecastPayload::default(), Unit::Celsius).is_empty());
    }

    #[test]
    fn rain_code_at_index_two_shows_the_rain_category() {
        let cards = project_daily(&daily_payload(7), Unit::Celsius);
        assert_eq!(cards[2].description, "Rain");
        assert_eq!(cards[2].icon, "🌧️");
    }

    #[test]
    fn day_detail_formats_the_full_entry() {
        let p = payload(json!({
            "daily": {
                "time": ["2026-08-05", "2026-08-06"],
                "weather_code": [0, 3],
                "temperature_2m_max": [28.3, 24.0],
                "temperature_2m_min": [17.8, 14.2],
                "sunrise": ["2026-08-05T06:12", "2026-08-06T06:13"],
                "sunset": ["2026-08-05T19:54", "2026-08-06T19:53"],
                "uv_index_max": [8.0, 5.5],
                "precipitation_probability_max": [5, 60]
            }
        }));

        let detail = day_detail(&p, Unit::Celsius, 1);
        assert_eq!(detail.date_label, "Thursday, August 6");
        assert_eq!(detail.description, "Cloudy");
        assert_eq!(detail.high, "24°C");
        assert_eq!(detail.low, "14°C");
        assert_eq!(detail.precipitation, "60%");
        assert_eq!(detail.uv_index, "5.5");
        assert_eq!(detail.sunrise, "6:13 AM");
        assert_eq!(detail.sunset, "7:53 PM");

        let out_of_range = day_detail(&p, Unit::Celsius, 9);
        assert_eq!(out_of_range.date_label, PLACEHOLDER);
        assert_eq!(out_of_range.sunrise, PLACEHOLDER);
    }

    #[test]
    fn projections_are_idempotent() {
        let p = payload(json!({
            "current": { "temperature_2m": 22.4, "weather_code": 2 },
            "hourly": {
                "time": ["2026-08-05T13:00", "2026-08-05T14:00"],
                "temperature_2m": [21.0, 20.5],
                "weather_code": [1, 2]
            },
            "daily": {
                "time": ["2026-08-05", "2026-08-06"],
                "weather_code": [0, 61],
                "temperature_2m_max": [28.3, 24.0],
                "temperature_2m_min": [17.8, 14.2]
            }
        }));

        for unit in [Unit::Celsius, Unit::Fahrenheit] {
            assert_eq!(
                project_current(&p, "San Diego, CA", unit),
                project_current(&p, "San Diego, CA", unit)
            );
            assert_eq!(
                project_hourly(&p, unit, noon()),
                project_hourly(&p, unit, noon())
            );
            assert_eq!(project_daily(&p, unit), project_daily(&p, unit));
        }
    }
}
