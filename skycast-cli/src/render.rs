//! Plain-text rendering of the core view models.
//!
//! Formatting decisions (rounding, placeholders, labels) live in the view
//! models themselves; this module only arranges them into panels.

use skycast_core::view::{CurrentView, DayCard, DayDetail, HourDetail, HourlyView};

/// Shown in the detail panel until an hour or day is picked.
pub const DETAIL_PROMPT: &str =
    "Select an hour or a day to explore detailed weather for that time.";

pub const NO_UPCOMING_HOURS: &str = "No upcoming hourly data.";
pub const NO_DAILY_DATA: &str = "No daily data.";

pub fn error_bar(message: &str) -> String {
    format!("[!] {message}\n")
}

pub fn current_panel(view: &CurrentView) -> String {
    let mut out = String::new();
    out.push_str(&format!("== {} ==\n", view.location));
    out.push_str(&format!("{} {}", view.icon, view.description));
    if let Some(updated) = &view.updated {
        out.push_str(&format!("   ({updated})"));
    }
    out.push('\n');
    out.push_str(&format!(
        "Temp: {}   Feels like: {}   High/Low: {}\n",
        view.temperature, view.feels_like, view.high_low
    ));
    out.push_str(&format!(
        "Humidity: {}   Wind: {}   UV: {}\n",
        view.humidity, view.wind, view.uv_index
    ));
    out.push_str(&format!("Sunrise/Sunset: {}\n", view.sunrise_sunset));
    out
}

/// One line per upcoming hour; `active` is the payload index of the
/// highlighted card.
pub fn hourly_strip(view: &HourlyView, active: Option<usize>) -> String {
    let mut out = String::from("-- Next 24 hours --\n");
    let cards = view.cards();
    if cards.is_empty() {
        out.push_str(NO_UPCOMING_HOURS);
        out.push('\n');
        return out;
    }
    for card in cards {
        let marker = if Some(card.index) == active { '>' } else { ' ' };
        out.push_str(&format!(
            "{marker} {:<5} {}  {}\n",
            card.time_label, card.icon, card.temperature
        ));
    }
    out
}

pub fn daily_grid(cards: &[DayCard]) -> String {
    let mut out = String::from("-- Next 7 days --\n");
    if cards.is_empty() {
        out.push_str(NO_DAILY_DATA);
        out.push('\n');
        return out;
    }
    for card in cards {
        out.push_str(&format!(
            "{:<6} {}  {:<13} {} / {}   Rain: {} · UV: {}\n",
            card.name,
            card.icon,
            card.description,
            card.high,
            card.low,
            card.precipitation,
            card.uv_index
        ));
    }
    out
}

pub fn hour_panel(detail: &HourDetail) -> String {
    let mut out = String::from("-- Hourly details --\n");
    out.push_str(&format!("{}\n", detail.time_label));
    out.push_str(&format!("{} {}\n", detail.icon, detail.description));
    out.push_str(&format!(
        "Temperature: {} · Feels like: {}\n",
        detail.temperature, detail.feels_like
    ));
    out.push_str(&format!(
        "Humidity: {} · Wind: {} · Precipitation chance: {}\n",
        detail.humidity, detail.wind, detail.precipitation
    ));
    out
}

pub fn day_panel(detail: &DayDetail) -> String {
    let mut out = String::from("-- Daily outlook --\n");
    out.push_str(&format!("{}\n", detail.date_label));
    out.push_str(&format!("{} {}\n", detail.icon, detail.description));
    out.push_str(&format!("High: {} · Low: {}\n", detail.high, detail.low));
    out.push_str(&format!(
        "Chance of precipitation: {} · UV max: {}\n",
        detail.precipitation, detail.uv_index
    ));
    out.push_str(&format!(
        "Sunrise: {} · Sunset: {}\n",
        detail.sunrise, detail.sunset
    ));
    out
}

pub fn detail_placeholder() -> String {
    format!("-- Details --\n{DETAIL_PROMPT}\n")
}
