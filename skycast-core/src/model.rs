use serde::Deserialize;

/// A selectable location: display name plus coordinates.
///
/// The app ships a fixed list of these (see [`crate::cities`]); names are
/// unique and double as the display key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

/// Raw forecast response from Open-Meteo, kept close to the wire shape.
///
/// Every scalar is optional and every parallel vector defaults to empty:
/// a field the provider omits (or sends as `null`) must degrade to a
/// placeholder at the point of use, never fail the whole payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastPayload {
    #[serde(default)]
    pub current: Option<CurrentSection>,
    #[serde(default)]
    pub hourly: Option<HourlySection>,
    #[serde(default)]
    pub daily: Option<DailySection>,
}

/// Snapshot of current conditions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentSection {
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub temperature_2m: Option<f64>,
    #[serde(default)]
    pub apparent_temperature: Option<f64>,
    #[serde(default)]
    pub relative_humidity_2m: Option<i64>,
    #[serde(default)]
    pub wind_speed_10m: Option<f64>,
    #[serde(default)]
    pub uv_index: Option<f64>,
    #[serde(default)]
    pub weather_code: Option<i64>,
}

/// Hour-by-hour series. All vectors are index-aligned with `time`;
/// an index out of range for a sibling vector reads as "unavailable".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HourlySection {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m: Vec<Option<f64>>,
    #[serde(default)]
    pub apparent_temperature: Vec<Option<f64>>,
    #[serde(default)]
    pub relative_humidity_2m: Vec<Option<i64>>,
    #[serde(default)]
    pub wind_speed_10m: Vec<Option<f64>>,
    #[serde(default)]
    pub precipitation_probability: Vec<Option<i64>>,
    #[serde(default)]
    pub weather_code: Vec<Option<i64>>,
}

/// Day-by-day series, one entry per calendar day, index-aligned with `time`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailySection {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub weather_code: Vec<Option<i64>>,
    #[serde(default)]
    pub temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    pub temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    pub sunrise: Vec<Option<String>>,
    #[serde(default)]
    pub sunset: Vec<Option<String>>,
    #[serde(default)]
    pub uv_index_max: Vec<Option<f64>>,
    #[serde(default)]
    pub precipitation_probability_max: Vec<Option<i64>>,
}

/// Read an index-aligned slot, treating out-of-range and `null` alike.
pub(crate) fn slot<T: Copy>(values: &[Option<T>], index: usize) -> Option<T> {
    values.get(index).copied().flatten()
}

/// Like [`slot`] for string-valued series.
pub(crate) fn slot_str(values: &[Option<String>], index: usize) -> Option<&str> {
    values.get(index).and_then(|v| v.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_parses_with_missing_sections() {
        let payload: ForecastPayload = serde_json::from_str("{}").expect("empty object parses");
        assert!(payload.current.is_none());
        assert!(payload.hourly.is_none());
        assert!(payload.daily.is_none());
    }

    #[test]
    fn hourly_tolerates_null_entries_and_missing_vectors() {
        let json = r#"{
            "hourly": {
                "time": ["2026-08-05T10:00", "2026-08-05T11:00"],
                "temperature_2m": [21.3, null]
            }
        }"#;
        let payload: ForecastPayload = serde_json::from_str(json).expect("parses");
        let hourly = payload.hourly.expect("hourly present");

        assert_eq!(hourly.time.len(), 2);
        assert_eq!(slot(&hourly.temperature_2m, 0), Some(21.3));
        assert_eq!(slot(&hourly.temperature_2m, 1), None);
        // weather_code vector was absent entirely
        assert_eq!(slot(&hourly.weather_code, 0), None);
    }

    #[test]
    fn slot_is_out_of_range_safe() {
        let values = vec![Some(1.0_f64)];
        assert_eq!(slot(&values, 0), Some(1.0));
        assert_eq!(slot(&values, 5), None);

        let strings = vec![Some("2026-08-05T06:12".to_string()), None];
        assert_eq!(slot_str(&strings, 0), Some("2026-08-05T06:12"));
        assert_eq!(slot_str(&strings, 1), None);
        assert_eq!(slot_str(&strings, 9), None);
    }

    #[test]
    fn current_fields_are_individually_optional() {
        let json = r#"{ "current": { "temperature_2m": 22.4 } }"#;
        let payload: ForecastPayload = serde_json::from_str(json).expect("parses");
        let current = payload.current.expect("current present");

        assert_eq!(current.temperature_2m, Some(22.4));
        assert!(current.uv_index.is_none());
        assert!(current.weather_code.is_none());
    }
}
