//! Open-Meteo forecast client.
//!
//! One GET per city selection against the provider's `/forecast` endpoint,
//! asking for the current/hourly/daily field sets the dashboard renders.
//! Units are left at the provider defaults (°C, km/h, mm); conversion is a
//! display concern (see [`crate::units`]). No retries, no caching: a failed
//! fetch is reported and the caller keeps whatever it was showing.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

use crate::model::{City, ForecastPayload};

pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com/v1";

const CURRENT_FIELDS: &str =
    "temperature_2m,apparent_temperature,relative_humidity_2m,wind_speed_10m,uv_index,weather_code";
const HOURLY_FIELDS: &str = "temperature_2m,apparent_temperature,relative_humidity_2m,\
     wind_speed_10m,precipitation_probability,weather_code";
const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min,sunrise,sunset,\
     uv_index_max,precipitation_probability_max";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The one failure mode the dashboard distinguishes: the forecast could not
/// be fetched. Partial data inside a successful response is not an error;
/// it degrades field by field at render time.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not reach the weather service: {0}")]
    Transport(String),

    #[error("weather service returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("could not parse the weather service response: {0}")]
    Parse(String),
}

/// Seam over the forecast fetch, so the dashboard loop can run against a
/// canned source in tests.
#[async_trait]
pub trait ForecastSource: Send + Sync {
    async fn fetch(&self, city: &City) -> Result<ForecastPayload, FetchError>;
}

/// HTTP implementation of [`ForecastSource`].
#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: Client,
    base_url: String,
}

impl Default for ForecastClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different base URL (used by the test suite).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ForecastSource for ForecastClient {
    async fn fetch(&self, city: &City) -> Result<ForecastPayload, FetchError> {
        let url = format!("{}/forecast", self.base_url);
        debug!(city = city.name, "requesting forecast");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", city.lat.to_string()),
                ("longitude", city.lon.to_string()),
                ("timezone", "auto".to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
            ])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut cut = MAX;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}
