//! Core library for the `skycast` forecast dashboard.
//!
//! This crate defines:
//! - The fixed city list and its filtering rules
//! - The raw Open-Meteo payload model and the HTTP client that fetches it
//! - Dashboard state with its named transitions
//! - Pure projections from payload + unit to display-ready view models
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or
//! services; nothing here knows about the terminal.

pub mod cities;
pub mod conditions;
pub mod config;
pub mod model;
pub mod provider;
pub mod state;
pub mod units;
pub mod view;

pub use conditions::{WeatherCategory, classify};
pub use config::Config;
pub use model::{City, ForecastPayload};
pub use provider::{FetchError, ForecastClient, ForecastSource};
pub use state::ViewState;
pub use units::Unit;
pub use view::{
    CurrentView, DayCard, DayDetail, HourCard, HourDetail, HourlyView, day_detail, hour_detail,
    project_current, project_daily, project_hourly,
};
