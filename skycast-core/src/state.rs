//! Dashboard state and its transitions.
//!
//! One instance owns everything the projections read: the active unit, the
//! selected city, the last successfully fetched payload and the last fetch
//! error. All mutation goes through the named transitions below; there is
//! no ambient/global state.

use crate::model::{City, ForecastPayload};
use crate::units::Unit;

#[derive(Debug, Clone)]
pub struct ViewState {
    unit: Unit,
    selected_city: &'static City,
    last_payload: Option<ForecastPayload>,
    last_error: Option<String>,
}

impl ViewState {
    pub fn new(city: &'static City, unit: Unit) -> Self {
        Self {
            unit,
            selected_city: city,
            last_payload: None,
            last_error: None,
        }
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn selected_city(&self) -> &'static City {
        self.selected_city
    }

    pub fn payload(&self) -> Option<&ForecastPayload> {
        self.last_payload.as_ref()
    }

    /// The persistent error indicator, cleared by the next success.
    pub fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn select_city(&mut self, city: &'static City) {
        self.selected_city = city;
    }

    pub fn set_unit(&mut self, unit: Unit) {
        self.unit = unit;
    }

    /// Flip °C/°F. Projections re-run afterwards; no re-fetch happens.
    pub fn toggle_unit(&mut self) {
        self.unit = self.unit.toggled();
    }

    /// Accept a fetched payload. Responses for a city that is no longer
    /// selected are discarded, so a slow fetch can never overwrite a newer
    /// selection's data. Returns whether the payload was accepted.
    pub fn fetch_succeeded(&mut self, city: &City, payload: ForecastPayload) -> bool {
        if city.name != self.selected_city.name {
            return false;
        }
        self.last_payload = Some(payload);
        self.last_error = None;
        true
    }

    /// Record a failed fetch. The previously displayed forecast stays.
    pub fn fetch_failed(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }
}
