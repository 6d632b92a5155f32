//! Interactive dashboard loop and the one-shot subcommand bodies.
//!
//! The [`Dashboard`] owns the view state and a [`ForecastSource`]; every
//! screen is rebuilt from the pure projections in `skycast-core`, so the
//! interactive layer here is just prompting and printing.

use anyhow::{Context, Result, anyhow};
use chrono::{Local, NaiveDateTime};
use inquire::{InquireError, Select, Text};

use skycast_core::provider::{ForecastClient, ForecastSource};
use skycast_core::units::Unit;
use skycast_core::view::{self, HourlyView};
use skycast_core::{Config, ViewState, cities};

use crate::render;

/// Which drill-down the detail panel shows. Every full re-render (fetch,
/// unit toggle, city change) drops back to `None`: the first hour card
/// becomes the highlighted one again and the panel shows the generic
/// prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    None,
    Hour(usize),
    Day(usize),
}

pub struct Dashboard<S> {
    source: S,
    state: ViewState,
    selection: Selection,
}

impl<S: ForecastSource> Dashboard<S> {
    pub fn new(source: S, state: ViewState) -> Self {
        Self {
            source,
            state,
            selection: Selection::None,
        }
    }

    /// Fetch the selected city's forecast and fold the outcome into state.
    /// On failure the previous payload stays and the error bar is set.
    async fn refresh(&mut self) {
        let city = self.state.selected_city();
        match self.source.fetch(city).await {
            Ok(payload) => {
                self.state.fetch_succeeded(city, payload);
            }
            Err(err) => self.state.fetch_failed(err.to_string()),
        }
        self.selection = Selection::None;
    }

    fn toggle_unit(&mut self) {
        self.state.toggle_unit();
        self.selection = Selection::None;
    }

    fn select_city(&mut self, city: &'static skycast_core::City) {
        self.state.select_city(city);
    }

    fn select_hour(&mut self, index: usize) {
        self.selection = Selection::Hour(index);
    }

    fn select_day(&mut self, index: usize) {
        self.selection = Selection::Day(index);
    }

    /// Build the whole dashboard as text for the given wall-clock time.
    fn screen(&self, now: NaiveDateTime) -> String {
        let mut out = String::new();

        if let Some(err) = self.state.error() {
            out.push_str(&render::error_bar(err));
        }

        let Some(payload) = self.state.payload() else {
            out.push_str("No forecast loaded yet.\n");
            return out;
        };

        let unit = self.state.unit();
        let city = self.state.selected_city();

        let current = view::project_current(payload, city.name, unit);
        out.push_str(&render::current_panel(&current));
        out.push('\n');

        let hourly = view::project_hourly(payload, unit, now);
        let active = match self.selection {
            Selection::Hour(index) => Some(index),
            _ => hourly.cards().first().map(|card| card.index),
        };
        out.push_str(&render::hourly_strip(&hourly, active));
        out.push('\n');

        out.push_str(&render::daily_grid(&view::project_daily(payload, unit)));
        out.push('\n');

        match self.selection {
            Selection::Hour(index) => {
                out.push_str(&render::hour_panel(&view::hour_detail(payload, unit, index)));
            }
            Selection::Day(index) => {
                out.push_str(&render::day_panel(&view::day_detail(payload, unit, index)));
            }
            Selection::None => out.push_str(&render::detail_placeholder()),
        }

        out
    }

    /// Interactive loop: print the dashboard, prompt for an action, repeat.
    pub async fn run(mut self) -> Result<()> {
        self.refresh().await;

        loop {
            println!("{}", self.screen(Local::now().naive_local()));

            let toggle_label = match self.state.unit() {
                Unit::Celsius => "Switch to °F",
                Unit::Fahrenheit => "Switch to °C",
            };
            let options = vec![
                "View hour details",
                "View day details",
                toggle_label,
                "Change city",
                "Refresh",
                "Quit",
            ];

            let choice = match Select::new("Dashboard", options).prompt() {
                Ok(choice) => choice,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    return Ok(());
                }
                Err(err) => return Err(err.into()),
            };

            match choice {
                "View hour details" => self.prompt_hour()?,
                "View day details" => self.prompt_day()?,
                "Switch to °F" | "Switch to °C" => self.toggle_unit(),
                "Change city" => self.prompt_city().await?,
                "Refresh" => self.refresh().await,
                _ => return Ok(()),
            }
        }
    }

    fn prompt_hour(&mut self) -> Result<()> {
        let Some(payload) = self.state.payload() else {
            println!("No forecast loaded yet.");
            return Ok(());
        };

        let hourly = view::project_hourly(payload, self.state.unit(), Local::now().naive_local());
        let cards = match &hourly {
            HourlyView::Upcoming(cards) => cards,
            HourlyView::NoUpcomingData => {
                println!("{}", render::NO_UPCOMING_HOURS);
                return Ok(());
            }
        };

        let labels: Vec<String> = cards
            .iter()
            .map(|c| format!("{:<5} {}  {}", c.time_label, c.icon, c.temperature))
            .collect();
        let cursor = match self.selection {
            Selection::Hour(index) => cards.iter().position(|c| c.index == index).unwrap_or(0),
            _ => 0,
        };

        match Select::new("Pick an hour", labels)
            .with_starting_cursor(cursor)
            .raw_prompt()
        {
            Ok(choice) => self.select_hour(cards[choice.index].index),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {}
            Err(err) => return Err(err.into()),
        }
        Ok(())
    }

    fn prompt_day(&mut self) -> Result<()> {
        let Some(payload) = self.state.payload() else {
            println!("No forecast loaded yet.");
            return Ok(());
        };

        let cards = view::project_daily(payload, self.state.unit());
        if cards.is_empty() {
            println!("{}", render::NO_DAILY_DATA);
            return Ok(());
        }

        let labels: Vec<String> = cards
            .iter()
            .map(|c| format!("{:<6} {}  {}  {} / {}", c.name, c.icon, c.description, c.high, c.low))
            .collect();
        let cursor = match self.selection {
            Selection::Day(index) => cards.iter().position(|c| c.index == index).unwrap_or(0),
            _ => 0,
        };

        match Select::new("Pick a day", labels)
            .with_starting_cursor(cursor)
            .raw_prompt()
        {
            Ok(choice) => self.select_day(cards[choice.index].index),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {}
            Err(err) => return Err(err.into()),
        }
        Ok(())
    }

    async fn prompt_city(&mut self) -> Result<()> {
        let query = match Text::new("Filter cities:").prompt_skippable()? {
            Some(query) => query,
            None => return Ok(()),
        };

        let filtered = cities::filter(&query);
        if filtered.is_empty() {
            println!("No city matches '{query}'.");
            return Ok(());
        }

        let current = self.state.selected_city().name;
        let cursor = cities::resolve_selection(&filtered, Some(current))
            .and_then(|picked| filtered.iter().position(|c| c.name == picked.name))
            .unwrap_or(0);
        let names: Vec<&str> = filtered.iter().map(|c| c.name).collect();

        match Select::new("Pick a city", names)
            .with_starting_cursor(cursor)
            .raw_prompt()
        {
            Ok(choice) => {
                self.select_city(filtered[choice.index]);
                self.refresh().await;
            }
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {}
            Err(err) => return Err(err.into()),
        }
        Ok(())
    }
}

/// Entry point for the default (no subcommand) invocation.
pub async fn dashboard(config: Config) -> Result<()> {
    let state = ViewState::new(config.initial_city(), config.initial_unit());
    Dashboard::new(ForecastClient::new(), state).run().await
}

/// `skycast show [FILTER]`: print the dashboard once and exit.
pub async fn show_once(config: Config, filter: Option<String>, unit: Option<Unit>) -> Result<()> {
    let city = match &filter {
        Some(query) => *cities::filter(query)
            .first()
            .ok_or_else(|| anyhow!("no city matches '{query}'"))?,
        None => config.initial_city(),
    };

    let state = ViewState::new(city, unit.unwrap_or_else(|| config.initial_unit()));
    let mut dash = Dashboard::new(ForecastClient::new(), state);
    dash.refresh().await;

    if let Some(err) = dash.state.error() {
        return Err(anyhow!("{err}"));
    }
    println!("{}", dash.screen(Local::now().naive_local()));
    Ok(())
}

/// `skycast cities [FILTER]`: list the known cities.
pub fn list_cities(filter: Option<String>) {
    let query = filter.unwrap_or_default();
    let matches = cities::filter(&query);
    if matches.is_empty() {
        println!("No city matches '{query}'.");
        return;
    }
    for city in matches {
        println!("{}", city.name);
    }
}

/// `skycast configure`: pick and persist the default city and unit.
pub fn configure() -> Result<()> {
    let names: Vec<&str> = cities::CITIES.iter().map(|c| c.name).collect();
    let city = Select::new("Default city", names)
        .prompt()
        .context("configuration aborted")?;

    let unit = match Select::new("Display unit", vec!["Celsius (°C)", "Fahrenheit (°F)"])
        .prompt()
        .context("configuration aborted")?
    {
        "Fahrenheit (°F)" => Unit::Fahrenheit,
        _ => Unit::Celsius,
    };

    let config = Config {
        default_city: Some(city.to_string()),
        unit: Some(unit),
    };
    config.save()?;

    let path = Config::config_file_path()?;
    println!("Saved configuration to {}", path.display());
    Ok(())
}
