use clap::{Parser, Subcommand, ValueEnum};

use skycast_core::{Config, Unit};

use crate::app;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Forecast dashboard for California cities")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the dashboard once for a city and exit.
    Show {
        /// City name filter; the first matching city is shown.
        filter: Option<String>,

        /// Display unit override.
        #[arg(long, value_enum)]
        unit: Option<UnitArg>,
    },

    /// List the known cities.
    Cities {
        /// Optional city name filter.
        filter: Option<String>,
    },

    /// Choose and persist the default city and display unit.
    Configure,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum UnitArg {
    /// Celsius and km/h.
    C,
    /// Fahrenheit and mph.
    F,
}

impl From<UnitArg> for Unit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::C => Unit::Celsius,
            UnitArg::F => Unit::Fahrenheit,
        }
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;

        match self.command {
            None => app::dashboard(config).await,
            Some(Command::Show { filter, unit }) => {
                app::show_once(config, filter, unit.map(Into::into)).await
            }
            Some(Command::Cities { filter }) => {
                app::list_cities(filter);
                Ok(())
            }
            Some(Command::Configure) => app::configure(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_dashboard() {
        let cli = Cli::parse_from(["skycast"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn show_takes_filter_and_unit() {
        let cli = Cli::parse_from(["skycast", "show", "fresno", "--unit", "f"]);
        match cli.command {
            Some(Command::Show { filter, unit }) => {
                assert_eq!(filter.as_deref(), Some("fresno"));
                assert!(matches!(unit, Some(UnitArg::F)));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unit_arg_maps_to_core_unit() {
        assert_eq!(Unit::from(UnitArg::C), Unit::Celsius);
        assert_eq!(Unit::from(UnitArg::F), Unit::Fahrenheit);
    }
}
