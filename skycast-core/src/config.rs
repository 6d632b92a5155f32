use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::cities;
use crate::model::City;
use crate::units::Unit;

/// Optional user preferences stored on disk.
///
/// Everything here has a sensible default; the dashboard runs fine with no
/// config file at all.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Display name of the city to open the dashboard on,
    /// e.g. "San Diego, CA".
    pub default_city: Option<String>,

    /// Preferred display unit ("celsius" or "fahrenheit").
    pub unit: Option<Unit>,
}

impl Config {
    /// The city the dashboard starts on: the configured default when it
    /// names a known city, otherwise the first entry of the fixed list.
    pub fn initial_city(&self) -> &'static City {
        self.default_city
            .as_deref()
            .and_then(cities::find)
            .unwrap_or(&cities::CITIES[0])
    }

    pub fn initial_unit(&self) -> Unit {
        self.unit.unwrap_or_default()
    }

    /// Read the preferences file, or fall back to defaults when there is
    /// none yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("could not read config file {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("could not parse config file {}", path.display()))
    }

    /// Write the preferences file, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("could not create config directory {}", parent.display()))?;
        }

        let toml = toml::to_string_pretty(self).context("could not serialize configuration")?;

        fs::write(&path, toml)
            .with_context(|| format!("could not write config file {}", path.display()))
    }

    /// Where the preferences file lives, per platform conventions.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fall_back_to_first_city_and_celsius() {
        let cfg = Config::default();
        assert_eq!(cfg.initial_city().name, "San Diego, CA");
        assert_eq!(cfg.initial_unit(), Unit::Celsius);
    }

    #[test]
    fn configured_city_and_unit_are_honored() {
        let cfg = Config {
            default_city: Some("Fresno, CA".to_string()),
            unit: Some(Unit::Fahrenheit),
        };
        assert_eq!(cfg.initial_city().name, "Fresno, CA");
        assert_eq!(cfg.initial_unit(), Unit::Fahrenheit);
    }

    #[test]
    fn unknown_city_name_falls_back_to_first() {
        let cfg = Config {
            default_city: Some("Atlantis".to_string()),
            unit: None,
        };
        assert_eq!(cfg.initial_city().name, "San Diego, CA");
    }

    #[test]
    fn config_roundtrips_through_toml() {
        let cfg = Config {
            default_city: Some("Irvine, CA".to_string()),
            unit: Some(Unit::Fahrenheit),
        };

        let text = toml::to_string_pretty(&cfg).expect("serializes");
        assert!(text.contains("Irvine, CA"));
        assert!(text.contains("fahrenheit"));

        let parsed: Config = toml::from_str(&text).expect("parses back");
        assert_eq!(parsed.default_city.as_deref(), Some("Irvine, CA"));
        assert_eq!(parsed.unit, Some(Unit::Fahrenheit));
    }

    #[test]
    fn empty_file_parses_to_defaults() {
        let parsed: Config = toml::from_str("").expect("empty config parses");
        assert!(parsed.default_city.is_none());
        assert!(parsed.unit.is_none());
    }
}
