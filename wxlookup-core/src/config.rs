use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

use crate::{
    provider::openweather::{DEFAULT_BASE_URL, DEFAULT_COUNTRY, DEFAULT_TIMEOUT},
    units::UnitSystem,
};

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// country = "US"
/// default_units = "imperial"
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// OpenWeather API key.
    pub api_key: Option<String>,

    /// Country code appended to geocoding queries. Defaults to "US".
    pub country: Option<String>,

    /// Unit system used when none is given on the command line.
    pub default_units: Option<String>,

    pub timeout_secs: Option<u64>,

    /// Only set in tests or when pointing at a proxy.
    pub base_url: Option<String>,
}

impl Config {
    pub fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                anyhow!(
                    "No OpenWeather API key configured.\n\
                     Hint: run `wxlookup configure` or pass `--api-key <KEY>`."
                )
            })
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key.trim().to_string());
    }

    pub fn country(&self) -> &str {
        self.country.as_deref().unwrap_or(DEFAULT_COUNTRY)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout_secs.map(Duration::from_secs).unwrap_or(DEFAULT_TIMEOUT)
    }

    /// The configured default unit system, if any.
    pub fn default_units(&self) -> Result<Option<UnitSystem>> {
        self.default_units
            .as_deref()
            .map(|s| {
                UnitSystem::try_from(s)
                    .with_context(|| format!("Invalid `default_units` in config: {s}"))
            })
            .transpose()
    }

    pub fn set_default_units(&mut self, units: UnitSystem) {
        self.default_units = Some(units.as_str().to_string());
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Invalid configuration TOML")
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "wxlookup", "wxlookup")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.api_key().unwrap_err();

        assert!(err.to_string().contains("No OpenWeather API key configured"));
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let mut cfg = Config::default();
        cfg.set_api_key("   ".into());

        assert!(cfg.api_key().is_err());
    }

    #[test]
    fn set_api_key_trims() {
        let mut cfg = Config::default();
        cfg.set_api_key(" OPEN_KEY\n".into());

        assert_eq!(cfg.api_key().unwrap(), "OPEN_KEY");
    }

    #[test]
    fn defaults_when_fields_absent() {
        let cfg = Config::from_toml("").unwrap();

        assert_eq!(cfg.country(), "US");
        assert_eq!(cfg.base_url(), DEFAULT_BASE_URL);
        assert_eq!(cfg.timeout(), Duration::from_secs(10));
        assert_eq!(cfg.default_units().unwrap(), None);
    }

    #[test]
    fn parses_full_file() {
        let cfg = Config::from_toml(
            r#"
            api_key = "KEY"
            country = "CA"
            default_units = "Metric"
            timeout_secs = 3
            "#,
        )
        .unwrap();

        assert_eq!(cfg.api_key().unwrap(), "KEY");
        assert_eq!(cfg.country(), "CA");
        assert_eq!(cfg.default_units().unwrap(), Some(UnitSystem::Metric));
        assert_eq!(cfg.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn invalid_default_units_is_reported() {
        let cfg = Config { default_units: Some("rankine".into()), ..Config::default() };
        let err = cfg.default_units().unwrap_err();

        assert!(format!("{err:#}").contains("rankine"));
    }

    #[test]
    fn set_default_units_roundtrips_through_toml() {
        let mut cfg = Config::default();
        cfg.set_default_units(UnitSystem::Kelvin);

        let text = toml::to_string_pretty(&cfg).unwrap();
        let back = Config::from_toml(&text).unwrap();
        assert_eq!(back.default_units().unwrap(), Some(UnitSystem::Kelvin));
    }
}
