use anyhow::{Context, bail};
use chrono::Local;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Select};
use wxlookup_core::{Config, LocationQuery, UnitSystem, lookup, provider_from_config};

use crate::{interactive, output};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "wxlookup",
    version,
    about = "Look up current weather by US ZIP code or city",
    long_about = "Look up current weather by US ZIP code or city.\n\n\
                  Locations are geocoded and observed through the OpenWeather API. \
                  Run without a subcommand for an interactive session."
)]
pub struct Cli {
    /// OpenWeather API key; overrides the configured key for this run.
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prompt for lookups until you choose to stop (default).
    Interactive,

    /// Show current weather for a ZIP code.
    Zip {
        /// ZIP code, e.g. 10001.
        code: String,

        /// metric, imperial or kelvin; falls back to the configured default.
        #[arg(long, short)]
        units: Option<UnitSystem>,
    },

    /// Show current weather for a city.
    City {
        /// City name, e.g. "New York".
        city: String,

        /// State abbreviation, e.g. NY.
        state: String,

        /// metric, imperial or kelvin; falls back to the configured default.
        #[arg(long, short)]
        units: Option<UnitSystem>,
    },

    /// Store an API key and default unit system.
    Configure,

    /// Print the location of the config file.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let command = self.command.unwrap_or(Command::Interactive);
        if let Command::ConfigPath = command {
            println!("{}", Config::config_file_path()?.display());
            return Ok(());
        }

        let mut config = Config::load()?;
        if let Some(key) = self.api_key {
            config.set_api_key(key);
        }

        match command {
            Command::Interactive => interactive::run(&config).await,
            Command::Zip { code, units } => {
                one_shot(&config, LocationQuery::zip(code), units).await
            }
            Command::City { city, state, units } => {
                one_shot(&config, LocationQuery::city(city, state), units).await
            }
            Command::Configure => configure(config),
            Command::ConfigPath => Ok(()),
        }
    }
}

async fn one_shot(
    config: &Config,
    query: LocationQuery,
    units: Option<UnitSystem>,
) -> anyhow::Result<()> {
    let units = match units {
        Some(units) => units,
        None => config.default_units()?.unwrap_or(UnitSystem::Imperial),
    };

    let provider = provider_from_config(config)?;

    let report = lookup(provider.as_ref(), &query, units).await.map_err(|err| {
        let message = output::failure_message(err.kind());
        anyhow::Error::new(err).context(message)
    })?;

    output::print_report(&report, Local::now().naive_local());
    Ok(())
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()
        .context("API key prompt was aborted")?;

    if api_key.trim().is_empty() {
        bail!("An API key is required; nothing was saved.");
    }
    config.set_api_key(api_key);

    let units = Select::new("Default unit system:", UnitSystem::all().to_vec())
        .prompt()
        .context("Unit system prompt was aborted")?;
    config.set_default_units(units);

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}
