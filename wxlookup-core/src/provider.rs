use crate::{
    Config,
    error::WeatherError,
    model::{Location, LocationQuery, WeatherObservation},
    provider::openweather::OpenWeatherProvider,
    units::UnitSystem,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// A source of geocoding and current-weather data.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Resolve a ZIP code or city/state pair to coordinates.
    async fn locate(&self, query: &LocationQuery) -> Result<Location, WeatherError>;

    /// Fetch current conditions at `location`, expressed in `units`.
    async fn current(
        &self,
        location: &Location,
        units: UnitSystem,
    ) -> Result<WeatherObservation, WeatherError>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key()?;

    let provider = OpenWeatherProvider::with_options(
        api_key.to_owned(),
        config.base_url(),
        config.timeout(),
    )?
    .with_country(config.country());

    Ok(Box::new(provider))
}
