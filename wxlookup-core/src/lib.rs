//! Core library for the `wxlookup` CLI.
//!
//! This crate defines:
//! - Typed lookup errors with a connect / not-found discriminant
//! - Unit systems and their display labels
//! - The provider abstraction and its OpenWeather implementation
//! - The geocode -> weather lookup pipeline and plain-text rendering
//! - Configuration & credentials handling
//!
//! It is used by `wxlookup-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod provider;
pub mod report;
pub mod units;

pub use config::Config;
pub use error::{ErrorKind, WeatherError};
pub use model::{Location, LocationQuery, Report, WeatherObservation};
pub use pipeline::lookup;
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use units::{UnitLabels, UnitSystem, unit_labels};
