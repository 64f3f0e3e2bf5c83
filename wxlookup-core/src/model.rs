use std::fmt;

use crate::units::UnitSystem;

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationQuery {
    Zip(String),
    City { city: String, state: String },
}

impl LocationQuery {
    pub fn zip(code: impl Into<String>) -> Self {
        LocationQuery::Zip(code.into().trim().to_string())
    }

    pub fn city(city: impl Into<String>, state: impl Into<String>) -> Self {
        LocationQuery::City {
            city: city.into().trim().to_string(),
            state: state.into().trim().to_string(),
        }
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationQuery::Zip(code) => write!(f, "ZIP {code}"),
            LocationQuery::City { city, state } => write!(f, "{city}, {state}"),
        }
    }
}

/// A geocoded place.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Current conditions at a [`Location`], already in the requested unit system.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherObservation {
    pub temperature: f64,
    pub feels_like: f64,
    pub temp_max: f64,
    pub temp_min: f64,
    pub humidity_pct: u8,
    pub pressure_hpa: u32,
    pub description: String,
    pub wind_speed: f64,
}

/// Successful result of a full lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub location: Location,
    pub observation: WeatherObservation,
    pub units: UnitSystem,
}
