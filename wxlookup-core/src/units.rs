use std::{convert::TryFrom, fmt, str::FromStr};

use crate::error::WeatherError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitSystem {
    Metric,
    Imperial,
    Kelvin,
}

/// Display abbreviations for one unit system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitLabels {
    pub temperature: &'static str,
    pub speed: &'static str,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
            UnitSystem::Kelvin => "kelvin",
        }
    }

    pub const fn all() -> &'static [UnitSystem] {
        &[UnitSystem::Metric, UnitSystem::Imperial, UnitSystem::Kelvin]
    }

    pub fn labels(&self) -> UnitLabels {
        match self {
            UnitSystem::Metric => UnitLabels { temperature: "C", speed: "km/h" },
            UnitSystem::Imperial => UnitLabels { temperature: "F", speed: "mp/h" },
            UnitSystem::Kelvin => UnitLabels { temperature: "K", speed: "km/h" },
        }
    }

    /// Value of the OpenWeather `units` query parameter.
    pub fn api_param(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
            UnitSystem::Kelvin => "standard",
        }
    }

    /// Factor turning the API's wind speed into the unit named by [`UnitLabels::speed`].
    ///
    /// OpenWeather reports m/s for `metric` and `standard`, mph for `imperial`.
    pub(crate) fn wind_factor(&self) -> f64 {
        match self {
            UnitSystem::Imperial => 1.0,
            UnitSystem::Metric | UnitSystem::Kelvin => 3.6,
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for UnitSystem {
    type Error = WeatherError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            "kelvin" => Ok(UnitSystem::Kelvin),
            _ => Err(WeatherError::UnknownUnits(value.to_string())),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = WeatherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UnitSystem::try_from(s)
    }
}

/// Map a user-supplied unit system name straight to its display abbreviations.
pub fn unit_labels(input: &str) -> Result<UnitLabels, WeatherError> {
    UnitSystem::try_from(input).map(|units| units.labels())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn maps_known_systems_case_insensitively() {
        let cases = [
            ("metric", "C", "km/h"),
            ("Imperial", "F", "mp/h"),
            ("KELVIN", "K", "km/h"),
        ];

        for (input, temperature, speed) in cases {
            let labels = unit_labels(input).expect("known unit system");
            assert_eq!(labels, UnitLabels { temperature, speed }, "input {input}");
        }
    }

    #[test]
    fn unknown_system_is_an_error() {
        for input in ["", "celsius", "metrics"] {
            let err = unit_labels(input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::NotFound);
        }
    }

    #[test]
    fn as_str_roundtrip() {
        for units in UnitSystem::all() {
            let parsed: UnitSystem = units.as_str().parse().expect("roundtrip should succeed");
            assert_eq!(*units, parsed);
        }
    }

    #[test]
    fn kelvin_requests_standard_units() {
        assert_eq!(UnitSystem::Kelvin.api_param(), "standard");
        assert_eq!(UnitSystem::Imperial.wind_factor(), 1.0);
    }
}
