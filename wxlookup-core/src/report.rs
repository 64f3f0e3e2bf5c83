//! Plain-text rendering of lookup results. Colouring is left to the caller.

use chrono::NaiveDateTime;

use crate::{
    model::{Report, WeatherObservation},
    units::UnitLabels,
};

pub const RULE_WIDTH: usize = 50;

/// Horizontal rule framing a report.
pub fn rule() -> String {
    "_".repeat(RULE_WIDTH)
}

pub fn render_heading(city: &str, at: NaiveDateTime) -> String {
    format!("The Current Weather Forecast in {city}\n{}", at.format("%A %H:%M"))
}

pub fn render_observation(observation: &WeatherObservation, labels: UnitLabels) -> String {
    let t = labels.temperature;

    format!(
        "Sky Condition: {}\n\
         Temperature: {}{t}\n\
         Feels Like: {}{t}\n\
         High Temp: {}{t}\n\
         Low Temp: {}{t}\n\
         Humidity: {}%\n\
         Pressure: {} hpa\n\
         Wind Speed: {:.1} {}",
        observation.description,
        whole(observation.temperature),
        whole(observation.feels_like),
        whole(observation.temp_max),
        whole(observation.temp_min),
        observation.humidity_pct,
        observation.pressure_hpa,
        observation.wind_speed,
        labels.speed,
    )
}

impl Report {
    pub fn render(&self) -> String {
        render_observation(&self.observation, self.units.labels())
    }

    pub fn render_heading(&self, at: NaiveDateTime) -> String {
        render_heading(&self.location.name, at)
    }
}

/// Nearest integer, ties to even (22.5 -> 22, 23.5 -> 24).
fn whole(value: f64) -> i64 {
    value.round_ties_even() as i64
}
