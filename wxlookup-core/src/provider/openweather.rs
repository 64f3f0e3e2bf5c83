use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{
    Deserialize,
    de::{DeserializeOwned, IgnoredAny},
};
use tracing::{debug, info, warn};

use crate::{
    error::WeatherError,
    model::{Location, LocationQuery, WeatherObservation},
    units::UnitSystem,
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
pub const DEFAULT_COUNTRY: &str = "US";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const ZIP_ENDPOINT: &str = "geo/1.0/zip";
const DIRECT_ENDPOINT: &str = "geo/1.0/direct";
const WEATHER_ENDPOINT: &str = "data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    country: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: String, base_url: &str) -> Result<Self> {
        Self::with_options(api_key, base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_options(api_key: String, base_url: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client for OpenWeather")?;

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            http,
        })
    }

    /// Country code appended to every geocoding query.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        query: &[(&str, String)],
    ) -> Result<T, WeatherError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, "sending OpenWeather request");

        let res = self
            .http
            .get(&url)
            .query(query)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|err| {
                warn!(endpoint, error = %err, "OpenWeather request could not be sent");
                WeatherError::connect(endpoint, &err)
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|err| WeatherError::connect(endpoint, &err))?;

        if !status.is_success() {
            match rejection_hint(status) {
                Some(hint) => warn!(endpoint, %status, "OpenWeather request was rejected. {hint}"),
                None => warn!(endpoint, %status, "OpenWeather request was rejected"),
            }
            return Err(WeatherError::not_found(format!(
                "{endpoint} responded with status {status}: {}",
                truncate_body(&body),
            )));
        }

        serde_json::from_str(&body).map_err(|err| {
            warn!(endpoint, error = %err, "unexpected OpenWeather payload");
            WeatherError::not_found(format!("unexpected {endpoint} response: {err}"))
        })
    }

    async fn search_zip(&self, code: &str) -> Result<OwGeocode, WeatherError> {
        self.get_json(ZIP_ENDPOINT, &[("zip", format!("{code},{}", self.country))]).await
    }

    async fn search_city(&self, city: &str, state: &str) -> Result<OwGeocode, WeatherError> {
        let matches: Vec<OwGeocode> = self
            .get_json(DIRECT_ENDPOINT, &[("q", format!("{city},{state},{}", self.country))])
            .await?;

        matches
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::not_found(format!("no place named {city}, {state}")))
    }
}

#[derive(Debug, Deserialize)]
struct OwGeocode {
    name: String,
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    pressure: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    /// Error payloads carry no `name`; requiring it rejects them.
    #[serde(rename = "name")]
    _name: IgnoredAny,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
    wind: OwWind,
}

fn extract_location(raw: OwGeocode) -> Result<Location, WeatherError> {
    if raw.name.trim().is_empty() {
        return Err(WeatherError::not_found("geocode result has no place name"));
    }

    Ok(Location { name: raw.name, latitude: raw.lat, longitude: raw.lon })
}

fn extract_observation(raw: OwCurrentResponse, units: UnitSystem) -> WeatherObservation {
    let description = raw
        .weather
        .first()
        .map(|w| title_case(&w.description))
        .unwrap_or_else(|| "Unknown".to_string());

    let wind_speed = (raw.wind.speed * units.wind_factor() * 10.0).round() / 10.0;

    WeatherObservation {
        temperature: raw.main.temp,
        feels_like: raw.main.feels_like,
        temp_max: raw.main.temp_max,
        temp_min: raw.main.temp_min,
        humidity_pct: raw.main.humidity,
        pressure_hpa: raw.main.pressure.round() as u32,
        description,
        wind_speed,
    }
}

/// "broken clouds" -> "Broken Clouds"
fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn locate(&self, query: &LocationQuery) -> Result<Location, WeatherError> {
        let raw = match query {
            LocationQuery::Zip(code) => self.search_zip(code).await?,
            LocationQuery::City { city, state } => self.search_city(city, state).await?,
        };

        let location = extract_location(raw)?;
        info!(
            %query,
            name = %location.name,
            lat = location.latitude,
            lon = location.longitude,
            "geocode request succeeded"
        );

        Ok(location)
    }

    async fn current(
        &self,
        location: &Location,
        units: UnitSystem,
    ) -> Result<WeatherObservation, WeatherError> {
        let raw: OwCurrentResponse = self
            .get_json(
                WEATHER_ENDPOINT,
                &[
                    ("lat", location.latitude.to_string()),
                    ("lon", location.longitude.to_string()),
                    ("units", units.api_param().to_string()),
                ],
            )
            .await?;

        info!(location = %location.name, %units, "weather request succeeded");
        Ok(extract_observation(raw, units))
    }
}

fn rejection_hint(status: StatusCode) -> Option<&'static str> {
    (status == StatusCode::UNAUTHORIZED).then_some(
        "The API key was refused; run `wxlookup configure` or pass `--api-key <KEY>`.",
    )
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
