use tracing::debug;

use crate::{
    error::WeatherError,
    model::{LocationQuery, Report},
    provider::WeatherProvider,
    units::UnitSystem,
};

/// Geocode `query`, then fetch current conditions there in `units`.
///
/// The first failing stage ends the lookup; its error is returned as-is.
pub async fn lookup(
    provider: &dyn WeatherProvider,
    query: &LocationQuery,
    units: UnitSystem,
) -> Result<Report, WeatherError> {
    debug!(%query, %units, "starting weather lookup");

    let location = provider.locate(query).await?;
    let observation = provider.current(&location, units).await?;

    Ok(Report { location, observation, units })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ErrorKind,
        model::{Location, WeatherObservation},
    };
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Clone, Copy)]
    enum Fail {
        Nothing,
        LocateConnect,
        LocateNotFound,
        CurrentConnect,
    }

    #[derive(Debug)]
    struct FakeProvider {
        fail: Fail,
        current_calls: AtomicUsize,
    }

    impl FakeProvider {
        fn new(fail: Fail) -> Self {
            Self { fail, current_calls: AtomicUsize::new(0) }
        }
    }

    fn connect_error() -> WeatherError {
        WeatherError::Connect { endpoint: "test", message: "refused".into() }
    }

    #[async_trait]
    impl WeatherProvider for FakeProvider {
        async fn locate(&self, _query: &LocationQuery) -> Result<Location, WeatherError> {
            match self.fail {
                Fail::LocateConnect => Err(connect_error()),
                Fail::LocateNotFound => Err(WeatherError::not_found("no such place")),
                _ => Ok(Location { name: "Springfield".into(), latitude: 39.8, longitude: -89.6 }),
            }
        }

        async fn current(
            &self,
            _location: &Location,
            _units: UnitSystem,
        ) -> Result<WeatherObservation, WeatherError> {
            self.current_calls.fetch_add(1, Ordering::SeqCst);
            if let Fail::CurrentConnect = self.fail {
                return Err(connect_error());
            }

            Ok(WeatherObservation {
                temperature: 21.4,
                feels_like: 20.0,
                temp_max: 23.0,
                temp_min: 18.0,
                humidity_pct: 55,
                pressure_hpa: 1012,
                description: "Clear Sky".into(),
                wind_speed: 4.0,
            })
        }
    }

    #[tokio::test]
    async fn successful_lookup_builds_report() {
        let provider = FakeProvider::new(Fail::Nothing);
        let report = lookup(&provider, &LocationQuery::zip("62701"), UnitSystem::Metric)
            .await
            .unwrap();

        assert_eq!(report.location.name, "Springfield");
        assert_eq!(report.units, UnitSystem::Metric);
        assert_eq!(report.observation.humidity_pct, 55);
    }

    #[tokio::test]
    async fn geocode_connect_failure_skips_weather_fetch() {
        let provider = FakeProvider::new(Fail::LocateConnect);
        let err = lookup(&provider, &LocationQuery::zip("62701"), UnitSystem::Metric)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Connect);
        assert_eq!(provider.current_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn geocode_not_found_propagates() {
        let provider = FakeProvider::new(Fail::LocateNotFound);
        let err = lookup(&provider, &LocationQuery::city("Nowhere", "ZZ"), UnitSystem::Imperial)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(provider.current_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn weather_connect_failure_propagates() {
        let provider = FakeProvider::new(Fail::CurrentConnect);
        let err = lookup(&provider, &LocationQuery::zip("62701"), UnitSystem::Kelvin)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Connect);
        assert_eq!(provider.current_calls.load(Ordering::SeqCst), 1);
    }
}
