// SPDX-License-Identifier: MPL-2.0
//! Location resolution and the weather page fetch.

use crate::application::port::{GeolocationError, Geolocator, ProviderError, WeatherProvider};
use crate::domain::location::Coordinates;
use crate::domain::weather::{SoilConditions, WeatherReport};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// How to resolve the location used for weather calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationPolicy {
    /// Used when geolocation fails, is denied or times out.
    pub fallback: Coordinates,
    pub timeout: Duration,
}

/// Asks the geolocator, bounded by the policy timeout. Invalid coordinates
/// count as a failure.
///
/// # Errors
///
/// Returns the geolocator error, or [`GeolocationError::Timeout`] when the
/// lookup outlives the policy timeout.
pub async fn locate_strict(
    geolocator: Arc<dyn Geolocator>,
    policy: LocationPolicy,
) -> Result<Coordinates, GeolocationError> {
    match tokio::time::timeout(policy.timeout, geolocator.locate()).await {
        Ok(Ok(coords)) if coords.is_valid() => Ok(coords),
        Ok(Ok(coords)) => Err(GeolocationError::Failed(format!(
            "invalid coordinates {}, {}",
            coords.latitude(),
            coords.longitude()
        ))),
        Ok(Err(err)) => Err(err),
        Err(_) => Err(GeolocationError::Timeout),
    }
}

/// Like [`locate_strict`], but falls back to the policy location. Never fails.
pub async fn resolve_coordinates(geolocator: Arc<dyn Geolocator>, policy: LocationPolicy) -> Coordinates {
    match locate_strict(geolocator, policy).await {
        Ok(coords) => coords,
        Err(err) => {
            tracing::debug!(%err, "geolocation failed, using fallback");
            policy.fallback
        }
    }
}

/// Fetches current conditions, soil, forecast and alerts, one after the
/// other, for the resolved location.
///
/// # Errors
///
/// Stops at the first failing call and returns its error; nothing partial is
/// kept and nothing is retried.
pub async fn load_report(
    provider: Arc<dyn WeatherProvider>,
    geolocator: Arc<dyn Geolocator>,
    policy: LocationPolicy,
) -> Result<WeatherReport, ProviderError> {
    let coordinates = resolve_coordinates(geolocator, policy).await;
    let current = provider.current(coordinates).await?;
    let soil = provider.soil(coordinates).await?;
    let forecast = provider.forecast(coordinates).await?;
    let alerts = provider.alerts(coordinates).await?;
    Ok(WeatherReport {
        coordinates,
        current,
        soil,
        forecast,
        alerts,
    })
}

/// Why the soil readings could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoilLookupError {
    Location(GeolocationError),
    Provider(ProviderError),
}

impl fmt::Display for SoilLookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoilLookupError::Location(err) => write!(f, "{err}"),
            SoilLookupError::Provider(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SoilLookupError {}

impl From<GeolocationError> for SoilLookupError {
    fn from(err: GeolocationError) -> Self {
        SoilLookupError::Location(err)
    }
}

impl From<ProviderError> for SoilLookupError {
    fn from(err: ProviderError) -> Self {
        SoilLookupError::Provider(err)
    }
}

/// Soil readings for the device location. Unlike [`load_report`], there is no
/// fallback location.
///
/// # Errors
///
/// Returns the geolocation failure (no provider call is made) or the
/// provider error. The soil page shows dashes in both cases.
pub async fn load_soil(
    provider: Arc<dyn WeatherProvider>,
    geolocator: Arc<dyn Geolocator>,
    policy: LocationPolicy,
) -> Result<SoilConditions, SoilLookupError> {
    let coordinates = locate_strict(geolocator, policy).await?;
    Ok(provider.soil(coordinates).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::BoxFuture;
    use crate::domain::weather::{DailyForecast, WeatherAlert, WeatherSnapshot};
    use futures_util::FutureExt;
    use std::sync::Mutex;

    fn policy() -> LocationPolicy {
        LocationPolicy {
            fallback: Coordinates::new(28.6139, 77.209),
            timeout: Duration::from_millis(50),
        }
    }

    struct FailingLocator;

    impl Geolocator for FailingLocator {
        fn locate(&self) -> BoxFuture<'static, Result<Coordinates, GeolocationError>> {
            async { Err(GeolocationError::Denied) }.boxed()
        }
    }

    struct HangingLocator;

    impl Geolocator for HangingLocator {
        fn locate(&self) -> BoxFuture<'static, Result<Coordinates, GeolocationError>> {
            futures_util::future::pending().boxed()
        }
    }

    struct FixedLocator(Coordinates);

    impl Geolocator for FixedLocator {
        fn locate(&self) -> BoxFuture<'static, Result<Coordinates, GeolocationError>> {
            let coords = self.0;
            async move { Ok(coords) }.boxed()
        }
    }

    /// Records every call and fails the one named in `fail_on`.
    #[derive(Default)]
    struct RecordingProvider {
        calls: Mutex<Vec<(&'static str, Coordinates)>>,
        fail_on: Option<&'static str>,
    }

    impl RecordingProvider {
        fn record(&self, name: &'static str, at: Coordinates) -> Result<(), ProviderError> {
            self.calls.lock().expect("lock").push((name, at));
            if self.fail_on == Some(name) {
                Err(ProviderError::Status(500))
            } else {
                Ok(())
            }
        }
    }

    impl WeatherProvider for RecordingProvider {
        fn current(&self, at: Coordinates) -> BoxFuture<'static, Result<WeatherSnapshot, ProviderError>> {
            let result = self
                .record("current", at)
                .map(|()| WeatherSnapshot::from_raw(30.2, Some(40.0), Some(0.0)));
            async move { result }.boxed()
        }

        fn soil(&self, at: Coordinates) -> BoxFuture<'static, Result<SoilConditions, ProviderError>> {
            let result = self.record("soil", at).map(|()| SoilConditions::default());
            async move { result }.boxed()
        }

        fn forecast(&self, at: Coordinates) -> BoxFuture<'static, Result<Vec<DailyForecast>, ProviderError>> {
            let result = self.record("forecast", at).map(|()| Vec::new());
            async move { result }.boxed()
        }

        fn alerts(&self, at: Coordinates) -> BoxFuture<'static, Result<Vec<WeatherAlert>, ProviderError>> {
            let result = self.record("alerts", at).map(|()| Vec::new());
            async move { result }.boxed()
        }
    }

    #[tokio::test]
    async fn failed_geolocation_uses_fallback_for_every_call() {
        let provider = Arc::new(RecordingProvider::default());
        let report = load_report(provider.clone(), Arc::new(FailingLocator), policy())
            .await
            .expect("report loads");

        assert_eq!(report.coordinates, policy().fallback);
        let calls = provider.calls.lock().expect("lock").clone();
        let names: Vec<_> = calls.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["current", "soil", "forecast", "alerts"]);
        assert!(calls.iter().all(|(_, at)| *at == policy().fallback));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_geolocation_times_out_to_fallback() {
        let coords = resolve_coordinates(Arc::new(HangingLocator), policy()).await;
        assert_eq!(coords, policy().fallback);
    }

    #[tokio::test]
    async fn located_coordinates_are_used() {
        let here = Coordinates::new(18.52, 73.85);
        let provider = Arc::new(RecordingProvider::default());
        let report = load_report(provider, Arc::new(FixedLocator(here)), policy())
            .await
            .expect("report loads");
        assert_eq!(report.coordinates, here);
        assert_eq!(report.current.temperature_c, 30);
    }

    #[tokio::test]
    async fn any_failure_aborts_the_report() {
        for step in ["current", "soil", "forecast", "alerts"] {
            let provider = Arc::new(RecordingProvider {
                fail_on: Some(step),
                ..RecordingProvider::default()
            });
            let result = load_report(provider.clone(), Arc::new(FailingLocator), policy()).await;
            assert_eq!(result, Err(ProviderError::Status(500)), "step {step}");
            let last = provider.calls.lock().expect("lock").last().map(|(name, _)| *name);
            assert_eq!(last, Some(step), "no call after the failing {step}");
        }
    }

    #[tokio::test]
    async fn soil_needs_one_call_at_the_device_location() {
        let here = Coordinates::new(30.9, 75.85);
        let provider = Arc::new(RecordingProvider::default());
        let soil = load_soil(provider.clone(), Arc::new(FixedLocator(here)), policy()).await;
        assert_eq!(soil, Ok(SoilConditions::default()));
        assert_eq!(*provider.calls.lock().expect("lock"), [("soil", here)]);
    }

    #[tokio::test]
    async fn soil_without_location_skips_the_provider() {
        let provider = Arc::new(RecordingProvider::default());
        let soil = load_soil(provider.clone(), Arc::new(FailingLocator), policy()).await;
        assert_eq!(soil, Err(SoilLookupError::Location(GeolocationError::Denied)));
        assert!(provider.calls.lock().expect("lock").is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn soil_lookup_times_out_without_fallback() {
        let provider = Arc::new(RecordingProvider::default());
        let soil = load_soil(provider.clone(), Arc::new(HangingLocator), policy()).await;
        assert_eq!(soil, Err(SoilLookupError::Location(GeolocationError::Timeout)));
        assert!(provider.calls.lock().expect("lock").is_empty());
    }

    #[tokio::test]
    async fn soil_provider_failure_is_reported() {
        let provider = Arc::new(RecordingProvider {
            fail_on: Some("soil"),
            ..RecordingProvider::default()
        });
        let soil = load_soil(provider, Arc::new(FixedLocator(Coordinates::new(30.9, 75.85))), policy()).await;
        assert_eq!(soil, Err(SoilLookupError::Provider(ProviderError::Status(500))));
    }

    #[tokio::test]
    async fn invalid_coordinates_are_rejected_by_strict_lookup() {
        let bogus = Coordinates::new(f64::NAN, 0.0);
        let result = locate_strict(Arc::new(FixedLocator(bogus)), policy()).await;
        assert!(matches!(result, Err(GeolocationError::Failed(_))));
    }
}
