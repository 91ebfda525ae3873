// SPDX-License-Identifier: MPL-2.0
//! Geolocation adapters.

use crate::application::port::{BoxFuture, GeolocationError, Geolocator};
use crate::domain::location::Coordinates;
use futures_util::FutureExt;
use serde::Deserialize;

/// Looks up an approximate position from the public IP address.
#[derive(Debug, Clone)]
pub struct IpGeolocator {
    client: reqwest::Client,
    url: String,
}

impl IpGeolocator {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: super::http::client(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct IpLookup {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl IpLookup {
    fn coordinates(self) -> Result<Coordinates, GeolocationError> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Ok(Coordinates::new(lat, lon)),
            _ => Err(GeolocationError::Failed("lookup returned no position".to_string())),
        }
    }
}

impl Geolocator for IpGeolocator {
    fn locate(&self) -> BoxFuture<'static, Result<Coordinates, GeolocationError>> {
        let client = self.client.clone();
        let url = self.url.clone();
        async move {
            let response = client
                .get(&url)
                .send()
                .await
                .map_err(|e| GeolocationError::Failed(e.to_string()))?;
            match response.status().as_u16() {
                200..=299 => {}
                401 | 403 => return Err(GeolocationError::Denied),
                code => return Err(GeolocationError::Failed(format!("HTTP {code}"))),
            }
            let lookup: IpLookup = response
                .json()
                .await
                .map_err(|e| GeolocationError::Failed(e.to_string()))?;
            lookup.coordinates()
        }
        .boxed()
    }
}

/// Always reports the same position, or always fails when built with
/// [`FixedGeolocator::unsupported`].
#[derive(Debug, Clone, Copy)]
pub struct FixedGeolocator(Option<Coordinates>);

impl FixedGeolocator {
    #[must_use]
    pub fn at(coordinates: Coordinates) -> Self {
        Self(Some(coordinates))
    }

    #[must_use]
    pub fn unsupported() -> Self {
        Self(None)
    }
}

impl Geolocator for FixedGeolocator {
    fn locate(&self) -> BoxFuture<'static, Result<Coordinates, GeolocationError>> {
        futures_util::future::ready(self.0.ok_or(GeolocationError::Unsupported)).boxed()
    }
}
