// SPDX-License-Identifier: MPL-2.0
//! Device location port.

use super::BoxFuture;
use crate::domain::location::Coordinates;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeolocationError {
    /// No location source is available on this machine.
    Unsupported,
    /// The user or system refused to share a location.
    Denied,
    /// The lookup did not finish in time.
    Timeout,
    /// The lookup failed for another reason.
    Failed(String),
}

impl fmt::Display for GeolocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeolocationError::Unsupported => write!(f, "geolocation is not supported"),
            GeolocationError::Denied => write!(f, "geolocation was denied"),
            GeolocationError::Timeout => write!(f, "geolocation timed out"),
            GeolocationError::Failed(msg) => write!(f, "geolocation failed: {msg}"),
        }
    }
}

impl std::error::Error for GeolocationError {}

/// Resolves the current position.
pub trait Geolocator: Send + Sync {
    fn locate(&self) -> BoxFuture<'static, Result<Coordinates, GeolocationError>>;
}
