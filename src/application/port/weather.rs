// SPDX-License-Identifier: MPL-2.0
//! Weather data provider port.

use super::BoxFuture;
use crate::domain::location::Coordinates;
use crate::domain::weather::{DailyForecast, SoilConditions, WeatherAlert, WeatherSnapshot};
use std::fmt;

/// Failure of a single provider call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider answered with a non-success status code.
    Status(u16),
    /// The request never completed.
    Transport(String),
    /// The body did not have the expected shape.
    Decode(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Status(code) => write!(f, "provider returned HTTP {code}"),
            ProviderError::Transport(msg) => write!(f, "provider request failed: {msg}"),
            ProviderError::Decode(msg) => write!(f, "provider response invalid: {msg}"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Weather, soil, forecast and alert data for a location.
pub trait WeatherProvider: Send + Sync {
    fn current(&self, at: Coordinates) -> BoxFuture<'static, Result<WeatherSnapshot, ProviderError>>;

    fn soil(&self, at: Coordinates) -> BoxFuture<'static, Result<SoilConditions, ProviderError>>;

    /// Daily forecast for the next seven days, in date order.
    fn forecast(&self, at: Coordinates)
        -> BoxFuture<'static, Result<Vec<DailyForecast>, ProviderError>>;

    /// Currently active alerts. An empty list means none.
    fn alerts(&self, at: Coordinates) -> BoxFuture<'static, Result<Vec<WeatherAlert>, ProviderError>>;
}
