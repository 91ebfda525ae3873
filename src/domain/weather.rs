// SPDX-License-Identifier: MPL-2.0
//! Weather and soil observations.

use super::location::Coordinates;
use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Weekday};

/// Current conditions at a location.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    /// Air temperature, rounded to whole degrees.
    pub temperature_c: i32,
    pub humidity_pct: Option<i32>,
    pub precipitation_mm: Option<f64>,
}

impl WeatherSnapshot {
    /// Builds a snapshot from raw provider values, rounding where shown as
    /// integers.
    #[must_use]
    pub fn from_raw(temperature_c: f64, humidity_pct: Option<f64>, precipitation_mm: Option<f64>) -> Self {
        Self {
            temperature_c: temperature_c.round() as i32,
            humidity_pct: humidity_pct.map(|h| h.round() as i32),
            precipitation_mm,
        }
    }
}

/// Topsoil readings. Moisture is volumetric (m³/m³).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SoilConditions {
    pub temperature_c: Option<f64>,
    pub moisture_vol: Option<f64>,
}

impl SoilConditions {
    #[must_use]
    pub fn temperature_rounded(&self) -> Option<i32> {
        self.temperature_c.map(|t| t.round() as i32)
    }

    /// Moisture as a whole percentage.
    #[must_use]
    pub fn moisture_percent(&self) -> Option<i32> {
        self.moisture_vol.map(|m| (m * 100.0).round() as i32)
    }

    /// Moisture as a percentage with one decimal, e.g. `"23.4"`.
    #[must_use]
    pub fn moisture_percent_one_decimal(&self) -> Option<String> {
        self.moisture_vol.map(|m| format!("{:.1}", m * 100.0))
    }
}

/// Coarse sky condition derived from a WMO weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherKind {
    Clear,
    Cloudy,
    Rain,
    Other,
}

impl WeatherKind {
    #[must_use]
    pub fn from_code(code: u16) -> Self {
        match code {
            0 => WeatherKind::Clear,
            1..=3 | 45 | 48 => WeatherKind::Cloudy,
            51..=67 | 80..=82 | 95..=99 => WeatherKind::Rain,
            _ => WeatherKind::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub temp_max_c: f64,
    pub temp_min_c: f64,
    pub precipitation_mm: f64,
    pub weather_code: u16,
}

impl DailyForecast {
    #[must_use]
    pub fn kind(&self) -> WeatherKind {
        WeatherKind::from_code(self.weather_code)
    }

    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }
}

/// An active weather warning. Times are unix seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherAlert {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: String,
    pub event: String,
    pub starts_at: i64,
    pub ends_at: i64,
}

impl WeatherAlert {
    #[must_use]
    pub fn starts_local(&self) -> Option<DateTime<Local>> {
        Local.timestamp_opt(self.starts_at, 0).single()
    }

    #[must_use]
    pub fn ends_local(&self) -> Option<DateTime<Local>> {
        Local.timestamp_opt(self.ends_at, 0).single()
    }
}

/// Everything shown on the weather page, fetched for one location.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub coordinates: Coordinates,
    pub current: WeatherSnapshot,
    pub soil: SoilConditions,
    pub forecast: Vec<DailyForecast>,
    pub alerts: Vec<WeatherAlert>,
}
