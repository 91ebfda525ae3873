// SPDX-License-Identifier: MPL-2.0
//! Localized labels for domain values.

use crate::domain::advisory::{Crop, SoilType};
use crate::domain::market::Trend;
use crate::domain::pest::Severity;
use crate::domain::weather::WeatherKind;
use crate::i18n::Key;
use chrono::Weekday;
use std::fmt;

#[must_use]
pub fn crop(crop: Crop) -> Key {
    match crop {
        Crop::Wheat => Key::CropWheat,
        Crop::Rice => Key::CropRice,
        Crop::Corn => Key::CropCorn,
        Crop::Cotton => Key::CropCotton,
        Crop::Sugarcane => Key::CropSugarcane,
        Crop::Tomato => Key::CropTomato,
        Crop::Potato => Key::CropPotato,
        Crop::Onion => Key::CropOnion,
    }
}

#[must_use]
pub fn soil(soil: SoilType) -> Key {
    match soil {
        SoilType::Clay => Key::SoilClay,
        SoilType::Sandy => Key::SoilSandy,
        SoilType::Loamy => Key::SoilLoamy,
        SoilType::Black => Key::SoilBlack,
        SoilType::Red => Key::SoilRed,
    }
}

#[must_use]
pub fn severity(severity: Severity) -> Key {
    match severity {
        Severity::Low => Key::SeverityLow,
        Severity::Medium => Key::SeverityMedium,
        Severity::High => Key::SeverityHigh,
    }
}

#[must_use]
pub fn weather_kind(kind: WeatherKind) -> Key {
    match kind {
        WeatherKind::Clear => Key::WeatherKindClear,
        WeatherKind::Cloudy => Key::WeatherKindCloudy,
        WeatherKind::Rain => Key::WeatherKindRain,
        WeatherKind::Other => Key::WeatherKindOther,
    }
}

#[must_use]
pub fn weekday(day: Weekday) -> Key {
    match day {
        Weekday::Mon => Key::WeekdayMon,
        Weekday::Tue => Key::WeekdayTue,
        Weekday::Wed => Key::WeekdayWed,
        Weekday::Thu => Key::WeekdayThu,
        Weekday::Fri => Key::WeekdayFri,
        Weekday::Sat => Key::WeekdaySat,
        Weekday::Sun => Key::WeekdaySun,
    }
}

/// Symbol shown next to a price.
#[must_use]
pub const fn trend_marker(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "▲",
        Trend::Down => "▼",
        Trend::Stable => "●",
    }
}

/// A value paired with its display text, for pick lists.
#[derive(Debug, Clone)]
pub struct Labeled<T> {
    pub value: T,
    pub label: String,
}

impl<T: PartialEq> PartialEq for Labeled<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> fmt::Display for Labeled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
