// SPDX-License-Identifier: MPL-2.0
//! Routes and the state of the mounted page.

use crate::ui::pages::{chat, home, pest, soil, weather};

/// Destinations the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    SoilFertilizer,
    PestDetection,
    Weather,
    Market,
    Chat,
    Profile,
}

impl Route {
    pub const ALL: [Route; 7] = [
        Route::Home,
        Route::SoilFertilizer,
        Route::PestDetection,
        Route::Weather,
        Route::Market,
        Route::Chat,
        Route::Profile,
    ];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::SoilFertilizer => "/soil-fertilizer",
            Route::PestDetection => "/pest-detection",
            Route::Weather => "/weather",
            Route::Market => "/market",
            Route::Chat => "/chat",
            Route::Profile => "/profile",
        }
    }

    /// Exact path match; anything else is not a route.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

/// Identifies one mount of a page. Every navigation gets a new id so replies
/// addressed to a page that was since dropped can be recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MountId(u64);

impl MountId {
    #[must_use]
    pub fn next(self) -> Self {
        MountId(self.0.wrapping_add(1))
    }
}

/// State of the one mounted page.
#[derive(Debug)]
pub enum Page {
    Home(home::State),
    SoilFertilizer(soil::State),
    PestDetection(pest::State),
    Weather(weather::State),
    Market,
    Chat(chat::State),
    Profile,
}

impl Page {
    #[must_use]
    pub fn route(&self) -> Route {
        match self {
            Page::Home(_) => Route::Home,
            Page::SoilFertilizer(_) => Route::SoilFertilizer,
            Page::PestDetection(_) => Route::PestDetection,
            Page::Weather(_) => Route::Weather,
            Page::Market => Route::Market,
            Page::Chat(_) => Route::Chat,
            Page::Profile => Route::Profile,
        }
    }
}

/// Messages addressed to the mounted page.
#[derive(Debug, Clone)]
pub enum PageMessage {
    Home(home::Message),
    SoilFertilizer(soil::Message),
    PestDetection(pest::Message),
    Weather(weather::Message),
    Chat(chat::Message),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn only_exact_paths_match() {
        assert_eq!(Route::from_path("/weather/"), None);
        assert_eq!(Route::from_path("/Weather"), None);
        assert_eq!(Route::from_path(""), None);
    }

    #[test]
    fn mount_ids_advance() {
        let first = MountId::default();
        assert_ne!(first, first.next());
        assert_eq!(first.next(), first.next());
    }
}
