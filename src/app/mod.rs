// SPDX-License-Identifier: MPL-2.0
//! Application root: language preference, routing and the mounted page.
//!
//! The `App` struct wires the Fluent dictionary, the preference store and
//! the service adapters together. Pages report what they need through
//! events; `update` turns those into tasks against the ports and routes the
//! results back to the page that asked, as long as it is still mounted.

mod message;
pub mod paths;
pub mod screen;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::{MountId, Page, PageMessage, Route};

use crate::application::port::{
    Geolocator, KeyValueStore, SpeechCapability, TextModel, VisionModel, WeatherProvider,
};
use crate::application::preferences::PreferenceStore;
use crate::application::weather::LocationPolicy;
use crate::config::{self, Config};
use crate::i18n::{I18n, Key, Language};
use crate::infrastructure::{
    DisabledSpeech, FileStore, GeminiClient, IpGeolocator, MemoryStore, OpenMeteoClient,
};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;
pub const MIN_WINDOW_WIDTH: u32 = 420;
pub const MIN_WINDOW_HEIGHT: u32 = 640;

/// Adapters behind every port, plus the tunables the use cases need.
#[derive(Clone)]
pub struct Services {
    pub weather: Arc<dyn WeatherProvider>,
    pub geolocator: Arc<dyn Geolocator>,
    pub text_model: Arc<dyn TextModel>,
    pub vision_model: Arc<dyn VisionModel>,
    pub store: Arc<dyn KeyValueStore>,
    pub speech: Arc<dyn SpeechCapability>,
    pub location_policy: LocationPolicy,
    pub recommendation_delay: Duration,
}

impl fmt::Debug for Services {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Services")
            .field("location_policy", &self.location_policy)
            .field("recommendation_delay", &self.recommendation_delay)
            .finish_non_exhaustive()
    }
}

impl Services {
    /// Production adapters configured from `config`.
    #[must_use]
    pub fn from_config(config: &Config, store: Arc<dyn KeyValueStore>) -> Self {
        let gemini = Arc::new(GeminiClient::new(
            config.assistant.api_url.clone(),
            config.assistant.model.clone(),
            config.assistant_api_key(),
        ));
        Self {
            weather: Arc::new(OpenMeteoClient::new(config.weather.api_url.clone())),
            geolocator: Arc::new(IpGeolocator::new(config.weather.geolocation_url.clone())),
            text_model: gemini.clone(),
            vision_model: gemini,
            store,
            speech: Arc::new(DisabledSpeech),
            location_policy: config.location_policy(),
            recommendation_delay: config.recommendation_delay(),
        }
    }
}

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    preferences: PreferenceStore,
    services: Services,
    theme_mode: ThemeMode,
    mount: MountId,
    page: Page,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("language", &self.preferences.get())
            .field("route", &self.page.route())
            .field("mount", &self.mount)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Loads configuration and storage, then mounts the start page.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!(%warning, "using default configuration");
        }

        let store: Arc<dyn KeyValueStore> = match FileStore::open_default(None) {
            Some((store, warning)) => {
                if let Some(warning) = warning {
                    tracing::warn!(%warning, "starting with empty local state");
                }
                tracing::info!(path = %store.path().display(), "using local state file");
                Arc::new(store)
            }
            None => {
                tracing::warn!("no data directory available, preferences will not persist");
                Arc::new(MemoryStore::default())
            }
        };

        let mut preferences = PreferenceStore::load(store.clone(), config.fallback_language());
        if let Some(code) = flags.lang.as_deref() {
            match Language::from_code(code) {
                Some(language) => preferences.override_for_session(language),
                None => tracing::warn!(%code, "ignoring unsupported --lang value"),
            }
        }

        let start = match flags.route.as_deref() {
            None => Route::Home,
            Some(path) => Route::from_path(path).unwrap_or_else(|| {
                tracing::warn!(%path, "ignoring unknown --route value");
                Route::Home
            }),
        };

        let services = Services::from_config(&config, store);
        Self::starting_at(services, preferences, config.general.theme_mode, start)
    }

    /// Builds the app around explicit services and mounts the home page.
    #[must_use]
    pub fn with_services(
        services: Services,
        preferences: PreferenceStore,
        theme_mode: ThemeMode,
    ) -> (Self, Task<Message>) {
        Self::starting_at(services, preferences, theme_mode, Route::Home)
    }

    /// Builds the app around explicit services and mounts `start`.
    #[must_use]
    pub fn starting_at(
        services: Services,
        preferences: PreferenceStore,
        theme_mode: ThemeMode,
        start: Route,
    ) -> (Self, Task<Message>) {
        let mut app = Self {
            i18n: I18n::new(),
            preferences,
            services,
            theme_mode,
            mount: MountId::default(),
            page: Page::Home(Default::default()),
        };
        let task = app.navigate(start, None);
        (app, task)
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.preferences.get()
    }

    #[must_use]
    pub fn route(&self) -> Route {
        self.page.route()
    }

    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    #[must_use]
    pub fn mount(&self) -> MountId {
        self.mount
    }

    /// Window title: the app name in the active language.
    #[must_use]
    pub fn title(&self) -> String {
        self.i18n.resolve(self.preferences.get()).tr(Key::AppName)
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            dict: self.i18n.resolve(self.preferences.get()),
            page: &self.page,
            mount: self.mount,
            speech_available: self.services.speech.is_available(),
        })
    }
}
