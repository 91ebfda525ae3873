// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Fallback language and theme mode
//! - `[weather]` - Weather endpoint, geolocation endpoint, fallback location
//! - `[assistant]` - Generative model endpoint, model name and API key
//! - `[advisory]` - Simulated recommendation delay
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `FASAL_MITRA_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use fasal_mitra::config;
//!
//! let (config, _warning) = config::load();
//! let policy = config.location_policy();
//! assert!(policy.timeout.as_millis() > 0);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::application::weather::LocationPolicy;
use crate::domain::location::Coordinates;
use crate::error::{Error, Result};
use crate::i18n::Language;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Language code used when no preference has been stored yet
    /// (`en`, `hi`, `pa` or `mr`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Weather provider and location settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherConfig {
    #[serde(default = "default_weather_api_url")]
    pub api_url: String,

    #[serde(default = "default_geolocation_url")]
    pub geolocation_url: String,

    #[serde(default = "default_fallback_latitude")]
    pub fallback_latitude: f64,

    #[serde(default = "default_fallback_longitude")]
    pub fallback_longitude: f64,

    #[serde(default = "default_geolocation_timeout_ms")]
    pub geolocation_timeout_ms: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_url: default_weather_api_url(),
            geolocation_url: default_geolocation_url(),
            fallback_latitude: DEFAULT_FALLBACK_LATITUDE,
            fallback_longitude: DEFAULT_FALLBACK_LONGITUDE,
            geolocation_timeout_ms: DEFAULT_GEOLOCATION_TIMEOUT_MS,
        }
    }
}

/// Generative model settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssistantConfig {
    #[serde(default = "default_assistant_api_url")]
    pub api_url: String,

    #[serde(default = "default_assistant_model")]
    pub model: String,

    /// API key. `GEMINI_API_KEY` overrides this value when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_url: default_assistant_api_url(),
            model: default_assistant_model(),
            api_key: None,
        }
    }
}

/// Static advisory settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdvisoryConfig {
    #[serde(default = "default_recommendation_delay_ms")]
    pub recommendation_delay_ms: u64,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            recommendation_delay_ms: DEFAULT_RECOMMENDATION_DELAY_MS,
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub weather: WeatherConfig,

    #[serde(default)]
    pub assistant: AssistantConfig,

    #[serde(default)]
    pub advisory: AdvisoryConfig,
}

impl Config {
    /// Language used before any preference is stored. Unknown codes fall
    /// back to the built-in default.
    #[must_use]
    pub fn fallback_language(&self) -> Language {
        self.general
            .language
            .as_deref()
            .and_then(Language::from_code)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn location_policy(&self) -> LocationPolicy {
        LocationPolicy {
            fallback: Coordinates::new(self.weather.fallback_latitude, self.weather.fallback_longitude),
            timeout: Duration::from_millis(self.weather.geolocation_timeout_ms.clamp(
                MIN_GEOLOCATION_TIMEOUT_MS,
                MAX_GEOLOCATION_TIMEOUT_MS,
            )),
        }
    }

    #[must_use]
    pub fn recommendation_delay(&self) -> Duration {
        Duration::from_millis(
            self.advisory
                .recommendation_delay_ms
                .min(MAX_RECOMMENDATION_DELAY_MS),
        )
    }

    /// API key from the environment or the file, whichever is set first.
    #[must_use]
    pub fn assistant_api_key(&self) -> Option<String> {
        resolve_api_key(std::env::var(ENV_API_KEY).ok(), self.assistant.api_key.clone())
    }
}

fn resolve_api_key(from_env: Option<String>, from_file: Option<String>) -> Option<String> {
    from_env
        .filter(|key| !key.trim().is_empty())
        .or(from_file)
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_weather_api_url() -> String {
    DEFAULT_WEATHER_API_URL.to_string()
}

fn default_geolocation_url() -> String {
    DEFAULT_GEOLOCATION_URL.to_string()
}

fn default_fallback_latitude() -> f64 {
    DEFAULT_FALLBACK_LATITUDE
}

fn default_fallback_longitude() -> f64 {
    DEFAULT_FALLBACK_LONGITUDE
}

fn default_geolocation_timeout_ms() -> u64 {
    DEFAULT_GEOLOCATION_TIMEOUT_MS
}

fn default_assistant_api_url() -> String {
    DEFAULT_ASSISTANT_API_URL.to_string()
}

fn default_assistant_model() -> String {
    DEFAULT_ASSISTANT_MODEL.to_string()
}

fn default_recommendation_delay_ms() -> u64 {
    DEFAULT_RECOMMENDATION_DELAY_MS
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Path Helpers
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning describing what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("{}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
