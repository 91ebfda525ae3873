// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Weather**: provider endpoints, fallback location, geolocation timeout
//! - **Assistant**: generative model endpoint and name
//! - **Advisory**: simulated recommendation delay

// ==========================================================================
// Weather Defaults
// ==========================================================================

/// Open-Meteo forecast endpoint.
pub const DEFAULT_WEATHER_API_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// IP-based geolocation endpoint answering with `latitude`/`longitude`.
pub const DEFAULT_GEOLOCATION_URL: &str = "https://ipapi.co/json/";

/// Latitude used when the location cannot be determined (New Delhi).
pub const DEFAULT_FALLBACK_LATITUDE: f64 = 28.6139;

/// Longitude used when the location cannot be determined (New Delhi).
pub const DEFAULT_FALLBACK_LONGITUDE: f64 = 77.209;

/// Maximum time allowed for a geolocation lookup (in milliseconds).
pub const DEFAULT_GEOLOCATION_TIMEOUT_MS: u64 = 8000;

/// Minimum geolocation timeout (in milliseconds).
pub const MIN_GEOLOCATION_TIMEOUT_MS: u64 = 500;

/// Maximum geolocation timeout (in milliseconds).
pub const MAX_GEOLOCATION_TIMEOUT_MS: u64 = 60_000;

// ==========================================================================
// Assistant Defaults
// ==========================================================================

/// Base URL of the generative language API.
pub const DEFAULT_ASSISTANT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used for both chat and vision requests.
pub const DEFAULT_ASSISTANT_MODEL: &str = "gemini-1.5-flash";

/// Environment variable holding the API key. Takes precedence over the file.
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";

/// Keys of this length or shorter are treated as not configured.
pub const MIN_API_KEY_LEN: usize = 10;

// ==========================================================================
// Advisory Defaults
// ==========================================================================

/// Simulated processing time of a fertilizer recommendation (in milliseconds).
pub const DEFAULT_RECOMMENDATION_DELAY_MS: u64 = 1500;

/// Maximum simulated delay (in milliseconds).
pub const MAX_RECOMMENDATION_DELAY_MS: u64 = 10_000;
