// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`open_meteo`]: weather and soil data over HTTP (implements [`WeatherProvider`])
//! - [`gemini`]: generative text and vision (implements [`TextModel`], [`VisionModel`])
//! - [`geolocation`]: IP-based lookup and a fixed position (implement [`Geolocator`])
//! - [`storage`]: CBOR file store and in-memory store (implement [`KeyValueStore`])
//! - [`speech`]: disabled voice capability (implements [`SpeechCapability`])
//!
//! [`WeatherProvider`]: crate::application::port::WeatherProvider
//! [`TextModel`]: crate::application::port::TextModel
//! [`VisionModel`]: crate::application::port::VisionModel
//! [`Geolocator`]: crate::application::port::Geolocator
//! [`KeyValueStore`]: crate::application::port::KeyValueStore
//! [`SpeechCapability`]: crate::application::port::SpeechCapability

pub mod gemini;
pub mod geolocation;
mod http;
pub mod open_meteo;
pub mod speech;
pub mod storage;

pub use gemini::GeminiClient;
pub use geolocation::{FixedGeolocator, IpGeolocator};
pub use open_meteo::OpenMeteoClient;
pub use speech::DisabledSpeech;
pub use storage::{FileStore, MemoryStore};
