// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! Infrastructure adapters implement these traits; pages and use cases only
//! ever see `Arc<dyn Trait>`.
//!
//! # Available Ports
//!
//! - [`assistant`]: generative text and vision models
//! - [`geolocation`]: best-effort device location
//! - [`speech`]: voice input and read-aloud capability
//! - [`storage`]: small persistent key/value store
//! - [`weather`]: weather and soil data provider
//!
//! # Design Notes
//!
//! - Traits use domain types only (no HTTP or GUI types)
//! - Network-bound methods return a `'static` [`BoxFuture`] so the future can
//!   be handed straight to `iced::Task::perform`
//! - All traits are `Send + Sync`

pub mod assistant;
pub mod geolocation;
pub mod speech;
pub mod storage;
pub mod weather;

pub use futures_util::future::BoxFuture;

pub use assistant::{AssistantError, EncodedImage, TextModel, VisionModel};
pub use geolocation::{GeolocationError, Geolocator};
pub use speech::{SpeechCapability, SpeechError};
pub use storage::{KeyValueStore, StorageError};
pub use weather::{ProviderError, WeatherProvider};
