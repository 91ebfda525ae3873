// SPDX-License-Identifier: MPL-2.0
//! Internationalization support.
//!
//! Translations live in Fluent resources under `assets/i18n/`, embedded into
//! the binary. Lookups go through the build-generated [`Key`] enum so that a
//! message missing from any locale is caught when the crate is compiled.

pub mod fluent;
pub mod language;

pub use fluent::{Dictionary, I18n};
pub use language::Language;

include!(concat!(env!("OUT_DIR"), "/keys.rs"));
