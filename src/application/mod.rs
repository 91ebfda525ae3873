// SPDX-License-Identifier: MPL-2.0
//! Application layer - use cases behind the pages.
//!
//! - [`port`]: trait definitions implemented by infrastructure adapters
//! - [`preferences`]: the language preference and its single write path
//! - [`chat`]: transcript state machine, prompt building, question history
//! - [`pest`]: image encoding, vision analysis and the offline fallback
//! - [`weather`]: location resolution and the sequential weather fetch
//! - [`fertilizer`]: the simulated recommendation request
//!
//! Everything async here returns plain futures; the GUI wraps them in
//! `iced::Task::perform`.

pub mod chat;
pub mod fertilizer;
pub mod pest;
pub mod port;
pub mod preferences;
pub mod weather;
