// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects and pure rules of the advisory app.
//!
//! Nothing here touches the network, the filesystem or the GUI. The only
//! external crate in use is `chrono` for timestamps and calendar dates.
//!
//! # Modules
//!
//! - [`advisory`]: crops, soil types and the fertilizer recommendation
//! - [`chat`]: transcript messages and the question history
//! - [`location`]: geographic coordinates
//! - [`market`]: static mandi price list
//! - [`pest`]: pest detections, vision findings and the reference list
//! - [`weather`]: current conditions, soil, forecast and alerts

pub mod advisory;
pub mod chat;
pub mod location;
pub mod market;
pub mod pest;
pub mod weather;
