// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::screen::{MountId, PageMessage};
use crate::ui::{bottom_nav, header};

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    BottomNav(bottom_nav::Message),
    /// A message for the page mounted as `MountId`. Dropped if that page is
    /// no longer mounted.
    Page(MountId, PageMessage),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Language code for this session only (`en`, `hi`, `pa`, `mr`).
    pub lang: Option<String>,
    /// Path of the page to open first, e.g. `/weather`.
    pub route: Option<String>,
}
