// SPDX-License-Identifier: MPL-2.0
//! One module per route.
//!
//! Each page owns its interaction state and follows the same shape as the
//! shell components: a `Message` enum, an `update` that returns an `Event`
//! for the application to act on, and a `view` taking a [`ViewContext`].
//! Pages never call ports themselves; remote work is requested through
//! events and its results come back as page messages.

pub mod chat;
pub mod home;
pub mod market;
pub mod pest;
pub mod profile;
pub mod soil;
pub mod weather;

use crate::i18n::Dictionary;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{scrollable, Column, Container, Text};
use iced::{Element, Length};

/// Contextual data every page needs to render.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub dict: Dictionary<'a>,
    /// Whether voice input and read-aloud controls are usable.
    pub speech_available: bool,
}

/// Rounded surface grouping one section of a page.
pub(crate) fn card<'a, M: 'a>(content: impl Into<Element<'a, M>>) -> Element<'a, M> {
    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

pub(crate) fn title<'a, M: 'a>(label: String) -> Element<'a, M> {
    Text::new(label).size(typography::TITLE_LG).into()
}

pub(crate) fn section_title<'a, M: 'a>(label: String) -> Element<'a, M> {
    Text::new(label).size(typography::TITLE_SM).into()
}

/// Scrollable, width-capped column holding the page sections.
pub(crate) fn layout<'a, M: 'a>(sections: Vec<Element<'a, M>>) -> Element<'a, M> {
    let column = Column::with_children(sections)
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .max_width(sizing::CONTENT_MAX_WIDTH);

    scrollable(Container::new(column).center_x(Length::Fill))
        .height(Length::Fill)
        .into()
}
