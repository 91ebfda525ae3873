// SPDX-License-Identifier: MPL-2.0
//! Header band: brand mark, app name and tagline, location label and the
//! language selector.

use crate::i18n::{Dictionary, Key, Language};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{container, pick_list, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub dict: Dictionary<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    LanguageSelected(Language),
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Container::new(Text::new("🌾").size(typography::TITLE_MD))
        .width(Length::Fixed(sizing::BRAND_MARK))
        .height(Length::Fixed(sizing::BRAND_MARK))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::brand_mark);

    let titles = Column::new()
        .push(Text::new(ctx.dict.tr(Key::AppName)).size(typography::TITLE_MD))
        .push(Text::new(ctx.dict.tr(Key::AppTagline)).size(typography::CAPTION));

    let location = Text::new(format!("📍 {}", ctx.dict.tr(Key::HeaderLocation)))
        .size(typography::CAPTION);

    let languages = pick_list(
        Language::ALL,
        Some(ctx.dict.language()),
        Message::LanguageSelected,
    )
    .text_size(typography::BODY)
    .placeholder(ctx.dict.tr(Key::LanguageLabel));

    let trailing = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Right)
        .push(location)
        .push(languages);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(brand)
        .push(container(titles).width(Length::Fill))
        .push(trailing);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::header)
        .into()
}
