// SPDX-License-Identifier: MPL-2.0
//! Market page: today's mandi prices.

use super::{card, layout, section_title, title, ViewContext};
use crate::domain::market::{format_change, format_rupees, reference_prices, MarketPrice};
use crate::i18n::Key;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::labels;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Column, Row, Text},
    Element, Length,
};

pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let dict = ctx.dict;

    let mut list = Column::new()
        .spacing(spacing::SM)
        .push(section_title(dict.tr(Key::PriceToday)));
    for price in reference_prices() {
        list = list.push(price_row(price));
    }

    let note = Text::new(dict.tr(Key::MarketNote))
        .size(typography::CAPTION)
        .color(palette::GRAY_500);

    layout(vec![title(dict.tr(Key::FeatureMarketPrices)), card(list), note.into()])
}

fn price_row<'a, M: 'a>(price: MarketPrice) -> Element<'a, M> {
    let name = Column::new()
        .width(Length::Fill)
        .push(Text::new(price.crop).size(typography::BODY_LG))
        .push(Text::new(price.unit).size(typography::CAPTION).color(palette::GRAY_500));

    let color = styles::container::trend_color(price.trend);
    let change = format!(
        "{} {}",
        labels::trend_marker(price.trend),
        format_change(price.change)
    );
    let figures = Column::new()
        .align_x(Horizontal::Right)
        .push(Text::new(format_rupees(price.price)).size(typography::TITLE_SM))
        .push(Text::new(change).size(typography::CAPTION).color(color));

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(name)
        .push(figures)
        .into()
}
