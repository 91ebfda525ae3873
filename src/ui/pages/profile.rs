// SPDX-License-Identifier: MPL-2.0
//! Profile page: static farmer card, option rows and the app version.

use super::{card, layout, ViewContext};
use crate::i18n::Key;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Column, Container, Row, Text},
    Element, Length,
};

/// Option rows as (glyph, title, hint). They have no action yet.
const OPTIONS: [(&str, Key, Key); 5] = [
    ("👤", Key::ProfilePersonalInfo, Key::ProfilePersonalInfoHint),
    ("⚙", Key::ProfileSettings, Key::ProfileSettingsHint),
    ("🔔", Key::ProfileNotifications, Key::ProfileNotificationsHint),
    ("🌐", Key::ProfileLanguage, Key::ProfileLanguageHint),
    ("❓", Key::ProfileHelp, Key::ProfileHelpHint),
];

pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let dict = ctx.dict;

    let avatar = Container::new(Text::new("👨‍🌾").size(typography::TITLE_LG))
        .width(Length::Fixed(sizing::BRAND_MARK * 1.5))
        .height(Length::Fixed(sizing::BRAND_MARK * 1.5))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::brand_mark);
    let farmer = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(avatar)
        .push(
            Column::new()
                .push(Text::new(dict.tr(Key::ProfileName)).size(typography::TITLE_MD))
                .push(Text::new(dict.tr(Key::ProfileLocation)).color(palette::GRAY_500)),
        );

    let mut options = Column::new().spacing(spacing::SM);
    for (glyph, label, hint) in OPTIONS {
        options = options.push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(Text::new(glyph).size(typography::TITLE_SM))
                .push(
                    Column::new()
                        .width(Length::Fill)
                        .push(Text::new(dict.tr(label)).size(typography::BODY_LG))
                        .push(
                            Text::new(dict.tr(hint))
                                .size(typography::CAPTION)
                                .color(palette::GRAY_500),
                        ),
                )
                .push(Text::new("›").color(palette::GRAY_400)),
        );
    }

    let version = dict.tr_with(
        Key::AppVersion,
        &[
            ("name", dict.tr(Key::AppName)),
            ("version", env!("CARGO_PKG_VERSION").to_string()),
        ],
    );
    let about = Column::new()
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(Text::new(version).size(typography::BODY))
        .push(
            Text::new(dict.tr(Key::ProfileMadeFor))
                .size(typography::CAPTION)
                .color(palette::GRAY_500),
        );

    layout(vec![card(farmer), card(options), about.into()])
}
