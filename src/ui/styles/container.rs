// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::domain::market::Trend;
use crate::domain::pest::Severity;
use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface used by every page section.
///
/// Derived from the active Iced `Theme` so cards stay readable in both light
/// and dark modes.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Green header band.
pub fn header(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GREEN_600)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Application background behind the cards.
pub fn page(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let background = if palette.is_dark {
        palette.background.weak.color
    } else {
        crate::ui::design_tokens::palette::GRAY_50
    };
    container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    }
}

pub fn bottom_nav(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Rounded brand mark in the header.
pub fn brand_mark(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        text_color: Some(palette::GREEN_600),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Chat bubble; user bubbles are brand green, assistant bubbles follow the theme.
pub fn bubble(from_user: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let (background, text_color) = if from_user {
            (palette::GREEN_600, palette::WHITE)
        } else {
            let ext = theme.extended_palette();
            (ext.background.weak.color, ext.background.weak.text)
        };
        container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(text_color),
            border: Border {
                radius: radius::LG.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Tinted panel for a weather alert or detection result.
pub fn severity(level: Severity) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let accent = severity_color(level);
        container::Style {
            background: Some(Background::Color(Color {
                a: opacity::SUBTLE,
                ..accent
            })),
            border: Border {
                color: accent,
                width: 1.0,
                radius: radius::MD.into(),
            },
            ..Default::default()
        }
    }
}

#[must_use]
pub fn severity_color(level: Severity) -> Color {
    match level {
        Severity::Low => palette::SUCCESS_500,
        Severity::Medium => palette::WARNING_500,
        Severity::High => palette::ERROR_500,
    }
}

#[must_use]
pub fn trend_color(trend: Trend) -> Color {
    match trend {
        Trend::Up => palette::SUCCESS_500,
        Trend::Down => palette::ERROR_500,
        Trend::Stable => palette::GRAY_500,
    }
}
