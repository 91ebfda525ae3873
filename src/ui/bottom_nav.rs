// SPDX-License-Identifier: MPL-2.0
//! Bottom navigation bar with the five primary destinations.

use crate::app::screen::Route;
use crate::i18n::{Dictionary, Key};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Destinations shown in the bar, in display order.
pub const ITEMS: [(Route, Key, &str); 5] = [
    (Route::Home, Key::NavHome, "⌂"),
    (Route::Weather, Key::NavWeather, "☁"),
    (Route::Market, Key::NavMarket, "₹"),
    (Route::Chat, Key::NavChat, "✉"),
    (Route::Profile, Key::NavProfile, "☺"),
];

pub struct ViewContext<'a> {
    pub dict: Dictionary<'a>,
    pub current: Route,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Navigate(Route),
}

/// An item is highlighted only when its path equals the current path.
#[must_use]
pub fn is_active(item: Route, current: Route) -> bool {
    item.path() == current.path()
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XXS).align_y(Vertical::Center);

    for (route, key, glyph) in ITEMS {
        let label = Column::new()
            .align_x(Horizontal::Center)
            .push(Text::new(glyph).size(typography::TITLE_SM))
            .push(Text::new(ctx.dict.tr(key)).size(typography::CAPTION));

        let style = if is_active(route, ctx.current) {
            styles::button::nav_active
        } else {
            styles::button::nav_inactive
        };

        row = row.push(
            button(Container::new(label).width(Length::Fill).align_x(Horizontal::Center))
                .on_press(Message::Navigate(route))
                .width(Length::Fill)
                .padding(spacing::XXS)
                .style(style),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BOTTOM_NAV_HEIGHT))
        .padding([spacing::XXS, spacing::XS])
        .align_y(Vertical::Center)
        .style(styles::container::bottom_nav)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_lists_five_destinations() {
        let routes: Vec<Route> = ITEMS.iter().map(|(route, _, _)| *route).collect();
        assert_eq!(
            routes,
            vec![Route::Home, Route::Weather, Route::Market, Route::Chat, Route::Profile]
        );
    }

    #[test]
    fn only_the_current_route_is_active() {
        assert!(is_active(Route::Weather, Route::Weather));
        assert!(!is_active(Route::Home, Route::Weather));
        // Sub-pages reached from home highlight nothing.
        for (route, _, _) in ITEMS {
            assert!(!is_active(route, Route::SoilFertilizer));
            assert!(!is_active(route, Route::PestDetection));
        }
    }
}
