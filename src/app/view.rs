// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application: header, mounted page, bottom bar.

use super::screen::{MountId, Page, PageMessage, Route};
use super::Message;
use crate::i18n::Dictionary;
use crate::ui::pages::{self, market, profile};
use crate::ui::{bottom_nav, header, styles};
use iced::{
    widget::{Column, Container},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub dict: Dictionary<'a>,
    pub page: &'a Page,
    pub mount: MountId,
    pub speech_available: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page_ctx = pages::ViewContext {
        dict: ctx.dict,
        speech_available: ctx.speech_available,
    };
    let mount = ctx.mount;

    let page: Element<'_, Message> = match ctx.page {
        Page::Home(state) => state
            .view(page_ctx)
            .map(move |m| Message::Page(mount, PageMessage::Home(m))),
        Page::SoilFertilizer(state) => state
            .view(page_ctx)
            .map(move |m| Message::Page(mount, PageMessage::SoilFertilizer(m))),
        Page::PestDetection(state) => state
            .view(page_ctx)
            .map(move |m| Message::Page(mount, PageMessage::PestDetection(m))),
        Page::Weather(state) => state
            .view(page_ctx)
            .map(move |m| Message::Page(mount, PageMessage::Weather(m))),
        Page::Market => market::view(page_ctx),
        Page::Chat(state) => state
            .view(page_ctx)
            .map(move |m| Message::Page(mount, PageMessage::Chat(m))),
        Page::Profile => profile::view(page_ctx),
    };

    let current: Route = ctx.page.route();

    Column::new()
        .push(header::view(header::ViewContext { dict: ctx.dict }).map(Message::Header))
        .push(
            Container::new(page)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::page),
        )
        .push(
            bottom_nav::view(bottom_nav::ViewContext {
                dict: ctx.dict,
                current,
            })
            .map(Message::BottomNav),
        )
        .into()
}
