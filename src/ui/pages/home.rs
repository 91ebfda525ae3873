// SPDX-License-Identifier: MPL-2.0
//! Home page: query bar, today's weather widget and quick-access cards.

use super::{card, layout, section_title, ViewContext};
use crate::app::screen::Route;
use crate::i18n::Key;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, text_input, Column, Container, Row, Text},
    Color, Element, Length,
};

/// Values of the static weather widget.
pub const TODAY_TEMPERATURE_C: i32 = 28;
pub const TODAY_HUMIDITY_PCT: i32 = 65;
pub const TODAY_RAINFALL_MM: i32 = 15;

/// Quick-access cards, in display order.
pub const FEATURES: [(Route, Key, &str, Color); 5] = [
    (Route::SoilFertilizer, Key::FeatureSoilFertilizer, "🌱", palette::GREEN_600),
    (Route::PestDetection, Key::FeaturePestDetection, "🐛", palette::ERROR_500),
    (Route::Weather, Key::FeatureWeatherAlerts, "☁", palette::BLUE_600),
    (Route::Market, Key::FeatureMarketPrices, "₹", palette::ORANGE_600),
    (Route::Chat, Key::FeatureAiAdvisor, "✉", palette::PURPLE_600),
];

#[derive(Debug, Clone, Default)]
pub struct State {
    query: String,
    listening: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    Submit,
    OpenFeature(Route),
    Listen,
    /// Result of a voice capture started by [`Message::Listen`].
    Transcribed(Option<String>),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Route),
    /// Open the chat with this question in the input.
    AskInChat(String),
    StartListening,
}

impl State {
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::QueryChanged(query) => {
                self.query = query;
                Event::None
            }
            Message::Submit => {
                let query = self.query.trim();
                if query.is_empty() {
                    Event::None
                } else {
                    Event::AskInChat(query.to_string())
                }
            }
            Message::OpenFeature(route) => Event::Navigate(route),
            Message::Listen => {
                if self.listening {
                    return Event::None;
                }
                self.listening = true;
                Event::StartListening
            }
            Message::Transcribed(text) => {
                self.listening = false;
                if let Some(text) = text {
                    self.query = text;
                }
                Event::None
            }
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let dict = ctx.dict;

        let input = text_input(&dict.tr(Key::SearchPlaceholder), &self.query)
            .on_input(Message::QueryChanged)
            .on_submit(Message::Submit)
            .padding(spacing::SM)
            .size(typography::BODY_LG);

        let mic_label = if self.listening { "…" } else { "🎤" };
        let mic = button(Text::new(mic_label))
            .on_press_maybe((ctx.speech_available && !self.listening).then_some(Message::Listen))
            .padding(spacing::SM)
            .style(styles::button::icon);

        let submit = button(Text::new(dict.tr(Key::SearchSubmit)))
            .on_press(Message::Submit)
            .padding(spacing::SM)
            .style(styles::button::primary);

        let mut search = Column::new().spacing(spacing::XXS).push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(input)
                .push(mic)
                .push(submit),
        );
        if !ctx.speech_available {
            search = search.push(
                Text::new(dict.tr(Key::VoiceUnavailable))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_500),
            );
        } else if self.listening {
            search = search.push(Text::new(dict.tr(Key::Listening)).size(typography::CAPTION));
        }

        let weather = Column::new()
            .spacing(spacing::SM)
            .push(section_title(dict.tr(Key::TodayWeather)))
            .push(
                Row::new()
                    .spacing(spacing::LG)
                    .push(stat(dict.tr(Key::Temperature), format!("{TODAY_TEMPERATURE_C}°C")))
                    .push(stat(dict.tr(Key::Humidity), format!("{TODAY_HUMIDITY_PCT}%")))
                    .push(stat(dict.tr(Key::Rainfall), format!("{TODAY_RAINFALL_MM}mm"))),
            );

        let mut grid = Column::new().spacing(spacing::SM);
        for pair in FEATURES.chunks(2) {
            let mut row = Row::new().spacing(spacing::SM);
            for (route, key, glyph, accent) in pair {
                row = row.push(feature_card(*route, dict.tr(*key), *glyph, *accent));
            }
            if pair.len() == 1 {
                row = row.push(Container::new(Text::new("")).width(Length::Fill));
            }
            grid = grid.push(row);
        }

        layout(vec![card(search), card(weather), grid.into()])
    }
}

fn stat<'a>(label: String, value: String) -> Element<'a, Message> {
    Column::new()
        .align_x(Horizontal::Center)
        .push(Text::new(value).size(typography::TITLE_MD))
        .push(Text::new(label).size(typography::CAPTION))
        .width(Length::Fill)
        .into()
}

fn feature_card<'a>(route: Route, label: String, glyph: &'static str, accent: Color) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(Text::new(glyph).size(typography::TITLE_LG))
        .push(Text::new(label).size(typography::BODY));

    button(Container::new(content).center_x(Length::Fill))
        .on_press(Message::OpenFeature(route))
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::button::feature_card(accent))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_does_not_navigate() {
        let mut state = State::default();
        state.update(Message::QueryChanged("   ".into()));
        assert_eq!(state.update(Message::Submit), Event::None);
    }

    #[test]
    fn query_is_trimmed_before_opening_chat() {
        let mut state = State::default();
        state.update(Message::QueryChanged("  wheat rust?  ".into()));
        assert_eq!(
            state.update(Message::Submit),
            Event::AskInChat("wheat rust?".into())
        );
    }

    #[test]
    fn feature_cards_cover_five_pages() {
        let routes: Vec<Route> = FEATURES.iter().map(|f| f.0).collect();
        assert_eq!(
            routes,
            vec![
                Route::SoilFertilizer,
                Route::PestDetection,
                Route::Weather,
                Route::Market,
                Route::Chat
            ]
        );
        let mut state = State::default();
        assert_eq!(
            state.update(Message::OpenFeature(Route::Market)),
            Event::Navigate(Route::Market)
        );
    }

    #[test]
    fn transcription_fills_the_query() {
        let mut state = State::default();
        assert_eq!(state.update(Message::Listen), Event::StartListening);
        assert_eq!(state.update(Message::Listen), Event::None);
        state.update(Message::Transcribed(Some("onion price".into())));
        assert_eq!(state.query(), "onion price");
        assert_eq!(state.update(Message::Listen), Event::StartListening);
    }
}
