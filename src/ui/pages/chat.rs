// SPDX-License-Identifier: MPL-2.0
//! Advisor chat page: transcript, previous questions and the input bar.

use super::{card, section_title, ViewContext};
use crate::application::chat::ChatSession;
use crate::application::port::AssistantError;
use crate::domain::chat::{ChatMessage, QuestionHistory, Role};
use crate::i18n::{Dictionary, Key};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, scrollable, text_input, Column, Container, Row, Text},
    Element, Length,
};

#[derive(Debug, Clone)]
pub struct State {
    session: ChatSession,
    input: String,
    listening: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    Submit,
    /// A previous question was clicked.
    UseQuestion(String),
    Reply(Result<String, AssistantError>),
    Listen,
    Transcribed(Option<String>),
    Speak(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// Send `prompt` to the language model and persist `history`.
    Ask {
        prompt: String,
        history: QuestionHistory,
    },
    StartListening,
    Speak(String),
}

impl State {
    /// Opens a transcript with the greeting, optionally pre-filling the input.
    #[must_use]
    pub fn new(dict: &Dictionary<'_>, history: QuestionHistory, prefill: Option<String>) -> Self {
        Self {
            session: ChatSession::new(dict.tr(Key::ChatGreeting), history),
            input: prefill.unwrap_or_default(),
            listening: false,
        }
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    pub fn update(&mut self, message: Message, dict: &Dictionary<'_>) -> Event {
        match message {
            Message::InputChanged(input) => {
                self.input = input;
                Event::None
            }
            Message::Submit => {
                let instruction = dict.tr(Key::ChatInstruction);
                match self.session.submit(&self.input, &instruction) {
                    Some(prompt) => {
                        self.input.clear();
                        Event::Ask {
                            prompt,
                            history: self.session.history().clone(),
                        }
                    }
                    None => Event::None,
                }
            }
            Message::UseQuestion(question) => {
                self.input = question;
                Event::None
            }
            Message::Reply(outcome) => {
                self.session.complete(outcome, dict);
                Event::None
            }
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
                    self.input = text;
                }
                Event::None
            }
            Message::Speak(text) => Event::Speak(text),
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let dict = ctx.dict;

        let heading = Column::new()
            .push(Text::new(dict.tr(Key::FeatureAiAdvisor)).size(typography::TITLE_LG))
            .push(
                Text::new(dict.tr(Key::ChatSubtitle))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_500),
            );

        let mut transcript = Column::new().spacing(spacing::SM).padding(spacing::XS);
        for message in self.session.messages() {
            transcript = transcript.push(bubble(message, ctx));
        }
        if self.session.is_awaiting() {
            transcript = transcript.push(
                Text::new(dict.tr(Key::Processing))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_500),
            );
        }

        let body = Row::new()
            .spacing(spacing::MD)
            .height(Length::Fill)
            .push(
                scrollable(transcript)
                    .anchor_bottom()
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .push(self.history_panel(dict));

        let input = text_input(&dict.tr(Key::AskQuestion), &self.input)
            .on_input(Message::InputChanged)
            .on_submit(Message::Submit)
            .padding(spacing::SM)
            .size(typography::BODY_LG);
        let mic = button(Text::new(if self.listening { "…" } else { "🎤" }))
            .on_press_maybe((ctx.speech_available && !self.listening).then_some(Message::Listen))
            .padding(spacing::SM)
            .style(styles::button::icon);
        let send = button(Text::new(dict.tr(Key::Send)))
            .on_press_maybe((!self.session.is_awaiting()).then_some(Message::Submit))
            .padding(spacing::SM)
            .style(styles::button::primary);

        let mut input_bar = Column::new().spacing(spacing::XXS).push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(input)
                .push(mic)
                .push(send),
        );
        if !ctx.speech_available {
            input_bar = input_bar.push(
                Text::new(dict.tr(Key::VoiceUnavailable))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_500),
            );
        } else if self.listening {
            input_bar = input_bar.push(Text::new(dict.tr(Key::Listening)).size(typography::CAPTION));
        }

        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::MD)
            .push(heading)
            .push(body)
            .push(card(input_bar))
            .into()
    }

    fn history_panel<'a>(&'a self, dict: Dictionary<'_>) -> Element<'a, Message> {
        let mut list = Column::new()
            .spacing(spacing::XXS)
            .push(section_title(dict.tr(Key::PreviousQuestions)));

        let history = self.session.history();
        if history.is_empty() {
            list = list.push(
                Text::new(dict.tr(Key::NoPreviousQuestions))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_500),
            );
        }
        for question in history.entries() {
            list = list.push(
                button(Text::new(question.as_str()).size(typography::BODY))
                    .on_press(Message::UseQuestion(question.clone()))
                    .width(Length::Fill)
                    .style(styles::button::list_row),
            );
        }

        Container::new(scrollable(list).height(Length::Fill))
            .width(Length::Fixed(sizing::HISTORY_PANEL_WIDTH))
            .height(Length::Fill)
            .padding(spacing::SM)
            .style(styles::container::card)
            .into()
    }
}

fn bubble<'a>(message: &'a ChatMessage, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let from_user = message.role() == Role::User;

    let mut content = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(message.content()).size(typography::BODY));
    let mut footer = Row::new().spacing(spacing::XS).align_y(Vertical::Center).push(
        Text::new(message.created_at().format("%H:%M").to_string()).size(typography::CAPTION),
    );
    if !from_user {
        footer = footer.push(
            button(Text::new("🔊").size(typography::CAPTION))
                .on_press_maybe(
                    ctx.speech_available
                        .then(|| Message::Speak(message.content().to_string())),
                )
                .padding(spacing::XXS)
                .style(styles::button::icon),
        );
    }
    content = content.push(footer);

    let bubble = Container::new(content)
        .padding(spacing::SM)
        .max_width(sizing::CONTENT_MAX_WIDTH * 0.75)
        .style(styles::container::bubble(from_user));

    let align = if from_user {
        Horizontal::Right
    } else {
        Horizontal::Left
    };
    Container::new(bubble).width(Length::Fill).align_x(align).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{I18n, Language};

    fn open(i18n: &I18n) -> State {
        State::new(&i18n.resolve(Language::En), QuestionHistory::default(), None)
    }

    #[test]
    fn prefill_lands_in_the_input() {
        let i18n = I18n::new();
        let state = State::new(
            &i18n.resolve(Language::En),
            QuestionHistory::default(),
            Some("wheat rust?".into()),
        );
        assert_eq!(state.input(), "wheat rust?");
        assert_eq!(state.session().messages().len(), 1);
    }

    #[test]
    fn blank_submit_is_a_no_op() {
        let i18n = I18n::new();
        let dict = i18n.resolve(Language::En);
        let mut state = open(&i18n);
        state.update(Message::InputChanged("  \t ".into()), &dict);
        assert_eq!(state.update(Message::Submit, &dict), Event::None);
        assert_eq!(state.session().messages().len(), 1);
    }

    #[test]
    fn submit_clears_input_and_asks() {
        let i18n = I18n::new();
        let dict = i18n.resolve(Language::En);
        let mut state = open(&i18n);
        state.update(Message::InputChanged("When to sow wheat?".into()), &dict);

        match state.update(Message::Submit, &dict) {
            Event::Ask { prompt, history } => {
                assert!(prompt.ends_with("\nQuestion: When to sow wheat?"));
                assert!(prompt.starts_with(&dict.tr(Key::ChatInstruction)));
                assert_eq!(history.entries(), ["When to sow wheat?".to_string()]);
            }
            other => panic!("expected ask event, got {other:?}"),
        }
        assert_eq!(state.input(), "");
        assert!(state.session().is_awaiting());

        state.update(Message::InputChanged("again".into()), &dict);
        assert_eq!(state.update(Message::Submit, &dict), Event::None);
    }

    #[test]
    fn failed_reply_appends_localized_error() {
        let i18n = I18n::new();
        let dict = i18n.resolve(Language::Hi);
        let mut state = State::new(&dict, QuestionHistory::default(), Some("?".into()));
        state.update(Message::Submit, &dict);
        state.update(Message::Reply(Err(AssistantError::EmptyResponse)), &dict);

        let last = state.session().messages().last().expect("reply appended");
        assert_eq!(last.role(), Role::Assistant);
        assert_eq!(last.content(), dict.tr(Key::ChatErrorUnavailable));
        assert!(!state.session().is_awaiting());
    }

    #[test]
    fn clicking_a_previous_question_copies_it() {
        let i18n = I18n::new();
        let dict = i18n.resolve(Language::En);
        let history = QuestionHistory::from_entries(vec!["Best time for urea?".into()]);
        let mut state = State::new(&dict, history, None);
        state.update(Message::UseQuestion("Best time for urea?".into()), &dict);
        assert_eq!(state.input(), "Best time for urea?");
    }
}
