// SPDX-License-Identifier: MPL-2.0
//! Update logic: navigation, language changes and page events.

use super::screen::{MountId, Page, PageMessage, Route};
use super::{App, Message};
use crate::application::pest::SelectedImage;
use crate::application::{chat as chat_use_case, fertilizer, pest as pest_use_case, weather as weather_use_case};
use crate::i18n::Key;
use crate::ui::pages::pest::PickOutcome;
use crate::ui::pages::{chat, home, pest, soil, weather};
use crate::ui::{bottom_nav, header};
use iced::Task;

const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// What the mounted page asked for after handling a message.
enum PageEvent {
    Home(home::Event),
    SoilFertilizer(soil::Event),
    PestDetection(pest::Event),
    Chat(chat::Event),
    None,
}

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Header(header::Message::LanguageSelected(language)) => {
            app.preferences.set(language);
            Task::none()
        }
        Message::BottomNav(bottom_nav::Message::Navigate(route)) => app.navigate(route, None),
        Message::Page(mount, message) => {
            if mount != app.mount {
                tracing::debug!(?mount, current = ?app.mount, "dropping message for unmounted page");
                return Task::none();
            }
            handle_page_message(app, message)
        }
    }
}

impl App {
    /// Drops the current page and mounts a fresh one for `route`, starting
    /// whatever fetches that page needs.
    pub(super) fn navigate(&mut self, route: Route, prefill: Option<String>) -> Task<Message> {
        self.mount = self.mount.next();
        let mount = self.mount;
        let services = &self.services;

        let (page, task) = match route {
            Route::Home => (Page::Home(home::State::default()), Task::none()),
            Route::SoilFertilizer => (
                Page::SoilFertilizer(soil::State::default()),
                Task::perform(
                    weather_use_case::load_soil(
                        services.weather.clone(),
                        services.geolocator.clone(),
                        services.location_policy,
                    ),
                    move |result| {
                        Message::Page(mount, PageMessage::SoilFertilizer(soil::Message::SoilLoaded(result)))
                    },
                ),
            ),
            Route::PestDetection => (Page::PestDetection(pest::State::default()), Task::none()),
            Route::Weather => (
                Page::Weather(weather::State::default()),
                Task::perform(
                    weather_use_case::load_report(
                        services.weather.clone(),
                        services.geolocator.clone(),
                        services.location_policy,
                    ),
                    move |result| Message::Page(mount, PageMessage::Weather(weather::Message::Loaded(result))),
                ),
            ),
            Route::Market => (Page::Market, Task::none()),
            Route::Chat => {
                let dict = self.i18n.resolve(self.preferences.get());
                let history = chat_use_case::load_history(services.store.as_ref());
                (Page::Chat(chat::State::new(&dict, history, prefill)), Task::none())
            }
            Route::Profile => (Page::Profile, Task::none()),
        };

        tracing::debug!(path = route.path(), ?mount, "mounted page");
        self.page = page;
        task
    }

    fn listen(&self, wrap: fn(Option<String>) -> PageMessage) -> Task<Message> {
        let mount = self.mount;
        Task::perform(self.services.speech.listen(), move |result| {
            let text = result
                .map_err(|err| tracing::debug!(%err, "voice input unavailable"))
                .ok();
            Message::Page(mount, wrap(text))
        })
    }

    fn speak(&self, text: String) -> Task<Message> {
        Task::perform(self.services.speech.speak(text), |result| {
            if let Err(err) = result {
                tracing::debug!(%err, "read-aloud unavailable");
            }
        })
        .discard()
    }
}

fn handle_page_message(app: &mut App, message: PageMessage) -> Task<Message> {
    let dict = app.i18n.resolve(app.preferences.get());
    let event = match (&mut app.page, message) {
        (Page::Home(state), PageMessage::Home(message)) => PageEvent::Home(state.update(message)),
        (Page::SoilFertilizer(state), PageMessage::SoilFertilizer(message)) => {
            PageEvent::SoilFertilizer(state.update(message))
        }
        (Page::PestDetection(state), PageMessage::PestDetection(message)) => {
            PageEvent::PestDetection(state.update(message))
        }
        (Page::Weather(state), PageMessage::Weather(message)) => {
            state.update(message);
            PageEvent::None
        }
        (Page::Chat(state), PageMessage::Chat(message)) => PageEvent::Chat(state.update(message, &dict)),
        (page, message) => {
            tracing::debug!(route = ?page.route(), ?message, "message does not match mounted page");
            PageEvent::None
        }
    };

    let mount = app.mount;
    match event {
        PageEvent::None
        | PageEvent::Home(home::Event::None)
        | PageEvent::SoilFertilizer(soil::Event::None)
        | PageEvent::PestDetection(pest::Event::None)
        | PageEvent::Chat(chat::Event::None) => Task::none(),

        PageEvent::Home(home::Event::Navigate(route)) => app.navigate(route, None),
        PageEvent::Home(home::Event::AskInChat(query)) => app.navigate(Route::Chat, Some(query)),
        PageEvent::Home(home::Event::StartListening) => {
            app.listen(|text| PageMessage::Home(home::Message::Transcribed(text)))
        }

        PageEvent::SoilFertilizer(soil::Event::RequestRecommendation { crop, soil: soil_type }) => {
            Task::perform(
                fertilizer::request_recommendation(crop, soil_type, app.services.recommendation_delay),
                move |recommendation| {
                    Message::Page(
                        mount,
                        PageMessage::SoilFertilizer(soil::Message::RecommendationReady(recommendation)),
                    )
                },
            )
        }

        PageEvent::PestDetection(pest::Event::OpenFilePicker) => {
            let title = app.i18n.resolve(app.preferences.get()).tr(Key::PestPickerTitle);
            Task::perform(pick_image(title), move |outcome| {
                Message::Page(mount, PageMessage::PestDetection(pest::Message::ImagePicked(outcome)))
            })
        }
        PageEvent::PestDetection(pest::Event::Analyze { image, id }) => Task::perform(
            pest_use_case::analyze(app.services.vision_model.clone(), image, id),
            move |outcome| {
                Message::Page(mount, PageMessage::PestDetection(pest::Message::AnalysisFinished(outcome)))
            },
        ),

        PageEvent::Chat(chat::Event::Ask { prompt, history }) => {
            chat_use_case::save_history(app.services.store.as_ref(), &history);
            Task::perform(
                chat_use_case::ask_assistant(app.services.text_model.clone(), prompt),
                move |reply| Message::Page(mount, PageMessage::Chat(chat::Message::Reply(reply))),
            )
        }
        PageEvent::Chat(chat::Event::StartListening) => {
            app.listen(|text| PageMessage::Chat(chat::Message::Transcribed(text)))
        }
        PageEvent::Chat(chat::Event::Speak(text)) => app.speak(text),
    }
}

/// Shows the native picker and reads the chosen photo.
async fn pick_image(title: String) -> PickOutcome {
    let Some(handle) = rfd::AsyncFileDialog::new()
        .set_title(&title)
        .add_filter("Images", &IMAGE_EXTENSIONS[..])
        .pick_file()
        .await
    else {
        return PickOutcome::Cancelled;
    };

    let path = handle.path().to_path_buf();
    match std::fs::read(&path) {
        Ok(bytes) if !bytes.is_empty() => PickOutcome::Loaded(SelectedImage::new(handle.file_name(), bytes)),
        Ok(_) => {
            tracing::warn!(path = %path.display(), "selected image is empty");
            PickOutcome::Unreadable
        }
        Err(err) => {
            tracing::warn!(%err, path = %path.display(), "failed to read selected image");
            PickOutcome::Unreadable
        }
    }
}
