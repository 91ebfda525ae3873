// SPDX-License-Identifier: MPL-2.0
//! Pest detection page: photo selection, preview, analysis and result.

use super::{card, layout, section_title, title, ViewContext};
use crate::application::pest::{resolve, SelectedImage};
use crate::application::port::{AssistantError, EncodedImage};
use crate::domain::pest::{PestDetection, ReferenceImage};
use crate::i18n::Key;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::labels;
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    ContentFit, Element, Length,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Outcome of the native file dialog.
#[derive(Debug, Clone)]
pub enum PickOutcome {
    Cancelled,
    Loaded(SelectedImage),
    Unreadable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Notice {
    Selected,
    Unreadable,
}

#[derive(Debug)]
pub struct State {
    image: Option<SelectedImage>,
    preview: Option<Handle>,
    notice: Option<Notice>,
    analyzing: bool,
    detection: Option<PestDetection>,
    rng: StdRng,
}

#[derive(Debug, Clone)]
pub enum Message {
    PickImage,
    ImagePicked(PickOutcome),
    Analyze,
    AnalysisFinished(Result<PestDetection, AssistantError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenFilePicker,
    Analyze { image: EncodedImage, id: String },
}

impl Default for State {
    fn default() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl State {
    /// Page state drawing fallback entries from `rng`.
    #[must_use]
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            image: None,
            preview: None,
            notice: None,
            analyzing: false,
            detection: None,
            rng,
        }
    }

    #[must_use]
    pub fn detection(&self) -> Option<&PestDetection> {
        self.detection.as_ref()
    }

    #[must_use]
    pub fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    #[must_use]
    pub fn can_analyze(&self) -> bool {
        self.image.is_some() && !self.analyzing
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::PickImage if self.analyzing => Event::None,
            Message::PickImage => Event::OpenFilePicker,
            Message::ImagePicked(_) if self.analyzing => Event::None,
            Message::ImagePicked(PickOutcome::Cancelled) => Event::None,
            Message::ImagePicked(PickOutcome::Loaded(image)) => {
                self.preview = Some(Handle::from_bytes(image.bytes.as_ref().clone()));
                self.image = Some(image);
                self.notice = Some(Notice::Selected);
                self.detection = None;
                Event::None
            }
            Message::ImagePicked(PickOutcome::Unreadable) => {
                self.notice = Some(Notice::Unreadable);
                Event::None
            }
            Message::Analyze => match &self.image {
                Some(image) if !self.analyzing => {
                    self.analyzing = true;
                    Event::Analyze {
                        image: image.encode(),
                        id: chrono::Local::now().timestamp_millis().to_string(),
                    }
                }
                _ => Event::None,
            },
            Message::AnalysisFinished(outcome) => {
                self.analyzing = false;
                self.detection = Some(resolve(outcome, &mut self.rng));
                Event::None
            }
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let dict = ctx.dict;

        let preview: Element<'a, Message> = match &self.preview {
            Some(handle) => Image::new(handle.clone())
                .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
                .content_fit(ContentFit::Contain)
                .into(),
            None => Container::new(
                Text::new(dict.tr(Key::NoImageSelected)).color(palette::GRAY_500),
            )
            .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
            .center_x(Length::Fill)
            .align_y(Vertical::Center)
            .into(),
        };

        let mut upload = Column::new().spacing(spacing::SM).push(preview);
        match self.notice {
            Some(Notice::Selected) => {
                upload = upload.push(Text::new(dict.tr(Key::ImageSelected)).color(palette::GREEN_700));
            }
            Some(Notice::Unreadable) => {
                upload = upload.push(Text::new(dict.tr(Key::ImageUnreadable)).color(palette::ERROR_500));
            }
            None => {}
        }

        let analyze_label = if self.analyzing {
            dict.tr(Key::Processing)
        } else {
            dict.tr(Key::Analyze)
        };
        let actions = Row::new()
            .spacing(spacing::SM)
            .push(
                button(Text::new(dict.tr(Key::UploadImage)).align_x(Horizontal::Center).width(Length::Fill))
                    .on_press_maybe((!self.analyzing).then_some(Message::PickImage))
                    .width(Length::Fill)
                    .padding(spacing::SM)
                    .style(styles::button::list_row),
            )
            .push(
                button(Text::new(analyze_label).align_x(Horizontal::Center).width(Length::Fill))
                    .on_press_maybe(self.can_analyze().then_some(Message::Analyze))
                    .width(Length::Fill)
                    .padding(spacing::SM)
                    .style(styles::button::primary),
            );
        upload = upload.push(actions);

        let mut sections = vec![title(dict.tr(Key::FeaturePestDetection)), card(upload)];

        if let Some(detection) = &self.detection {
            sections.push(self.result_view(detection, ctx));
        }

        layout(sections)
    }

    fn result_view<'a>(&'a self, detection: &'a PestDetection, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let dict = ctx.dict;
        let severity = dict.tr_with(
            Key::SeverityLabel,
            &[("level", dict.tr(labels::severity(detection.severity)))],
        );

        let reference: Element<'a, Message> = match (&detection.image, &self.preview) {
            (ReferenceImage::Upload, Some(handle)) => Image::new(handle.clone())
                .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
                .content_fit(ContentFit::Contain)
                .into(),
            (ReferenceImage::Upload, None) => Text::new(dict.tr(Key::NoImageSelected)).into(),
            (ReferenceImage::Url(url), _) => Text::new(url.as_str())
                .size(typography::CAPTION)
                .color(palette::BLUE_600)
                .into(),
        };

        let content = Column::new()
            .spacing(spacing::XS)
            .push(section_title(detection.name.clone()))
            .push(Text::new(severity).color(styles::container::severity_color(detection.severity)))
            .push(Text::new(dict.tr(Key::TreatmentHeading)).size(typography::BODY_LG))
            .push(Text::new(detection.treatment.as_str()).size(typography::BODY))
            .push(Text::new(dict.tr(Key::ReferenceImageHeading)).size(typography::BODY_LG))
            .push(reference);

        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(styles::container::severity(detection.severity))
            .into()
    }
}
