// SPDX-License-Identifier: MPL-2.0
//! Soil and fertilizer page: crop and soil pickers, simulated
//! recommendation, and live soil readings for the current location.

use super::{card, layout, section_title, title, ViewContext};
use crate::application::weather::SoilLookupError;
use crate::domain::advisory::{Crop, FertilizerRecommendation, SoilType};
use crate::domain::weather::SoilConditions;
use crate::i18n::Key;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::labels::{self, Labeled};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, pick_list, Column, Row, Text},
    Element, Length,
};

const DASH: &str = "--";

/// Soil readings shown above the pickers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SoilReading {
    #[default]
    Loading,
    Ready(SoilConditions),
    Unavailable,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    crop: Option<Crop>,
    soil: Option<SoilType>,
    pending: bool,
    recommendation: Option<FertilizerRecommendation>,
    reading: SoilReading,
}

#[derive(Debug, Clone)]
pub enum Message {
    CropSelected(Crop),
    SoilSelected(SoilType),
    GetRecommendation,
    RecommendationReady(FertilizerRecommendation),
    SoilLoaded(Result<SoilConditions, SoilLookupError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    RequestRecommendation { crop: Crop, soil: SoilType },
}

impl State {
    /// Get-recommendation is possible with both selections and nothing pending.
    #[must_use]
    pub fn can_request(&self) -> bool {
        self.crop.is_some() && self.soil.is_some() && !self.pending
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    #[must_use]
    pub fn recommendation(&self) -> Option<&FertilizerRecommendation> {
        self.recommendation.as_ref()
    }

    #[must_use]
    pub fn reading(&self) -> SoilReading {
        self.reading
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::CropSelected(crop) => {
                self.crop = Some(crop);
                Event::None
            }
            Message::SoilSelected(soil) => {
                self.soil = Some(soil);
                Event::None
            }
            Message::GetRecommendation => match (self.crop, self.soil) {
                (Some(crop), Some(soil)) if !self.pending => {
                    self.pending = true;
                    Event::RequestRecommendation { crop, soil }
                }
                _ => Event::None,
            },
            Message::RecommendationReady(recommendation) => {
                self.pending = false;
                self.recommendation = Some(recommendation);
                Event::None
            }
            Message::SoilLoaded(Ok(conditions)) => {
                self.reading = SoilReading::Ready(conditions);
                Event::None
            }
            Message::SoilLoaded(Err(err)) => {
                tracing::debug!(%err, "soil readings unavailable");
                self.reading = SoilReading::Unavailable;
                Event::None
            }
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let dict = ctx.dict;

        let (temperature, moisture) = match self.reading {
            SoilReading::Ready(conditions) => (
                conditions
                    .temperature_rounded()
                    .map_or_else(|| DASH.to_string(), |t| format!("{t}°C")),
                conditions
                    .moisture_percent_one_decimal()
                    .map_or_else(|| DASH.to_string(), |m| format!("{m}%")),
            ),
            SoilReading::Loading | SoilReading::Unavailable => {
                (DASH.to_string(), DASH.to_string())
            }
        };
        let readings = Row::new()
            .spacing(spacing::LG)
            .push(reading(dict.tr(Key::SoilTemperature), temperature))
            .push(reading(dict.tr(Key::SoilMoisture), moisture));

        let crops: Vec<Labeled<Crop>> = Crop::ALL
            .iter()
            .map(|crop| Labeled {
                value: *crop,
                label: dict.tr(labels::crop(*crop)),
            })
            .collect();
        let selected_crop = self.crop.map(|crop| Labeled {
            value: crop,
            label: dict.tr(labels::crop(crop)),
        });
        let soils: Vec<Labeled<SoilType>> = SoilType::ALL
            .iter()
            .map(|soil| Labeled {
                value: *soil,
                label: dict.tr(labels::soil(*soil)),
            })
            .collect();
        let selected_soil = self.soil.map(|soil| Labeled {
            value: soil,
            label: dict.tr(labels::soil(soil)),
        });

        let label = if self.pending {
            dict.tr(Key::Processing)
        } else {
            dict.tr(Key::GetRecommendation)
        };
        let form = Column::new()
            .spacing(spacing::SM)
            .push(Text::new(dict.tr(Key::SelectCrop)).size(typography::BODY))
            .push(
                pick_list(crops, selected_crop, |choice| Message::CropSelected(choice.value))
                    .placeholder(dict.tr(Key::SelectCrop))
                    .width(Length::Fill),
            )
            .push(Text::new(dict.tr(Key::SelectSoil)).size(typography::BODY))
            .push(
                pick_list(soils, selected_soil, |choice| Message::SoilSelected(choice.value))
                    .placeholder(dict.tr(Key::SelectSoil))
                    .width(Length::Fill),
            )
            .push(
                button(Text::new(label).align_x(Horizontal::Center).width(Length::Fill))
                    .on_press_maybe(self.can_request().then_some(Message::GetRecommendation))
                    .width(Length::Fill)
                    .padding(spacing::SM)
                    .style(styles::button::primary),
            );

        let mut sections = vec![
            title(dict.tr(Key::FeatureSoilFertilizer)),
            card(readings),
            card(form),
        ];

        if let Some(rec) = &self.recommendation {
            let details = Column::new()
                .spacing(spacing::XS)
                .push(section_title(dict.tr(Key::RecommendationTitle)))
                .push(detail(dict.tr(Key::RecommendationFertilizer), &rec.fertilizer))
                .push(detail(dict.tr(Key::RecommendationAmount), &rec.amount))
                .push(detail(dict.tr(Key::RecommendationTiming), &rec.timing))
                .push(Text::new(rec.notes.as_str()).size(typography::BODY).color(palette::GREEN_700));
            sections.push(card(details));
        }

        layout(sections)
    }
}

fn reading<'a>(label: String, value: String) -> Element<'a, Message> {
    Column::new()
        .width(Length::Fill)
        .push(Text::new(label).size(typography::CAPTION))
        .push(Text::new(value).size(typography::TITLE_MD))
        .into()
}

fn detail<'a>(label: String, value: &'a str) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .push(Text::new(format!("{label}:")).size(typography::BODY))
        .push(Text::new(value).size(typography::BODY))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{GeolocationError, ProviderError};
    use crate::domain::advisory::recommend;

    #[test]
    fn request_needs_both_selections() {
        let mut state = State::default();
        assert!(!state.can_request());
        assert_eq!(state.update(Message::GetRecommendation), Event::None);

        state.update(Message::CropSelected(Crop::Wheat));
        assert!(!state.can_request());
        state.update(Message::SoilSelected(SoilType::Loamy));
        assert!(state.can_request());
    }

    #[test]
    fn request_is_refused_while_pending() {
        let mut state = State::default();
        state.update(Message::CropSelected(Crop::Rice));
        state.update(Message::SoilSelected(SoilType::Clay));
        assert_eq!(
            state.update(Message::GetRecommendation),
            Event::RequestRecommendation {
                crop: Crop::Rice,
                soil: SoilType::Clay
            }
        );
        assert!(state.is_pending());
        assert!(!state.can_request());
        assert_eq!(state.update(Message::GetRecommendation), Event::None);

        state.update(Message::RecommendationReady(recommend(Crop::Rice, SoilType::Clay)));
        assert!(!state.is_pending());
        assert_eq!(
            state.recommendation().map(|r| r.amount.as_str()),
            Some("2.5 kg per acre")
        );
    }

    #[test]
    fn soil_failure_shows_unavailable() {
        let mut state = State::default();
        assert_eq!(state.reading(), SoilReading::Loading);
        state.update(Message::SoilLoaded(Err(SoilLookupError::Provider(ProviderError::Transport(
            "offline".into(),
        )))));
        assert_eq!(state.reading(), SoilReading::Unavailable);
    }

    #[test]
    fn soil_without_location_shows_unavailable() {
        let mut state = State::default();
        state.update(Message::SoilLoaded(Err(SoilLookupError::Location(GeolocationError::Denied))));
        assert_eq!(state.reading(), SoilReading::Unavailable);
    }

    #[test]
    fn soil_success_is_kept() {
        let mut state = State::default();
        let conditions = SoilConditions {
            temperature_c: Some(24.6),
            moisture_vol: Some(0.3),
        };
        state.update(Message::SoilLoaded(Ok(conditions)));
        assert_eq!(state.reading(), SoilReading::Ready(conditions));
    }
}
