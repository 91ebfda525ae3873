// SPDX-License-Identifier: MPL-2.0
//! Weather page: current conditions, soil, alerts and the 7-day forecast.

use super::{card, layout, section_title, title, ViewContext};
use crate::application::port::ProviderError;
use crate::domain::pest::Severity;
use crate::domain::weather::{DailyForecast, WeatherAlert, WeatherKind, WeatherReport};
use crate::i18n::{Dictionary, Key};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::labels;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Column, Container, Row, Text},
    Element, Length,
};

const DASH: &str = "--";
const TIME_FORMAT: &str = "%d %b %Y %H:%M";

/// Loading until the report arrives; any failed call is terminal.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum State {
    #[default]
    Loading,
    Ready(Box<WeatherReport>),
    Failed,
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Result<WeatherReport, ProviderError>),
}

impl State {
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Loaded(Ok(report)) => *self = State::Ready(Box::new(report)),
            Message::Loaded(Err(err)) => {
                tracing::warn!(%err, "weather data unavailable");
                *self = State::Failed;
            }
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let dict = ctx.dict;
        let heading = title(dict.tr(Key::FeatureWeatherAlerts));

        let report = match self {
            State::Loading => {
                return layout(vec![heading, card(centered(dict.tr(Key::WeatherLoading), palette::GRAY_500))]);
            }
            State::Failed => {
                return layout(vec![heading, card(centered(dict.tr(Key::WeatherError), palette::ERROR_500))]);
            }
            State::Ready(report) => report,
        };

        let coordinates = dict.tr_with(
            Key::CoordinatesLabel,
            &[
                ("latitude", format!("{:.4}", report.coordinates.latitude())),
                ("longitude", format!("{:.4}", report.coordinates.longitude())),
            ],
        );

        let current = &report.current;
        let humidity = current
            .humidity_pct
            .map_or_else(|| DASH.to_string(), |h| format!("{h}%"));
        let precipitation = current
            .precipitation_mm
            .map_or_else(|| DASH.to_string(), |p| format!("{p} mm"));
        let soil = dict.tr_with(
            Key::SoilSummary,
            &[
                (
                    "temperature",
                    report
                        .soil
                        .temperature_rounded()
                        .map_or_else(|| DASH.to_string(), |t| format!("{t}°C")),
                ),
                (
                    "moisture",
                    report
                        .soil
                        .moisture_percent()
                        .map_or_else(|| DASH.to_string(), |m| format!("{m}%")),
                ),
            ],
        );

        let now = Column::new()
            .spacing(spacing::XS)
            .push(Text::new(coordinates).size(typography::CAPTION).color(palette::GRAY_500))
            .push(
                Row::new()
                    .spacing(spacing::LG)
                    .align_y(Vertical::Center)
                    .push(Text::new(format!("{}°C", current.temperature_c)).size(typography::DISPLAY))
                    .push(
                        Column::new()
                            .push(Text::new(format!("{}: {humidity}", dict.tr(Key::Humidity))))
                            .push(Text::new(format!(
                                "{}: {precipitation}",
                                dict.tr(Key::Precipitation)
                            ))),
                    ),
            )
            .push(Text::new(soil).size(typography::BODY));

        let mut alerts = Column::new().spacing(spacing::XS);
        if report.alerts.is_empty() {
            alerts = alerts.push(Text::new(dict.tr(Key::NoActiveAlerts)).color(palette::GREEN_700));
        } else {
            for alert in &report.alerts {
                alerts = alerts.push(alert_view(alert, dict));
            }
        }

        let mut forecast = Column::new()
            .spacing(spacing::XS)
            .push(section_title(dict.tr(Key::ForecastTitle)));
        for day in &report.forecast {
            forecast = forecast.push(forecast_row(day, dict));
        }

        layout(vec![heading, card(now), card(alerts), card(forecast)])
    }
}

fn centered<'a>(label: String, color: iced::Color) -> Element<'a, Message> {
    Container::new(Text::new(label).color(color))
        .center_x(Length::Fill)
        .padding(spacing::LG)
        .into()
}

fn alert_view<'a>(alert: &'a WeatherAlert, dict: Dictionary<'_>) -> Element<'a, Message> {
    let level = Severity::parse(&alert.severity).unwrap_or_default();
    let format_time = |time: Option<chrono::DateTime<chrono::Local>>| {
        time.map_or_else(|| DASH.to_string(), |t| t.format(TIME_FORMAT).to_string())
    };
    let validity = dict.tr_with(
        Key::AlertValidity,
        &[
            ("start", format_time(alert.starts_local())),
            ("end", format_time(alert.ends_local())),
        ],
    );

    let content = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(alert.title.as_str()).size(typography::BODY_LG))
        .push(Text::new(alert.description.as_str()).size(typography::BODY))
        .push(Text::new(validity).size(typography::CAPTION));

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::severity(level))
        .into()
}

fn kind_glyph(kind: WeatherKind) -> &'static str {
    match kind {
        WeatherKind::Clear => "☀",
        WeatherKind::Cloudy => "☁",
        WeatherKind::Rain => "☂",
        WeatherKind::Other => "⛅",
    }
}

fn forecast_row<'a>(day: &DailyForecast, dict: Dictionary<'_>) -> Element<'a, Message> {
    let kind = day.kind();
    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(dict.tr(labels::weekday(day.weekday()))).width(Length::FillPortion(2)))
        .push(
            Text::new(format!("{} {}", kind_glyph(kind), dict.tr(labels::weather_kind(kind))))
                .width(Length::FillPortion(3)),
        )
        .push(
            Text::new(format!(
                "{}° / {}°",
                day.temp_max_c.round() as i32,
                day.temp_min_c.round() as i32
            ))
            .width(Length::FillPortion(2))
            .align_x(Horizontal::Right),
        )
        .push(
            Text::new(format!("{} mm", day.precipitation_mm))
                .width(Length::FillPortion(2))
                .align_x(Horizontal::Right)
                .color(palette::BLUE_600),
        )
        .into()
}
