// SPDX-License-Identifier: MPL-2.0
//! Open-Meteo weather adapter.
//!
//! All four queries hit the same forecast endpoint with different parameter
//! sets. Responses are decoded into small serde structs and converted into
//! domain types by the `parse_*` functions, which are unit-tested against
//! recorded bodies.

use crate::application::port::{BoxFuture, ProviderError, WeatherProvider};
use crate::domain::location::Coordinates;
use crate::domain::weather::{DailyForecast, SoilConditions, WeatherAlert, WeatherSnapshot};
use chrono::NaiveDate;
use futures_util::FutureExt;
use serde::de::DeserializeOwned;
use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenMeteoClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: super::http::client(),
            base_url: base_url.into(),
        }
    }

    fn request<T, R>(
        &self,
        at: Coordinates,
        params: &[(&'static str, &'static str)],
        parse: fn(T) -> Result<R, ProviderError>,
    ) -> BoxFuture<'static, Result<R, ProviderError>>
    where
        T: DeserializeOwned + Send + 'static,
        R: Send + 'static,
    {
        let client = self.client.clone();
        let url = self.base_url.clone();
        let mut query: Vec<(&'static str, String)> = vec![
            ("latitude", at.latitude().to_string()),
            ("longitude", at.longitude().to_string()),
        ];
        query.extend(params.iter().map(|(k, v)| (*k, (*v).to_string())));

        async move {
            let body: T = fetch_json(&client, &url, &query).await?;
            parse(body)
        }
        .boxed()
    }
}

async fn fetch_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    query: &[(&'static str, String)],
) -> Result<T, ProviderError> {
    let response = client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|e| ProviderError::Transport(e.to_string()))?;

    if !response.status().is_success() {
        return Err(ProviderError::Status(response.status().as_u16()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ProviderError::Decode(e.to_string()))
}

impl WeatherProvider for OpenMeteoClient {
    fn current(&self, at: Coordinates) -> BoxFuture<'static, Result<WeatherSnapshot, ProviderError>> {
        self.request(
            at,
            &[
                ("current_weather", "true"),
                ("hourly", "relativehumidity_2m,precipitation"),
            ],
            parse_current,
        )
    }

    fn soil(&self, at: Coordinates) -> BoxFuture<'static, Result<SoilConditions, ProviderError>> {
        self.request(
            at,
            &[("hourly", "soil_temperature_0cm,soil_moisture_0_to_1cm")],
            parse_soil,
        )
    }

    fn forecast(&self, at: Coordinates) -> BoxFuture<'static, Result<Vec<DailyForecast>, ProviderError>> {
        self.request(
            at,
            &[
                (
                    "daily",
                    "temperature_2m_max,temperature_2m_min,precipitation_sum,weathercode",
                ),
                ("timezone", "auto"),
            ],
            parse_forecast,
        )
    }

    fn alerts(&self, at: Coordinates) -> BoxFuture<'static, Result<Vec<WeatherAlert>, ProviderError>> {
        self.request(at, &[("alerts", "true")], parse_alerts)
    }
}

// =============================================================================
// Response bodies
// =============================================================================

#[derive(Debug, Deserialize)]
struct CurrentBody {
    current_weather: Option<CurrentWeather>,
    #[serde(default)]
    hourly: CurrentHourly,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct CurrentHourly {
    #[serde(default)]
    relativehumidity_2m: Vec<Option<f64>>,
    #[serde(default)]
    precipitation: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct SoilBody {
    #[serde(default)]
    hourly: SoilHourly,
}

#[derive(Debug, Default, Deserialize)]
struct SoilHourly {
    #[serde(default)]
    soil_temperature_0cm: Vec<Option<f64>>,
    #[serde(default)]
    soil_moisture_0_to_1cm: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct ForecastBody {
    daily: Option<DailySeries>,
}

#[derive(Debug, Deserialize)]
struct DailySeries {
    time: Vec<String>,
    temperature_2m_max: Vec<Option<f64>>,
    temperature_2m_min: Vec<Option<f64>>,
    precipitation_sum: Vec<Option<f64>>,
    weathercode: Vec<Option<u16>>,
}

#[derive(Debug, Deserialize)]
struct AlertsBody {
    #[serde(default)]
    alerts: Vec<AlertEntry>,
}

#[derive(Debug, Deserialize)]
struct AlertEntry {
    event: Option<String>,
    description: Option<String>,
    severity: Option<String>,
    start: Option<i64>,
    end: Option<i64>,
}

// =============================================================================
// Conversions
// =============================================================================

fn first(series: &[Option<f64>]) -> Option<f64> {
    series.first().copied().flatten()
}

fn parse_current(body: CurrentBody) -> Result<WeatherSnapshot, ProviderError> {
    let temperature = body
        .current_weather
        .and_then(|current| current.temperature)
        .unwrap_or(0.0);
    Ok(WeatherSnapshot::from_raw(
        temperature,
        first(&body.hourly.relativehumidity_2m),
        first(&body.hourly.precipitation),
    ))
}

fn parse_soil(body: SoilBody) -> Result<SoilConditions, ProviderError> {
    Ok(SoilConditions {
        temperature_c: first(&body.hourly.soil_temperature_0cm),
        moisture_vol: first(&body.hourly.soil_moisture_0_to_1cm),
    })
}

fn parse_forecast(body: ForecastBody) -> Result<Vec<DailyForecast>, ProviderError> {
    let daily = body
        .daily
        .ok_or_else(|| ProviderError::Decode("missing daily series".to_string()))?;

    daily
        .time
        .iter()
        .enumerate()
        .map(|(idx, date)| {
            let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map_err(|e| ProviderError::Decode(format!("bad date {date:?}: {e}")))?;
            let value = |series: &[Option<f64>]| series.get(idx).copied().flatten().unwrap_or_default();
            Ok(DailyForecast {
                date,
                temp_max_c: value(&daily.temperature_2m_max),
                temp_min_c: value(&daily.temperature_2m_min),
                precipitation_mm: value(&daily.precipitation_sum),
                weather_code: daily.weathercode.get(idx).copied().flatten().unwrap_or_default(),
            })
        })
        .collect()
}

fn parse_alerts(body: AlertsBody) -> Result<Vec<WeatherAlert>, ProviderError> {
    Ok(body
        .alerts
        .into_iter()
        .enumerate()
        .map(|(idx, alert)| WeatherAlert {
            id: idx.to_string(),
            title: alert
                .event
                .clone()
                .unwrap_or_else(|| "Weather Alert".to_string()),
            description: alert.description.unwrap_or_default(),
            severity: alert.severity.unwrap_or_else(|| "medium".to_string()),
            event: alert.event.unwrap_or_default(),
            starts_at: alert.start.unwrap_or_default(),
            ends_at: alert.end.unwrap_or_default(),
        })
        .collect())
}
