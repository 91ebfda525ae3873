// SPDX-License-Identifier: MPL-2.0
use fasal_mitra::application::chat::{ask_assistant, load_history, save_history, ChatSession};
use fasal_mitra::application::fertilizer::request_recommendation;
use fasal_mitra::application::pest::fallback_detection;
use fasal_mitra::application::port::{
    AssistantError, BoxFuture, KeyValueStore, ProviderError, TextModel, WeatherProvider,
};
use fasal_mitra::application::preferences::PreferenceStore;
use fasal_mitra::application::weather::{load_report, LocationPolicy};
use fasal_mitra::config::{self, Config};
use fasal_mitra::domain::advisory::{Crop, SoilType};
use fasal_mitra::domain::chat::{QuestionHistory, Role};
use fasal_mitra::domain::location::Coordinates;
use fasal_mitra::domain::pest::reference_detections;
use fasal_mitra::domain::weather::{DailyForecast, SoilConditions, WeatherAlert, WeatherSnapshot};
use fasal_mitra::i18n::{I18n, Key, Language};
use fasal_mitra::infrastructure::{FileStore, FixedGeolocator};
use futures_util::FutureExt;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::tempdir;

const DELHI: (f64, f64) = (28.6139, 77.209);

fn policy() -> LocationPolicy {
    LocationPolicy {
        fallback: Coordinates::new(DELHI.0, DELHI.1),
        timeout: Duration::from_millis(200),
    }
}

/// Weather provider that records every call and can fail on one of them.
#[derive(Default)]
struct RecordingWeather {
    calls: Mutex<Vec<(&'static str, f64, f64)>>,
    fail_on: Option<&'static str>,
}

impl RecordingWeather {
    fn record(&self, name: &'static str, at: Coordinates) -> Result<(), ProviderError> {
        self.calls
            .lock()
            .expect("lock")
            .push((name, at.latitude(), at.longitude()));
        if self.fail_on == Some(name) {
            Err(ProviderError::Status(500))
        } else {
            Ok(())
        }
    }

    fn calls(&self) -> Vec<(&'static str, f64, f64)> {
        self.calls.lock().expect("lock").clone()
    }
}

impl WeatherProvider for RecordingWeather {
    fn current(&self, at: Coordinates) -> BoxFuture<'static, Result<WeatherSnapshot, ProviderError>> {
        let result = self
            .record("current", at)
            .map(|()| WeatherSnapshot::from_raw(30.2, Some(55.0), Some(0.0)));
        futures_util::future::ready(result).boxed()
    }

    fn soil(&self, at: Coordinates) -> BoxFuture<'static, Result<SoilConditions, ProviderError>> {
        let result = self.record("soil", at).map(|()| SoilConditions::default());
        futures_util::future::ready(result).boxed()
    }

    fn forecast(&self, at: Coordinates) -> BoxFuture<'static, Result<Vec<DailyForecast>, ProviderError>> {
        let result = self.record("forecast", at).map(|()| Vec::new());
        futures_util::future::ready(result).boxed()
    }

    fn alerts(&self, at: Coordinates) -> BoxFuture<'static, Result<Vec<WeatherAlert>, ProviderError>> {
        let result = self.record("alerts", at).map(|()| Vec::new());
        futures_util::future::ready(result).boxed()
    }
}

/// Language model that only ever replies with whitespace.
struct SilentModel {
    calls: Mutex<usize>,
}

impl TextModel for SilentModel {
    fn is_configured(&self) -> bool {
        true
    }

    fn complete(&self, _prompt: String) -> BoxFuture<'static, Result<String, AssistantError>> {
        *self.calls.lock().expect("lock") += 1;
        futures_util::future::ready(Ok("   ".to_string())).boxed()
    }
}

#[test]
fn test_language_preference_survives_restart() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("state.cbor");

    let (store, warning) = FileStore::open(path.clone());
    assert!(warning.is_none());
    let mut preferences = PreferenceStore::load(Arc::new(store), Language::Hi);
    assert_eq!(preferences.get(), Language::Hi);
    preferences.set(Language::Pa);

    let (reopened, _) = FileStore::open(path);
    let preferences = PreferenceStore::load(Arc::new(reopened), Language::Hi);
    assert_eq!(preferences.get(), Language::Pa);
}

#[test]
fn test_every_language_resolves_every_key() {
    let i18n = I18n::new();
    for language in Language::ALL {
        let dict = i18n.resolve(language);
        for key in Key::ALL {
            let text = dict.tr(key);
            assert!(!text.trim().is_empty(), "{language:?} {key:?} is empty");
            assert_ne!(text, key.id(), "{language:?} {key:?} is missing");
        }
    }
}

#[test]
fn test_language_names_and_labels() {
    let i18n = I18n::new();
    assert_eq!(i18n.resolve(Language::En).tr(Key::NavHome), "Home");
    assert_ne!(i18n.resolve(Language::Hi).tr(Key::NavHome), "Home");
    let names: Vec<&str> = Language::ALL.iter().map(|l| l.native_name()).collect();
    assert_eq!(names, vec!["English", "हिंदी", "ਪੰਜਾਬੀ", "मराठी"]);
}

#[test]
fn test_whitespace_question_is_a_no_op() {
    let mut session = ChatSession::new("hello", QuestionHistory::default());
    assert!(session.submit(" \n\t ", "instruction").is_none());
    assert_eq!(session.messages().len(), 1);
    assert!(session.history().is_empty());
    assert!(!session.is_awaiting());
}

#[tokio::test]
async fn test_two_blank_replies_give_one_localized_failure() {
    let i18n = I18n::new();
    let dict = i18n.resolve(Language::Mr);
    let model = Arc::new(SilentModel {
        calls: Mutex::new(0),
    });

    let mut session = ChatSession::new(dict.tr(Key::ChatGreeting), QuestionHistory::default());
    let prompt = session
        .submit("Soybean yellowing?", &dict.tr(Key::ChatInstruction))
        .expect("question accepted");
    let outcome = ask_assistant(model.clone(), prompt).await;
    assert_eq!(outcome, Err(AssistantError::EmptyResponse));
    assert_eq!(*model.calls.lock().expect("lock"), 2);

    session.complete(outcome, &dict);
    let messages = session.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[2].role(), Role::Assistant);
    assert_eq!(messages[2].content(), dict.tr(Key::ChatErrorUnavailable));
}

#[test]
fn test_history_keeps_fifty_newest_first() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (store, _) = FileStore::open(dir.path().join("state.cbor"));

    let i18n = I18n::new();
    let dict = i18n.resolve(Language::En);
    let mut session = ChatSession::new("hello", QuestionHistory::default());
    for i in 1..=51 {
        session.submit(&format!("question {i}"), "instruction");
        session.complete(Ok("ok".to_string()), &dict);
    }
    save_history(&store, session.history());

    let loaded = load_history(&store);
    assert_eq!(loaded.len(), 50);
    assert_eq!(loaded.entries()[0], "question 51");
    assert_eq!(loaded.entries()[49], "question 2");
}

#[test]
fn test_repeated_question_is_stored_once() {
    let mut history = QuestionHistory::default();
    history.record("Q1");
    history.record("Q2");
    history.record("Q1");
    assert_eq!(history.entries(), ["Q1".to_string(), "Q2".to_string()]);
}

#[test]
fn test_pest_fallback_is_seedable() {
    let references = reference_detections();
    let first = fallback_detection(&mut StdRng::seed_from_u64(11));
    let second = fallback_detection(&mut StdRng::seed_from_u64(11));
    assert_eq!(first, second);
    assert!(references.contains(&first));
}

#[tokio::test(start_paused = true)]
async fn test_fertilizer_recommendation_is_fixed() {
    let rec = request_recommendation(Crop::Wheat, SoilType::Loamy, Duration::from_millis(1500)).await;
    assert_eq!(rec.fertilizer, "NPK 20:20:0 + Zinc Sulphate");
    assert_eq!(rec.amount, "2.5 kg per acre");
    assert_eq!(rec.timing, "Apply before sowing and 30 days after sowing");
    assert_eq!(
        rec.notes,
        "Soil health is good. Regular water management recommended."
    );
}

#[tokio::test]
async fn test_weather_uses_fallback_coordinates_for_all_calls() {
    let provider = Arc::new(RecordingWeather::default());
    let report = load_report(provider.clone(), Arc::new(FixedGeolocator::unsupported()), policy())
        .await
        .expect("report");

    assert_eq!(report.coordinates, Coordinates::new(DELHI.0, DELHI.1));
    let calls = provider.calls();
    let names: Vec<&str> = calls.iter().map(|c| c.0).collect();
    assert_eq!(names, vec!["current", "soil", "forecast", "alerts"]);
    assert!(calls.iter().all(|c| c.1 == DELHI.0 && c.2 == DELHI.1));
}

#[tokio::test]
async fn test_weather_failure_is_terminal() {
    let provider = Arc::new(RecordingWeather {
        fail_on: Some("soil"),
        ..RecordingWeather::default()
    });
    let result = load_report(provider.clone(), Arc::new(FixedGeolocator::unsupported()), policy()).await;
    assert_eq!(result, Err(ProviderError::Status(500)));
    let names: Vec<&str> = provider.calls().iter().map(|c| c.0).collect();
    assert_eq!(names, vec!["current", "soil"]);
}

#[test]
fn test_config_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("mr".to_string());
    config.advisory.recommendation_delay_ms = 500;
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.fallback_language(), Language::Mr);
    assert_eq!(loaded.recommendation_delay(), Duration::from_millis(500));
}

#[test]
fn test_file_store_creates_parent_directories() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (store, _) = FileStore::open(dir.path().join("nested").join("state.cbor"));
    store.set("k", "v").expect("write");
    assert_eq!(store.get("k").as_deref(), Some("v"));
}
