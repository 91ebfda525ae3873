// SPDX-License-Identifier: MPL-2.0
//! Language preference with a persistent backing store.

use crate::application::port::KeyValueStore;
use crate::i18n::Language;
use std::sync::Arc;

/// Storage key of the preferred language code.
pub const LANGUAGE_KEY: &str = "preferred-language";

/// Owns the active interface language.
///
/// This is the only place the preference is written. The `App` root holds
/// it and passes the current [`Language`] down to views by value.
pub struct PreferenceStore {
    store: Arc<dyn KeyValueStore>,
    current: Language,
}

impl std::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl PreferenceStore {
    /// Reads the stored preference, or uses `fallback` when it is absent or
    /// not one of the supported codes.
    #[must_use]
    pub fn load(store: Arc<dyn KeyValueStore>, fallback: Language) -> Self {
        let current = match store.get(LANGUAGE_KEY) {
            Some(code) => Language::from_code(&code).unwrap_or_else(|| {
                tracing::debug!(%code, "ignoring unknown stored language");
                fallback
            }),
            None => fallback,
        };
        Self { store, current }
    }

    #[must_use]
    pub fn get(&self) -> Language {
        self.current
    }

    /// Switches the language and writes it through to storage.
    ///
    /// A failed write is logged; the new language still applies for the
    /// rest of the session.
    pub fn set(&mut self, language: Language) {
        self.current = language;
        if let Err(err) = self.store.set(LANGUAGE_KEY, language.code()) {
            tracing::warn!(%err, language = language.code(), "failed to persist language preference");
        }
    }

    /// Uses `language` for this session without persisting it.
    pub fn override_for_session(&mut self, language: Language) {
        self.current = language;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::StorageError;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockStore {
        values: Mutex<HashMap<String, String>>,
        fail_writes: bool,
    }

    impl KeyValueStore for MockStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.lock().ok()?.get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.fail_writes {
                return Err(StorageError::Write("read-only".to_string()));
            }
            self.values
                .lock()
                .map_err(|e| StorageError::Write(e.to_string()))?
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn missing_preference_uses_fallback() {
        let prefs = PreferenceStore::load(Arc::new(MockStore::default()), Language::Hi);
        assert_eq!(prefs.get(), Language::Hi);
    }

    #[test]
    fn unknown_stored_code_uses_fallback() {
        let store = MockStore::default();
        store.set(LANGUAGE_KEY, "de").expect("mock write");
        let prefs = PreferenceStore::load(Arc::new(store), Language::En);
        assert_eq!(prefs.get(), Language::En);
    }

    #[test]
    fn set_writes_through() {
        let store = Arc::new(MockStore::default());
        let mut prefs = PreferenceStore::load(store.clone(), Language::Hi);
        prefs.set(Language::Pa);
        assert_eq!(prefs.get(), Language::Pa);
        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("pa"));

        let reloaded = PreferenceStore::load(store, Language::Hi);
        assert_eq!(reloaded.get(), Language::Pa);
    }

    #[test]
    fn failed_write_keeps_in_memory_value() {
        let store = Arc::new(MockStore {
            fail_writes: true,
            ..MockStore::default()
        });
        let mut prefs = PreferenceStore::load(store, Language::Hi);
        prefs.set(Language::Mr);
        assert_eq!(prefs.get(), Language::Mr);
    }

    #[test]
    fn session_override_is_not_persisted() {
        let store = Arc::new(MockStore::default());
        let mut prefs = PreferenceStore::load(store.clone(), Language::Hi);
        prefs.override_for_session(Language::En);
        assert_eq!(prefs.get(), Language::En);
        assert_eq!(store.get(LANGUAGE_KEY), None);
    }
}
