// SPDX-License-Identifier: MPL-2.0
//! Fluent bundles for every [`Language`] and the per-language [`Dictionary`].

use super::{Key, Language};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Holds one Fluent bundle per supported language, built once at startup.
pub struct I18n {
    bundles: HashMap<Language, FluentBundle<FluentResource>>,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("languages", &self.bundles.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl I18n {
    #[must_use]
    pub fn new() -> Self {
        let bundles = Language::ALL
            .into_iter()
            .map(|lang| (lang, load_bundle(lang)))
            .collect();
        Self { bundles }
    }

    /// Returns the dictionary for `language`.
    #[must_use]
    pub fn resolve(&self, language: Language) -> Dictionary<'_> {
        Dictionary {
            language,
            bundle: self.bundles.get(&language),
        }
    }
}

fn load_bundle(language: Language) -> FluentBundle<FluentResource> {
    let mut bundle = FluentBundle::new(vec![language.langid()]);
    // Isolation marks show up as stray glyphs next to Devanagari and Gurmukhi.
    bundle.set_use_isolating(false);

    let filename = format!("{}.ftl", language.code());
    let Some(file) = Asset::get(&filename) else {
        tracing::error!(file = %filename, "embedded locale file missing");
        return bundle;
    };

    let source = String::from_utf8_lossy(file.data.as_ref()).into_owned();
    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((partial, errors)) => {
            tracing::error!(file = %filename, ?errors, "locale file has syntax errors");
            partial
        }
    };
    bundle.add_resource_overriding(resource);
    bundle
}

/// Message lookup for one language.
#[derive(Clone, Copy)]
pub struct Dictionary<'a> {
    language: Language,
    bundle: Option<&'a FluentBundle<FluentResource>>,
}

impl std::fmt::Debug for Dictionary<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dictionary")
            .field("language", &self.language)
            .finish()
    }
}

impl Dictionary<'_> {
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Resolves a message without arguments.
    #[must_use]
    pub fn tr(&self, key: Key) -> String {
        self.format(key, None)
    }

    /// Resolves a message with named placeables, e.g. `{ $level }`.
    #[must_use]
    pub fn tr_with(&self, key: Key, args: &[(&str, String)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, FluentValue::from(value.clone()));
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: Key, args: Option<&FluentArgs<'_>>) -> String {
        let pattern = self
            .bundle
            .and_then(|bundle| bundle.get_message(key.id()).map(|msg| (bundle, msg)))
            .and_then(|(bundle, msg)| msg.value().map(|pattern| (bundle, pattern)));

        match pattern {
            Some((bundle, pattern)) => {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if !errors.is_empty() {
                    tracing::debug!(key = key.id(), ?errors, "fluent formatting errors");
                }
                value.into_owned()
            }
            // Unreachable while build.rs checks every locale; the bare id
            // marks the defect on screen.
            None => {
                tracing::error!(key = key.id(), language = ?self.language, "message missing from bundle");
                key.id().to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_resolves_in_every_language() {
        let i18n = I18n::new();
        for lang in Language::ALL {
            let dict = i18n.resolve(lang);
            for key in Key::ALL {
                let value = dict.tr(key);
                assert_ne!(value, key.id(), "{lang:?} lacks {}", key.id());
                assert!(!value.trim().is_empty(), "{lang:?} has empty {}", key.id());
            }
        }
    }

    #[test]
    fn resolves_language_specific_text() {
        let i18n = I18n::new();
        assert_eq!(i18n.resolve(Language::En).tr(Key::NavHome), "Home");
        assert_eq!(i18n.resolve(Language::Hi).tr(Key::AppName), "फसलमित्र");
        assert_eq!(i18n.resolve(Language::Pa).tr(Key::AppName), "ਫਸਲਮਿਤਰ");
    }

    #[test]
    fn placeables_are_substituted_without_isolation_marks() {
        let i18n = I18n::new();
        let text = i18n
            .resolve(Language::En)
            .tr_with(Key::SeverityLabel, &[("level", "high".to_string())]);
        assert!(text.ends_with("high"));
        assert!(!text.contains('\u{2068}'));
    }

    #[test]
    fn dictionary_reports_its_language() {
        let i18n = I18n::new();
        assert_eq!(i18n.resolve(Language::Mr).language(), Language::Mr);
    }
}
