// SPDX-License-Identifier: MPL-2.0
//! The closed set of interface languages.

use std::fmt;
use unic_langid::LanguageIdentifier;

/// An interface language. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    En,
    #[default]
    Hi,
    Pa,
    Mr,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::En, Language::Hi, Language::Pa, Language::Mr];

    /// Short code stored in preferences and used for the locale file name.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Pa => "pa",
            Language::Mr => "mr",
        }
    }

    /// Name of the language written in that language.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिंदी",
            Language::Pa => "ਪੰਜਾਬੀ",
            Language::Mr => "मराठी",
        }
    }

    /// Parses a stored code. Anything outside the four codes is `None`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code.trim())
    }

    #[must_use]
    pub fn langid(self) -> LanguageIdentifier {
        self.code().parse().unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.native_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_language_is_hindi() {
        assert_eq!(Language::default(), Language::Hi);
    }

    #[test]
    fn codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code(""), None);
        assert_eq!(Language::from_code("EN"), None);
    }

    #[test]
    fn display_uses_native_name() {
        assert_eq!(Language::Pa.to_string(), "ਪੰਜਾਬੀ");
    }

    #[test]
    fn langid_matches_code() {
        assert_eq!(Language::Mr.langid().language.as_str(), "mr");
    }
}
