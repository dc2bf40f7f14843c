//! Language type: the closed set of languages the service can answer in.
//!
//! Request input is free-form text (`?lang=FR-ca`, `""`, `"zz"`), so parsing
//! happens in two steps: `from_code` is an exact match against the canonical
//! ISO 639-1 codes, and `normalize` cleans up raw input and falls back to the
//! canonical language when nothing matches.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "ar")]
    Arabic,
}

impl Language {
    /// Every supported language, canonical first.
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::French,
        Language::Italian,
        Language::Spanish,
        Language::Arabic,
    ];

    /// Get the canonical (default) language.
    ///
    /// Every catalog must hold a non-empty group for it, and every lookup that
    /// cannot be satisfied falls back to it.
    pub const fn canonical() -> Language {
        Language::English
    }

    /// Create a Language from an exact ISO 639-1 code.
    ///
    /// # Returns
    /// * `Some(Language)` if `code` is one of `en`, `fr`, `it`, `es`, `ar`
    /// * `None` otherwise (no trimming or case folding is done here)
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en" => Some(Language::English),
            "fr" => Some(Language::French),
            "it" => Some(Language::Italian),
            "es" => Some(Language::Spanish),
            "ar" => Some(Language::Arabic),
            _ => None,
        }
    }

    /// Turn raw request input into a supported language.
    ///
    /// Trims, lowercases and drops a region subtag (`fr-CA`, `es_MX`), then
    /// matches the remaining code. Empty, unknown or malformed input yields
    /// the canonical language.
    pub fn normalize(raw: &str) -> Language {
        let lowered = raw.trim().to_lowercase();
        let primary = lowered
            .split(|c: char| c == '-' || c == '_')
            .next()
            .unwrap_or_default();

        Language::from_code(primary).unwrap_or_else(Language::canonical)
    }

    /// Get the ISO 639-1 language code.
    pub const fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::Italian => "it",
            Language::Spanish => "es",
            Language::Arabic => "ar",
        }
    }

    /// Check if this is the canonical language.
    pub fn is_canonical(self) -> bool {
        self == Language::canonical()
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::canonical()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
