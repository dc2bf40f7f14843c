//! Quote store: the immutable catalog of quotes grouped by language.
//!
//! A catalog is built once at startup, either from the built-in data or from a
//! JSON file, and is read-only afterwards. Construction enforces the one
//! integrity rule worth failing boot over: the canonical (English) group must
//! exist and be non-empty. Every other group is optional; an empty one is
//! dropped so that lookups only ever see non-empty groups.

use crate::i18n::Language;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use super::data;

/// English source of a translated quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginalQuote {
    pub text: String,
    pub author: String,
}

/// A single quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
    /// Set when this quote is a pre-authored translation of an English quote
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<OriginalQuote>,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            original: None,
        }
    }

    /// Tag this quote as a translation of an English original.
    pub fn translated_from(mut self, text: impl Into<String>, author: impl Into<String>) -> Self {
        self.original = Some(OriginalQuote {
            text: text.into(),
            author: author.into(),
        });
        self
    }
}

/// Errors raised while building a catalog. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("default language group '{0}' is missing or empty")]
    EmptyDefaultGroup(Language),

    #[error("failed to read quote catalog from {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse quote catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid quote #{index} in '{language}' group: {reason}")]
    InvalidQuote {
        language: Language,
        index: usize,
        reason: &'static str,
    },
}

/// Non-empty set of quotes for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageGroup {
    language: Language,
    quotes: Vec<Quote>,
}

impl LanguageGroup {
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Check whether a text/author pair belongs to this group.
    pub fn contains(&self, text: &str, author: &str) -> bool {
        self.quotes
            .iter()
            .any(|q| q.text == text && q.author == author)
    }
}

/// Mapping from language to its quote group.
///
/// The canonical group is held apart from the others so that the fallback
/// target always exists without a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteCatalog {
    default: LanguageGroup,
    groups: BTreeMap<Language, LanguageGroup>,
}

impl QuoteCatalog {
    /// Build a catalog from quote lists keyed by language.
    ///
    /// Lists for the same language are merged. Empty non-canonical groups are
    /// dropped; a missing or empty canonical group is an error.
    pub fn from_groups<I>(groups: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (Language, Vec<Quote>)>,
    {
        let mut merged: BTreeMap<Language, Vec<Quote>> = BTreeMap::new();
        for (language, quotes) in groups {
            merged.entry(language).or_default().extend(quotes);
        }

        for (language, quotes) in &merged {
            for (index, quote) in quotes.iter().enumerate() {
                validate_quote(*language, index, quote)?;
            }
        }

        let canonical = Language::canonical();
        let default_quotes = merged.remove(&canonical).unwrap_or_default();
        if default_quotes.is_empty() {
            return Err(CatalogError::EmptyDefaultGroup(canonical));
        }

        let mut others = BTreeMap::new();
        for (language, quotes) in merged {
            if quotes.is_empty() {
                warn!("Dropping empty '{}' quote group", language);
                continue;
            }
            others.insert(language, LanguageGroup { language, quotes });
        }

        Ok(Self {
            default: LanguageGroup {
                language: canonical,
                quotes: default_quotes,
            },
            groups: others,
        })
    }

    /// Build the catalog shipped with the service.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_groups(Language::ALL.into_iter().map(|language| {
            let quotes: Vec<Quote> = data::entries(language)
                .iter()
                .map(|entry| {
                    let quote = Quote::new(entry.text, entry.author);
                    match entry.original {
                        Some((text, author)) => quote.translated_from(text, author),
                        None => quote,
                    }
                })
                .collect();
            (language, quotes)
        }))
    }

    /// Parse a catalog from JSON: an object of language code to quote array.
    ///
    /// ```json
    /// { "en": [{ "text": "A", "author": "X" }], "fr": [] }
    /// ```
    ///
    /// Codes are trimmed and lowercased. Unsupported codes are skipped.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: BTreeMap<String, Vec<Quote>> = serde_json::from_str(json)?;

        let mut groups = Vec::with_capacity(raw.len());
        for (code, quotes) in raw {
            match Language::from_code(&code.trim().to_lowercase()) {
                Some(language) => groups.push((language, quotes)),
                None => warn!(
                    "Skipping {} quotes for unsupported language '{}'",
                    quotes.len(),
                    code
                ),
            }
        }

        Self::from_groups(groups)
    }

    /// Load a catalog from a JSON file (see `from_json_str` for the format).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json_str(&json)?;
        info!(
            "Loaded {} quotes from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Get the group for a language, falling back to the canonical group.
    pub fn group_for(&self, language: Language) -> &LanguageGroup {
        self.resolve(language).1
    }

    /// Like `group_for`, but also reports which language's group was used.
    pub fn resolve(&self, language: Language) -> (Language, &LanguageGroup) {
        match self.groups.get(&language) {
            Some(group) => (language, group),
            None => (self.default.language, &self.default),
        }
    }

    /// Check whether a language has its own group (no fallback needed).
    pub fn has_group(&self, language: Language) -> bool {
        language == self.default.language || self.groups.contains_key(&language)
    }

    /// Languages that have a group, canonical first.
    pub fn languages(&self) -> Vec<Language> {
        std::iter::once(self.default.language)
            .chain(self.groups.keys().copied())
            .collect()
    }

    /// Iterate over all groups, canonical first.
    pub fn groups(&self) -> impl Iterator<Item = &LanguageGroup> {
        std::iter::once(&self.default).chain(self.groups.values())
    }

    /// Total number of quotes across all groups.
    pub fn len(&self) -> usize {
        self.groups().map(LanguageGroup::len).sum()
    }

    /// Always false: the canonical group is never empty.
    pub fn is_empty(&self) -> bool {
        self.default.is_empty()
    }
}

fn validate_quote(language: Language, index: usize, quote: &Quote) -> Result<(), CatalogError> {
    let invalid = |reason| CatalogError::InvalidQuote {
        language,
        index,
        reason,
    };

    if quote.text.trim().is_empty() {
        return Err(invalid("text is blank"));
    }
    if quote.author.trim().is_empty() {
        return Err(invalid("author is blank"));
    }
    if language.is_canonical() && quote.original.is_some() {
        return Err(invalid("a canonical-language quote cannot be a translation"));
    }
    Ok(())
}
