//! Quote service: pick one quote for a requested language.

use crate::i18n::Language;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use super::catalog::{OriginalQuote, Quote, QuoteCatalog};

/// Provenance of a returned quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteSource {
    /// Selected from the catalog
    Local,
    /// Client-side last resort when the API cannot be reached
    Fallback,
    /// Placeholder returned alongside an HTTP 500
    Error,
}

/// A quote as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResult {
    pub text: String,
    pub author: String,
    pub source: QuoteSource,
    /// Language of the group the quote was drawn from
    #[serde(skip)]
    pub language: Language,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<OriginalQuote>,
}

impl QuoteResult {
    fn local(quote: &Quote, language: Language) -> Self {
        Self {
            text: quote.text.clone(),
            author: quote.author.clone(),
            source: QuoteSource::Local,
            language,
            // An English selection is never a translation, whatever the data says.
            original: if language.is_canonical() {
                None
            } else {
                quote.original.clone()
            },
        }
    }

    /// Generic body sent with an HTTP 500. Carries no error detail.
    pub fn error() -> Self {
        Self {
            text: "An unexpected error occurred.".to_string(),
            author: "System".to_string(),
            source: QuoteSource::Error,
            language: Language::canonical(),
            original: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("no quotes available for language '{0}'")]
    EmptyGroup(Language),
}

/// Stateless quote selection over a shared, immutable catalog.
#[derive(Debug, Clone)]
pub struct QuoteService {
    catalog: Arc<QuoteCatalog>,
}

impl QuoteService {
    pub fn new(catalog: Arc<QuoteCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &QuoteCatalog {
        &self.catalog
    }

    /// Pick a quote uniformly at random for `code`, using the given generator.
    ///
    /// `code` is raw request input: it is normalized, and anything that is not
    /// a supported language with quotes resolves to the English group.
    /// Consecutive calls are independent, so repeats are possible.
    ///
    /// # Errors
    /// `QuoteError::EmptyGroup` if the resolved group has no quotes, which a
    /// catalog built through `QuoteCatalog` never allows.
    pub fn random_quote<R>(&self, code: &str, rng: &mut R) -> Result<QuoteResult, QuoteError>
    where
        R: Rng + ?Sized,
    {
        let requested = Language::normalize(code);
        let (resolved, group) = self.catalog.resolve(requested);

        let quote = group
            .quotes()
            .choose(rng)
            .ok_or(QuoteError::EmptyGroup(resolved))?;

        debug!(
            raw = code,
            requested = %requested,
            resolved = %resolved,
            "Selected quote by {}",
            quote.author
        );

        Ok(QuoteResult::local(quote, resolved))
    }

    /// `random_quote` with the thread-local generator.
    pub fn random_quote_with_thread_rng(&self, code: &str) -> Result<QuoteResult, QuoteError> {
        self.random_quote(code, &mut rand::thread_rng())
    }
}
