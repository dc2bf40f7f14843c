//! Quote storage and selection.
//!
//! - `catalog`: the immutable, language-keyed `QuoteCatalog` (quote store)
//! - `service`: `QuoteService`, which normalizes a language code and picks a quote
//! - `data`: built-in quotes

mod catalog;
mod data;
mod service;

pub use catalog::{CatalogError, LanguageGroup, OriginalQuote, Quote, QuoteCatalog};
pub use service::{QuoteError, QuoteResult, QuoteService, QuoteSource};
