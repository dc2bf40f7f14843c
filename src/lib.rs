//! Random inspirational quotes, by language, over a small JSON API.
//!
//! The core is [`quotes::QuoteService`] over an immutable [`quotes::QuoteCatalog`];
//! [`server`] exposes it over HTTP.

pub mod config;
pub mod i18n;
pub mod quotes;
pub mod server;
