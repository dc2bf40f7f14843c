//! Language support for quote lookup.
//!
//! - `language`: the closed `Language` enumeration and request-input normalization
//! - `registry`: display metadata (names, text direction) for each language
//!
//! # Example
//!
//! ```rust
//! use quote_service::i18n::{Language, LanguageRegistry};
//!
//! assert_eq!(Language::normalize(" FR-ca "), Language::French);
//! assert_eq!(Language::normalize("zz"), Language::English);
//!
//! let arabic = LanguageRegistry::get().config(Language::Arabic);
//! assert!(arabic.rtl);
//! ```

mod language;
mod registry;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
