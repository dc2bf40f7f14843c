//! Language registry: display metadata for every supported language.
//!
//! The `Language` enum decides which codes exist; this registry carries what
//! clients need to render a language picker (names, text direction). It uses a
//! singleton pattern with `OnceLock` so the table is built once and shared.

use crate::i18n::Language;
use serde::Serialize;
use std::sync::OnceLock;

/// Metadata for a supported language.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageConfig {
    #[serde(skip)]
    pub language: Language,

    /// ISO 639-1 language code (e.g., "en", "ar")
    pub code: &'static str,

    /// English name of the language (e.g., "French")
    pub name: &'static str,

    /// Native name of the language (e.g., "Français")
    pub native_name: &'static str,

    /// Whether this is the canonical/fallback language (only one should be true)
    #[serde(skip)]
    pub is_canonical: bool,

    /// Whether text in this language is written right-to-left
    pub rtl: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: Language::ALL.iter().map(|&l| config_for(l)).collect(),
        })
    }

    /// Get the configuration of a language.
    ///
    /// Every `Language` has an entry, so this lookup cannot miss.
    pub fn config(&self, language: Language) -> &LanguageConfig {
        // ALL is in declaration order, which is the order of `languages`.
        &self.languages[language as usize]
    }

    /// Get all languages, canonical first.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }
}

fn config_for(language: Language) -> LanguageConfig {
    let (name, native_name, rtl) = match language {
        Language::English => ("English", "English", false),
        Language::French => ("French", "Français", false),
        Language::Italian => ("Italian", "Italiano", false),
        Language::Spanish => ("Spanish", "Español", false),
        Language::Arabic => ("Arabic", "العربية", true),
    };

    LanguageConfig {
        language,
        code: language.code(),
        name,
        native_name,
        is_canonical: language.is_canonical(),
        rtl,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_config_matches_language_for_every_entry() {
        let registry = LanguageRegistry::get();
        for language in Language::ALL {
            let config = registry.config(language);
            assert_eq!(config.language, language);
            assert_eq!(config.code, language.code());
        }
    }

    #[test]
    fn test_config_french() {
        let config = LanguageRegistry::get().config(Language::French);
        assert_eq!(config.name, "French");
        assert_eq!(config.native_name, "Français");
        assert!(!config.rtl);
    }

    #[test]
    fn test_only_arabic_is_rtl() {
        let rtl: Vec<_> = LanguageRegistry::get()
            .list_all()
            .into_iter()
            .filter(|lang| lang.rtl)
            .map(|lang| lang.code)
            .collect();
        assert_eq!(rtl, vec!["ar"]);
    }

    #[test]
    fn test_exactly_one_canonical() {
        let registry = LanguageRegistry::get();
        let canonical: Vec<_> = registry
            .list_all()
            .into_iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        assert_eq!(canonical.len(), 1);
        assert_eq!(canonical[0].language, Language::canonical());
    }

    #[test]
    fn test_serialized_shape() {
        let config = LanguageRegistry::get().config(Language::Arabic);
        let json = serde_json::to_value(config).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "code": "ar",
                "name": "Arabic",
                "native_name": "العربية",
                "rtl": true,
            })
        );
    }
}
