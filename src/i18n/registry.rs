//! Language registry: the closed list of languages a multilingual field offers.
//!
//! The registry order is significant. It is the order in which the language
//! selector lists its options and the order in which a new entry picks its
//! default language. The default registry is the four catalog languages
//! (Korean, English, Japanese, Russian); callers can inject any other list.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Metadata for one supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Code submitted with the form (e.g., "kor", "eng")
    pub code: String,

    /// English name of the language (e.g., "Korean")
    pub name: String,

    /// Native name of the language (e.g., "한국어")
    pub native_name: String,
}

impl LanguageConfig {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        native_name: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            native_name: native_name.into(),
        }
    }

    /// Label shown in the language selector (the upper-cased code).
    pub fn display_label(&self) -> String {
        self.code.to_uppercase()
    }
}

/// Ordered, duplicate-free list of supported languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Default registry instance (initialized lazily, never mutated)
static DEFAULT_REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the default registry with the four catalog languages.
    pub fn get() -> &'static LanguageRegistry {
        DEFAULT_REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Build a registry from explicit language configurations.
    ///
    /// # Returns
    /// * `Err` if the list is empty, a code is blank, or a code appears twice
    pub fn new(languages: Vec<LanguageConfig>) -> Result<Self> {
        if languages.is_empty() {
            bail!("Language registry must contain at least one language");
        }

        let mut seen = HashSet::new();
        for lang in &languages {
            if lang.code.trim().is_empty() {
                bail!("Language code must not be blank");
            }
            if lang.code != lang.code.trim() {
                bail!("Language code '{}' has surrounding whitespace", lang.code);
            }
            if !seen.insert(lang.code.as_str()) {
                bail!("Duplicate language code: '{}'", lang.code);
            }
        }

        Ok(Self { languages })
    }

    /// Build a registry from bare codes, keeping their order.
    ///
    /// Codes known to the default registry keep their names; unknown codes
    /// use the upper-cased code as both names.
    pub fn from_codes<S: AsRef<str>>(codes: &[S]) -> Result<Self> {
        let defaults = Self::get();
        let languages = codes
            .iter()
            .map(|code| {
                let code = code.as_ref().trim();
                defaults.get_by_code(code).cloned().unwrap_or_else(|| {
                    let label = code.to_uppercase();
                    LanguageConfig::new(code, label.clone(), label)
                })
            })
            .collect();

        Self::new(languages)
    }

    /// Get a language configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Check if a code is part of this registry.
    pub fn contains(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }

    /// All languages in selector order.
    pub fn list_all(&self) -> &[LanguageConfig] {
        &self.languages
    }

    /// All codes in selector order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|lang| lang.code.as_str())
    }

    /// Number of supported languages (the upper bound on entries per field).
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::get().clone()
    }
}

/// Default language configurations: Korean, English, Japanese, Russian.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig::new("kor", "Korean", "한국어"),
        LanguageConfig::new("eng", "English", "English"),
        LanguageConfig::new("jpn", "Japanese", "日本語"),
        LanguageConfig::new("rus", "Russian", "Русский"),
    ]
}
