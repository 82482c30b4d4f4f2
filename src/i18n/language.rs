//! Language code type: a code that has been checked against a registry.

use crate::i18n::LanguageRegistry;
use anyhow::{bail, Result};
use serde::Serialize;
use std::fmt;

/// A validated language code.
///
/// Values of this type only come out of a registry lookup, so a field set
/// never holds a code its registry does not offer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Create a LanguageCode from a code string.
    ///
    /// # Returns
    /// * `Ok(LanguageCode)` if the registry offers the code
    /// * `Err` if the code is unknown to the registry
    ///
    /// # Example
    /// ```ignore
    /// let korean = LanguageCode::from_code("kor", LanguageRegistry::get())?;
    /// ```
    pub fn from_code(code: &str, registry: &LanguageRegistry) -> Result<LanguageCode> {
        match registry.get_by_code(code) {
            Some(config) => Ok(LanguageCode(config.code.clone())),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The raw code (e.g., "kor").
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Upper-cased code as shown in the language selector (e.g., "KOR").
    pub fn display_label(&self) -> String {
        self.0.to_uppercase()
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for LanguageCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LanguageCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
