use super::EntryId;
use thiserror::Error;

/// A blocking notice raised instead of mutating a field set.
///
/// Every variant leaves the field set exactly as it was. The `Display`
/// text is what the host page shows in its alert box.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Notice {
    /// Every supported language already has an entry.
    #[error("모든 언어를 추가했습니다.")]
    AllLanguagesUsed,

    /// Another entry already uses the requested language.
    #[error("Language '{}' is already in use.", .code.to_uppercase())]
    LanguageInUse { code: String },

    /// The requested code is not offered by the field's registry.
    #[error("Language '{}' is not supported.", .code.to_uppercase())]
    UnsupportedLanguage { code: String },

    /// The entry handle refers to a row that was already removed.
    #[error("Entry {0} no longer exists.")]
    UnknownEntry(EntryId),
}
