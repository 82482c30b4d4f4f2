//! Form-side building blocks of the food catalog admin pages.
//!
//! - `fieldset`: multilingual field sets (one language per entry)
//! - `submission`: pairing posted `<field>_codes` / `<field>_names` lists
//! - `validation`: submit-time checks of the research, ingredient,
//!   cooking method and dish forms
//! - `production`: the storage vs. production stock form
//! - `i18n`: supported languages and the fixed UI strings
//! - `preview`: replaying scripted field set actions
//! - `config`: environment configuration

pub mod config;
pub mod fieldset;
pub mod i18n;
pub mod preview;
pub mod production;
pub mod submission;
pub mod validation;

pub use fieldset::{EntryId, FieldSet, InitialValue, LanguageChange, LanguageEntry, Notice};
pub use submission::MultilingualText;
pub use validation::{FormValidator, ValidationReport};
