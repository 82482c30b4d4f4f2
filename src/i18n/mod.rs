//! Language layer for the admin forms.
//!
//! # Architecture
//!
//! - `registry`: the ordered list of languages a multilingual field may use
//! - `language`: `LanguageCode`, a code validated against a registry
//! - `strings`: fixed Korean UI and validation texts
//!
//! # Example
//!
//! ```rust,ignore
//! use pantry_forms::i18n::{LanguageCode, LanguageRegistry};
//!
//! let registry = LanguageRegistry::get();
//! let korean = LanguageCode::from_code("kor", registry)?;
//! ```

mod language;
mod registry;
mod strings;

pub use language::LanguageCode;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::{FormStrings, KOREAN_STRINGS};
