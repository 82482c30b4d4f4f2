//! Multilingual field sets.
//!
//! A `FieldSet` backs one multilingual form field (a name, a summary, ...)
//! as an ordered list of `(language, text)` entries. No two entries share a
//! language, so a field set never holds more entries than its registry has
//! languages. The set of used codes is always derived from the live entries.
//!
//! Every operation mutates state synchronously; the rendered rows are
//! re-derived from state by `render`/`render_html` (see `render.rs`).

mod notice;
mod render;

pub use notice::Notice;
pub use render::{EntryRow, SelectOption};

use crate::i18n::{FormStrings, LanguageCode, LanguageRegistry};
use crate::validation::ValidationReport;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Stable handle to one entry of a field set.
///
/// Handles are never reused, so a handle to a removed entry stays invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntryId(u32);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One `(language, text)` pair of a field set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageEntry {
    id: EntryId,
    code: LanguageCode,
    text: String,
}

impl LanguageEntry {
    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn code(&self) -> &LanguageCode {
        &self.code
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Caller-supplied starting value, e.g. `{"code": "kor", "value": "쌀"}`.
///
/// Both fields are optional so that loosely shaped data from an edit page
/// can be passed through; invalid items are skipped at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialValue {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

impl InitialValue {
    pub fn new(code: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            value: Some(value.into()),
        }
    }
}

/// Result of a language change request that was not rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageChange {
    /// The entry already had the requested language.
    Unchanged,
    /// The entry moved from one language to another.
    Changed { from: LanguageCode, to: LanguageCode },
}

/// Entries of one multilingual field, with language uniqueness enforced.
#[derive(Debug, Clone)]
pub struct FieldSet {
    registry: LanguageRegistry,
    container: String,
    field_name: String,
    placeholder: String,
    entries: Vec<LanguageEntry>,
    next_id: u32,
}

impl FieldSet {
    /// Create a field set offering the default languages.
    ///
    /// See [`FieldSet::with_registry`] for the handling of `initial`.
    pub fn new(
        container: impl Into<String>,
        field_name: impl Into<String>,
        placeholder: impl Into<String>,
        initial: &[InitialValue],
    ) -> Self {
        Self::with_registry(
            LanguageRegistry::default(),
            container,
            field_name,
            placeholder,
            initial,
        )
    }

    /// Create a field set offering the languages of `registry`.
    ///
    /// With an empty `initial` list the set starts with one blank entry in the
    /// first supported language. Otherwise each initial value becomes an entry
    /// in order, skipping values whose code is missing, unsupported, or
    /// already taken by an earlier value.
    pub fn with_registry(
        registry: LanguageRegistry,
        container: impl Into<String>,
        field_name: impl Into<String>,
        placeholder: impl Into<String>,
        initial: &[InitialValue],
    ) -> Self {
        let mut set = Self {
            registry,
            container: container.into(),
            field_name: field_name.into(),
            placeholder: placeholder.into(),
            entries: Vec::new(),
            next_id: 0,
        };

        if initial.is_empty() {
            // A fresh registry always has a free language
            let _ = set.add_entry();
            return set;
        }

        for item in initial {
            let Some(code) = item.code.as_deref().filter(|code| !code.is_empty()) else {
                debug!(field = %set.field_name, "Skipping initial value without a code");
                continue;
            };
            if set.is_used(code) {
                debug!(field = %set.field_name, code, "Skipping duplicate initial value");
                continue;
            }
            let Ok(code) = LanguageCode::from_code(code, &set.registry) else {
                debug!(field = %set.field_name, code, "Skipping unsupported initial value");
                continue;
            };
            set.push_entry(code, item.value.clone().unwrap_or_default());
        }

        set
    }

    // ==================== Operations ====================

    /// Append a blank entry in the first supported language not yet used.
    ///
    /// # Returns
    /// * `Ok(EntryId)` of the new entry
    /// * `Err(Notice::AllLanguagesUsed)` when every language has an entry
    pub fn add_entry(&mut self) -> Result<EntryId, Notice> {
        let Some(code) = self.remaining_codes().into_iter().next() else {
            debug!(field = %self.field_name, "All languages already added");
            return Err(Notice::AllLanguagesUsed);
        };
        let id = self.push_entry(code, String::new());
        debug!(field = %self.field_name, entry = %id, "Added language entry");
        Ok(id)
    }

    /// Switch an entry to another language.
    ///
    /// The selector offers every supported language, so the requested code
    /// may belong to another entry. In that case the change is refused and
    /// the entry keeps its language.
    pub fn change_entry_language(
        &mut self,
        id: EntryId,
        new_code: &str,
    ) -> Result<LanguageChange, Notice> {
        let index = self.index_of(id).ok_or(Notice::UnknownEntry(id))?;

        if self.entries[index].code == new_code {
            return Ok(LanguageChange::Unchanged);
        }
        if self.is_used(new_code) {
            debug!(field = %self.field_name, code = new_code, "Language already in use");
            return Err(Notice::LanguageInUse {
                code: new_code.to_string(),
            });
        }
        let new_code = LanguageCode::from_code(new_code, &self.registry).map_err(|_| {
            Notice::UnsupportedLanguage {
                code: new_code.to_string(),
            }
        })?;

        let from = std::mem::replace(&mut self.entries[index].code, new_code.clone());
        debug!(field = %self.field_name, entry = %id, %from, to = %new_code, "Changed entry language");
        Ok(LanguageChange::Changed { from, to: new_code })
    }

    /// Remove an entry, freeing its language.
    ///
    /// # Returns
    /// The removed entry, or `None` if it was already removed.
    pub fn remove_entry(&mut self, id: EntryId) -> Option<LanguageEntry> {
        let index = self.index_of(id)?;
        let entry = self.entries.remove(index);
        debug!(field = %self.field_name, entry = %id, code = %entry.code, "Removed language entry");
        Some(entry)
    }

    /// Replace the text of an entry (the user typed into its text input).
    pub fn set_text(&mut self, id: EntryId, text: impl Into<String>) -> Result<(), Notice> {
        let index = self.index_of(id).ok_or(Notice::UnknownEntry(id))?;
        self.entries[index].text = text.into();
        Ok(())
    }

    // ==================== Queries ====================

    pub fn entries(&self) -> &[LanguageEntry] {
        &self.entries
    }

    pub fn entry(&self, id: EntryId) -> Option<&LanguageEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Codes of the live entries, in display order.
    pub fn used_codes(&self) -> Vec<&LanguageCode> {
        self.entries.iter().map(|entry| &entry.code).collect()
    }

    /// Supported codes without an entry, in registry order.
    pub fn remaining_codes(&self) -> Vec<LanguageCode> {
        self.registry
            .codes()
            .filter(|code| !self.is_used(code))
            .filter_map(|code| LanguageCode::from_code(code, &self.registry).ok())
            .collect()
    }

    /// Whether `add_entry` would succeed.
    pub fn can_add(&self) -> bool {
        self.entries.len() < self.registry.len()
    }

    pub fn is_used(&self, code: &str) -> bool {
        self.entries.iter().any(|entry| entry.code == code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Name of the repeated language selector control (`<field>_codes`).
    pub fn codes_control_name(&self) -> String {
        format!("{}_codes", self.field_name)
    }

    /// Name of the repeated text control (`<field>_names`).
    pub fn names_control_name(&self) -> String {
        format!("{}_names", self.field_name)
    }

    // ==================== Submission ====================

    /// Name/value pairs in the order a browser posts them.
    ///
    /// Each entry contributes its selector value followed by its text value,
    /// so the `_codes` and `_names` lists line up index by index.
    pub fn submission(&self) -> Vec<(String, String)> {
        let codes_name = self.codes_control_name();
        let names_name = self.names_control_name();

        self.entries
            .iter()
            .flat_map(|entry| {
                [
                    (codes_name.clone(), entry.code.to_string()),
                    (names_name.clone(), entry.text.clone()),
                ]
            })
            .collect()
    }

    /// Entries whose required text is blank.
    pub fn missing_text(&self) -> Vec<EntryId> {
        self.entries
            .iter()
            .filter(|entry| entry.text.trim().is_empty())
            .map(|entry| entry.id)
            .collect()
    }

    /// Submit-time check of the required text inputs.
    pub fn validate(&self) -> ValidationReport {
        let template = FormStrings::get().multilingual_text_required;
        let mut report = ValidationReport::new();

        for id in self.missing_text() {
            if let Some(entry) = self.entry(id) {
                report.errors.push(
                    template
                        .replace("{field}", &self.field_name)
                        .replace("{code}", &entry.code.display_label()),
                );
            }
        }

        report
    }

    fn push_entry(&mut self, code: LanguageCode, text: String) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(LanguageEntry { id, code, text });
        id
    }

    fn index_of(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(set: &FieldSet) -> Vec<String> {
        set.used_codes().iter().map(|code| code.to_string()).collect()
    }

    fn empty_set() -> FieldSet {
        FieldSet::new("name-fields", "name", "이름", &[])
    }

    // ==================== Construction Tests ====================

    #[test]
    fn test_new_without_initial_values_adds_one_entry() {
        let set = empty_set();
        assert_eq!(set.len(), 1);
        assert_eq!(set.entries()[0].code(), &"kor");
        assert_eq!(set.entries()[0].text(), "");
    }

    #[test]
    fn test_new_filters_initial_values() {
        let initial = vec![
            InitialValue::new("kor", "쌀"),
            InitialValue::new("kor", "밥"),
            InitialValue::new("xx", "z"),
            InitialValue::new("eng", "rice"),
        ];
        let set = FieldSet::new("name-fields", "name", "이름", &initial);

        assert_eq!(set.len(), 2);
        assert_eq!(set.entries()[0].code(), &"kor");
        assert_eq!(set.entries()[0].text(), "쌀");
        assert_eq!(set.entries()[1].code(), &"eng");
        assert_eq!(set.entries()[1].text(), "rice");
    }

    #[test]
    fn test_new_skips_missing_code_and_defaults_missing_value() {
        let initial = vec![
            InitialValue {
                code: None,
                value: Some("orphan".to_string()),
            },
            InitialValue {
                code: Some(String::new()),
                value: Some("blank".to_string()),
            },
            InitialValue {
                code: Some("jpn".to_string()),
                value: None,
            },
        ];
        let set = FieldSet::new("c", "summary", "", &initial);

        assert_eq!(codes(&set), vec!["jpn"]);
        assert_eq!(set.entries()[0].text(), "");
    }

    #[test]
    fn test_new_with_only_invalid_initial_values_is_empty() {
        let set = FieldSet::new("c", "name", "", &[InitialValue::new("xx", "z")]);
        assert!(set.is_empty());
        assert!(set.can_add());
    }

    #[test]
    fn test_initial_value_deserializes_loosely() {
        let initial: Vec<InitialValue> =
            serde_json::from_str(r#"[{"code": "kor", "value": "쌀"}, {"value": "x"}, {}]"#)
                .unwrap();
        assert_eq!(initial[0], InitialValue::new("kor", "쌀"));
        assert_eq!(initial[1].code, None);
        assert_eq!(initial[2], InitialValue::default());
    }

    // ==================== add_entry Tests ====================

    #[test]
    fn test_add_entry_uses_first_remaining_code() {
        let mut set = empty_set();
        set.add_entry().unwrap();
        set.add_entry().unwrap();
        assert_eq!(codes(&set), vec!["kor", "eng", "jpn"]);
    }

    #[test]
    fn test_add_entry_exhaustion_leaves_state_unchanged() {
        let mut set = empty_set();
        for _ in 0..3 {
            set.add_entry().unwrap();
        }
        assert!(!set.can_add());

        let before = set.entries().to_vec();
        assert_eq!(set.add_entry(), Err(Notice::AllLanguagesUsed));
        assert_eq!(set.entries(), before.as_slice());
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_add_entry_fills_gap_in_registry_order() {
        let initial = vec![InitialValue::new("eng", "rice"), InitialValue::new("rus", "рис")];
        let mut set = FieldSet::new("c", "name", "", &initial);
        let id = set.add_entry().unwrap();
        assert_eq!(set.entry(id).unwrap().code(), &"kor");
        let id = set.add_entry().unwrap();
        assert_eq!(set.entry(id).unwrap().code(), &"jpn");
    }

    // ==================== change_entry_language Tests ====================

    #[test]
    fn test_change_to_same_code_is_noop() {
        let mut set = empty_set();
        let id = set.entries()[0].id();
        let before = set.entries().to_vec();

        assert_eq!(set.change_entry_language(id, "kor"), Ok(LanguageChange::Unchanged));
        assert_eq!(set.entries(), before.as_slice());
    }

    #[test]
    fn test_change_to_used_code_reverts() {
        let mut set = empty_set();
        let eng = set.add_entry().unwrap();

        let result = set.change_entry_language(eng, "kor");
        assert_eq!(
            result,
            Err(Notice::LanguageInUse {
                code: "kor".to_string()
            })
        );
        assert_eq!(codes(&set), vec!["kor", "eng"]);
    }

    #[test]
    fn test_change_to_free_code_frees_old_code() {
        let mut set = empty_set();
        let id = set.entries()[0].id();

        let change = set.change_entry_language(id, "rus").unwrap();
        assert_eq!(
            change,
            LanguageChange::Changed {
                from: LanguageCode::from_code("kor", LanguageRegistry::get()).unwrap(),
                to: LanguageCode::from_code("rus", LanguageRegistry::get()).unwrap(),
            }
        );
        assert!(!set.is_used("kor"));

        // The freed code is the next default
        let added = set.add_entry().unwrap();
        assert_eq!(set.entry(added).unwrap().code(), &"kor");
    }

    #[test]
    fn test_change_preserves_text() {
        let mut set = FieldSet::new("c", "name", "", &[InitialValue::new("kor", "쌀")]);
        let id = set.entries()[0].id();
        set.change_entry_language(id, "jpn").unwrap();
        assert_eq!(set.entries()[0].text(), "쌀");
    }

    #[test]
    fn test_change_to_unsupported_code_is_rejected() {
        let mut set = empty_set();
        let id = set.entries()[0].id();
        let result = set.change_entry_language(id, "xx");
        assert!(matches!(result, Err(Notice::UnsupportedLanguage { .. })));
        assert_eq!(codes(&set), vec!["kor"]);
    }

    #[test]
    fn test_change_removed_entry_is_rejected() {
        let mut set = empty_set();
        let id = set.entries()[0].id();
        set.remove_entry(id);
        assert_eq!(set.change_entry_language(id, "eng"), Err(Notice::UnknownEntry(id)));
    }

    // ==================== remove_entry Tests ====================

    #[test]
    fn test_remove_then_readd() {
        let mut set = empty_set();
        let kor = set.entries()[0].id();
        set.add_entry().unwrap();

        let removed = set.remove_entry(kor).unwrap();
        assert_eq!(removed.code(), &"kor");
        assert_eq!(codes(&set), vec!["eng"]);

        let id = set.add_entry().unwrap();
        assert_eq!(set.entry(id).unwrap().code(), &"kor");
        assert_eq!(codes(&set), vec!["eng", "kor"]);
    }

    #[test]
    fn test_remove_twice_is_noop() {
        let mut set = empty_set();
        let id = set.entries()[0].id();
        assert!(set.remove_entry(id).is_some());
        assert!(set.remove_entry(id).is_none());
        assert!(set.is_empty());
    }

    #[test]
    fn test_entry_ids_are_not_reused() {
        let mut set = empty_set();
        let first = set.entries()[0].id();
        set.remove_entry(first);
        let second = set.add_entry().unwrap();
        assert_ne!(first, second);
        assert!(set.entry(first).is_none());
    }

    // ==================== Submission Tests ====================

    #[test]
    fn test_control_names() {
        let set = empty_set();
        assert_eq!(set.codes_control_name(), "name_codes");
        assert_eq!(set.names_control_name(), "name_names");
    }

    #[test]
    fn test_submission_pairs_are_parallel() {
        let initial = vec![InitialValue::new("kor", "쌀"), InitialValue::new("eng", "rice")];
        let set = FieldSet::new("c", "name", "", &initial);

        assert_eq!(
            set.submission(),
            vec![
                ("name_codes".to_string(), "kor".to_string()),
                ("name_names".to_string(), "쌀".to_string()),
                ("name_codes".to_string(), "eng".to_string()),
                ("name_names".to_string(), "rice".to_string()),
            ]
        );
    }

    #[test]
    fn test_validate_reports_blank_text() {
        let mut set = FieldSet::new("c", "name", "", &[InitialValue::new("kor", "쌀")]);
        let eng = set.add_entry().unwrap();
        set.set_text(eng, "   ").unwrap();

        assert_eq!(set.missing_text(), vec![eng]);
        let report = set.validate();
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("ENG"));

        set.set_text(eng, "rice").unwrap();
        assert!(set.validate().is_clean());
    }

    // ==================== Custom Registry Tests ====================

    #[test]
    fn test_custom_registry_bounds_entries() {
        let registry = LanguageRegistry::from_codes(&["eng", "fra"]).unwrap();
        let mut set = FieldSet::with_registry(registry, "c", "name", "", &[]);
        assert_eq!(codes(&set), vec!["eng"]);
        set.add_entry().unwrap();
        assert_eq!(codes(&set), vec!["eng", "fra"]);
        assert_eq!(set.add_entry(), Err(Notice::AllLanguagesUsed));
    }
}
