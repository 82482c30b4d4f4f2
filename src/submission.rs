//! Decoding of posted multilingual fields.
//!
//! A field set posts two repeated controls, `<field>_codes` and
//! `<field>_names`. The receiving handler pairs them index by index into a
//! language-to-text mapping, which is what the catalog stores.

use crate::fieldset::InitialValue;
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::warn;

/// Language-to-text mapping of one posted field, in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultilingualText {
    entries: Vec<(String, String)>,
}

impl MultilingualText {
    /// Pair the posted `<field>_codes` and `<field>_names` values.
    ///
    /// Extra values on the longer side are dropped. A repeated code keeps
    /// the position of its first occurrence and the text of its last one.
    pub fn from_form<K, V>(pairs: &[(K, V)], field_name: &str) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let codes_name = format!("{}_codes", field_name);
        let names_name = format!("{}_names", field_name);

        let codes = values_named(pairs, &codes_name);
        let names = values_named(pairs, &names_name);

        if codes.len() != names.len() {
            warn!(
                field = field_name,
                codes = codes.len(),
                names = names.len(),
                "Mismatched multilingual field lists, extra values dropped"
            );
        }

        let mut text = Self::default();
        for (code, name) in codes.into_iter().zip(names) {
            text.insert(code, name);
        }
        text
    }

    /// Set the text for a code, keeping the code's original position.
    pub fn insert(&mut self, code: impl Into<String>, text: impl Into<String>) {
        let code = code.into();
        let text = text.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == code) {
            Some(entry) => entry.1 = text,
            None => self.entries.push((code, text)),
        }
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == code)
            .map(|(_, text)| text.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(code, text)| (code.as_str(), text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Initial values for re-opening the field on an edit page.
    pub fn to_initial_values(&self) -> Vec<InitialValue> {
        self.iter()
            .map(|(code, text)| InitialValue::new(code, text))
            .collect()
    }

    /// JSON object text, e.g. `{"kor":"쌀","eng":"rice"}`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Values posted under `name`, in order.
fn values_named<'a, K, V>(pairs: &'a [(K, V)], name: &str) -> Vec<&'a str>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    pairs
        .iter()
        .filter(|(key, _)| key.as_ref() == name)
        .map(|(_, value)| value.as_ref())
        .collect()
}

impl Serialize for MultilingualText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (code, text) in &self.entries {
            map.serialize_entry(code, text)?;
        }
        map.end()
    }
}
