//! Scripted previews of multilingual field sets.
//!
//! A preview definition lists the fields of a form and a sequence of user
//! actions to replay against them. Replaying shows the rows a page would
//! display and the values it would post, without a browser.

use crate::fieldset::{EntryId, FieldSet, InitialValue};
use crate::i18n::LanguageRegistry;
use crate::production::{IngredientOption, Mode, ProductionForm, ProductionFormView};
use crate::submission::MultilingualText;
use crate::validation::ValidationReport;
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, Deserialize)]
pub struct PreviewDefinition {
    pub fields: Vec<FieldDefinition>,
    #[serde(default)]
    pub actions: Vec<Action>,
    /// Optional storage/production stock form to preview alongside
    #[serde(default)]
    pub stock: Option<StockDefinition>,
}

/// User input of the stock form, applied in the order a user would enter it.
#[derive(Debug, Clone, Deserialize)]
pub struct StockDefinition {
    pub options: Vec<IngredientOption>,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub selected: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl StockDefinition {
    pub fn view(&self, today: NaiveDate) -> ProductionFormView {
        let mut form = ProductionForm::new(self.options.clone(), today);
        form.set_mode(self.mode);
        if let Some(selected) = &self.selected {
            form.select_ingredient(selected);
        }
        form.set_start_date(self.start_date);
        form.set_end_date(self.end_date);
        form.view()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    /// Container id; defaults to `<name>-fields`
    #[serde(default)]
    pub container: Option<String>,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default)]
    pub initial: Vec<InitialValue>,
}

/// One user action. `entry` is the 0-based position of a row at the time
/// the action runs.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Action {
    Add { field: String },
    Change { field: String, entry: usize, code: String },
    Remove { field: String, entry: usize },
    SetText { field: String, entry: usize, text: String },
}

/// Field sets after replay, plus the notices the user would have seen.
#[derive(Debug, Clone)]
pub struct Preview {
    pub fields: Vec<FieldSet>,
    pub notices: Vec<String>,
}

/// Posted values and required-field check of one field.
#[derive(Debug, Clone, Serialize)]
pub struct FieldSummary {
    pub values: MultilingualText,
    pub validation: ValidationReport,
}

impl PreviewDefinition {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read preview definition {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Invalid preview definition {}", path.display()))
    }

    /// Build every field set and replay the actions in order.
    ///
    /// Notices are collected, never fatal. Actions naming an unknown field or
    /// row are definition errors.
    pub fn replay(&self, registry: &LanguageRegistry) -> Result<Preview> {
        let mut fields: Vec<FieldSet> = self
            .fields
            .iter()
            .map(|def| {
                FieldSet::with_registry(
                    registry.clone(),
                    def.container
                        .clone()
                        .unwrap_or_else(|| format!("{}-fields", def.name)),
                    def.name.clone(),
                    def.placeholder.clone(),
                    &def.initial,
                )
            })
            .collect();
        let mut notices = Vec::new();

        for (step, action) in self.actions.iter().enumerate() {
            let result = match action {
                Action::Add { field } => field_mut(&mut fields, field)?.add_entry().map(|_| ()),
                Action::Change { field, entry, code } => {
                    let set = field_mut(&mut fields, field)?;
                    let id = entry_at(set, *entry)?;
                    set.change_entry_language(id, code).map(|_| ())
                }
                Action::Remove { field, entry } => {
                    let set = field_mut(&mut fields, field)?;
                    let id = entry_at(set, *entry)?;
                    set.remove_entry(id);
                    Ok(())
                }
                Action::SetText { field, entry, text } => {
                    let set = field_mut(&mut fields, field)?;
                    let id = entry_at(set, *entry)?;
                    set.set_text(id, text.clone())
                }
            };

            if let Err(notice) = result {
                warn!(step, "{}", notice);
                notices.push(notice.to_string());
            }
        }

        info!(
            fields = fields.len(),
            actions = self.actions.len(),
            notices = notices.len(),
            "Replayed preview"
        );
        Ok(Preview { fields, notices })
    }
}

impl Preview {
    /// HTML of every field, in definition order.
    pub fn html(&self) -> String {
        self.fields.iter().map(FieldSet::render_html).collect()
    }

    /// Decoded posted values and validation per field, keyed by field name.
    pub fn summaries(&self) -> Vec<(String, FieldSummary)> {
        self.fields
            .iter()
            .map(|set| {
                (
                    set.field_name().to_string(),
                    FieldSummary {
                        values: MultilingualText::from_form(&set.submission(), set.field_name()),
                        validation: set.validate(),
                    },
                )
            })
            .collect()
    }
}

fn field_mut<'a>(fields: &'a mut [FieldSet], name: &str) -> Result<&'a mut FieldSet> {
    match fields.iter_mut().find(|set| set.field_name() == name) {
        Some(set) => Ok(set),
        None => bail!("Unknown field '{}' in preview action", name),
    }
}

fn entry_at(set: &FieldSet, position: usize) -> Result<EntryId> {
    match set.entries().get(position) {
        Some(entry) => Ok(entry.id()),
        None => bail!(
            "Field '{}' has no entry at position {} ({} entries)",
            set.field_name(),
            position,
            set.len()
        ),
    }
}
