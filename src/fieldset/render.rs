//! Presentation of a field set as form rows.
//!
//! Rows are rebuilt from state on every call. A rejected language change
//! therefore shows the entry's unchanged language without any revert step.

use super::{EntryId, FieldSet};
use crate::i18n::FormStrings;
use serde::Serialize;

/// One `<option>` of a row's language selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Everything needed to draw one entry row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryRow {
    pub entry: EntryId,
    pub select_name: String,
    pub options: Vec<SelectOption>,
    pub input_name: String,
    pub value: String,
    pub placeholder: String,
    pub required: bool,
    pub remove_label: String,
}

impl FieldSet {
    /// Derive the rows currently shown for this field set.
    ///
    /// Every selector lists all supported languages, not only the free ones,
    /// so that a user can switch an entry to any language that is not taken.
    pub fn render(&self) -> Vec<EntryRow> {
        let select_name = self.codes_control_name();
        let input_name = self.names_control_name();
        let remove_label = FormStrings::get().remove_button;

        self.entries()
            .iter()
            .map(|entry| EntryRow {
                entry: entry.id(),
                select_name: select_name.clone(),
                options: self
                    .registry()
                    .list_all()
                    .iter()
                    .map(|lang| SelectOption {
                        value: lang.code.clone(),
                        label: lang.display_label(),
                        selected: entry.code() == lang.code.as_str(),
                    })
                    .collect(),
                input_name: input_name.clone(),
                value: entry.text().to_string(),
                placeholder: self.placeholder().to_string(),
                required: true,
                remove_label: remove_label.to_string(),
            })
            .collect()
    }

    /// Render the container and its rows as HTML.
    pub fn render_html(&self) -> String {
        let mut html = format!("<div id=\"{}\">\n", escape_html(self.container()));
        for row in self.render() {
            html.push_str(&row.to_html());
        }
        html.push_str("</div>\n");
        html
    }
}

impl EntryRow {
    pub fn to_html(&self) -> String {
        let mut html = format!("  <div class=\"lang-entry\" data-entry=\"{}\">\n", self.entry);

        html.push_str(&format!(
            "    <select name=\"{}\">\n",
            escape_html(&self.select_name)
        ));
        for option in &self.options {
            html.push_str(&format!(
                "      <option value=\"{}\"{}>{}</option>\n",
                escape_html(&option.value),
                if option.selected { " selected" } else { "" },
                escape_html(&option.label)
            ));
        }
        html.push_str("    </select>\n");

        html.push_str(&format!(
            "    <input type=\"text\" name=\"{}\" placeholder=\"{}\" value=\"{}\"{}>\n",
            escape_html(&self.input_name),
            escape_html(&self.placeholder),
            escape_html(&self.value),
            if self.required { " required" } else { "" }
        ));
        html.push_str(&format!(
            "    <button type=\"button\" data-entry=\"{}\">{}</button>\n",
            self.entry,
            escape_html(&self.remove_label)
        ));
        html.push_str("  </div>\n");
        html
    }
}

/// Escape HTML special characters for text and attribute values
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
