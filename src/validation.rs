//! Submit-time validation of the catalog admin forms.
//!
//! Each form is checked as a whole and every problem is collected, so a
//! single notice can list all of them. A form with any error must not be
//! submitted.

use crate::i18n::FormStrings;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::debug;

/// Validation report containing errors and warnings about a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Problems that block submission
    pub errors: Vec<String>,

    /// Non-blocking remarks
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    /// Append the errors and warnings of another report.
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Text of the blocking notice: each error on its own line.
    pub fn alert_message(&self) -> String {
        self.errors.iter().map(|error| format!("{}\n", error)).collect()
    }

    fn require(&mut self, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.errors.push(message.to_string());
        }
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// A form that can be checked before submission.
pub trait FormValidator {
    fn validate(&self) -> ValidationReport;

    /// Whether the form may be submitted.
    fn is_submittable(&self) -> bool {
        let report = self.validate();
        if report.has_errors() {
            debug!(errors = report.errors.len(), "Form submission blocked");
        }
        !report.has_errors()
    }
}

// Cached publication-year pattern
static YEAR_REGEX: OnceLock<Regex> = OnceLock::new();

fn is_four_digit_year(year: &str) -> bool {
    let regex = YEAR_REGEX.get_or_init(|| Regex::new(r"^\d{4}$").unwrap());
    regex.is_match(year)
}

/// Numeric reading of a form value: blank is zero, garbage is `NaN`.
///
/// `NaN` makes every comparison false, so unparsable input never trips a
/// range check on its own. Only the spelled-out `Infinity` counts as
/// infinite; `inf` and `nan` are garbage.
fn numeric_value(value: &str) -> f64 {
    let value = value.trim();
    if value.is_empty() {
        return 0.0;
    }

    let unsigned = value.trim_start_matches(['+', '-']);
    if unsigned.len() + 1 < value.len() {
        return f64::NAN;
    }
    if unsigned.starts_with(|c: char| c.is_ascii_alphabetic()) && unsigned != "Infinity" {
        return f64::NAN;
    }
    value.parse().unwrap_or(f64::NAN)
}

// ==================== Research Form ====================

/// Research material form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchForm {
    pub title: String,
    pub authors: String,
    pub year: String,
    pub summary_kor: String,
    pub summary_eng: String,
}

impl FormValidator for ResearchForm {
    fn validate(&self) -> ValidationReport {
        let strings = FormStrings::get();
        let mut report = ValidationReport::new();

        report.require(&self.title, strings.title_required);
        report.require(&self.authors, strings.authors_required);

        let year = self.year.trim();
        if year.is_empty() {
            report.errors.push(strings.year_required.to_string());
        } else if !is_four_digit_year(year) {
            report.errors.push(strings.year_format.to_string());
        }

        report.require(&self.summary_kor, strings.summary_kor_required);
        report.require(&self.summary_eng, strings.summary_eng_required);
        report
    }
}

// ==================== Ingredient Form ====================

/// Ingredient form, including production times and nutrition values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientForm {
    pub name_kor: String,
    pub name_eng: String,
    pub producible: bool,
    /// Minimum production time in days, as typed
    pub min_time: String,
    /// Maximum production time in days, as typed
    pub max_time: String,
    /// `nutrition_*` inputs as (name, value) pairs
    #[serde(default)]
    pub nutrition: Vec<(String, String)>,
}

impl FormValidator for IngredientForm {
    fn validate(&self) -> ValidationReport {
        let strings = FormStrings::get();
        let mut report = ValidationReport::new();

        report.require(&self.name_kor, strings.name_kor_required);
        report.require(&self.name_eng, strings.name_eng_required);

        if self.producible {
            if self.min_time.is_empty() {
                report.errors.push(strings.min_time_required.to_string());
            }
            if self.max_time.is_empty() {
                report.errors.push(strings.max_time_required.to_string());
            }

            if numeric_value(&self.min_time) > numeric_value(&self.max_time) {
                report.errors.push(strings.min_time_exceeds_max.to_string());
            }
        }

        for (_, value) in &self.nutrition {
            if !value.is_empty() && numeric_value(value) < 0.0 {
                report.errors.push(strings.nutrition_negative.to_string());
            }
        }

        report
    }
}

// ==================== Cooking Method Form ====================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookingMethodForm {
    pub name_kor: String,
    pub name_eng: String,
    pub description_kor: String,
    pub description_eng: String,
}

impl FormValidator for CookingMethodForm {
    fn validate(&self) -> ValidationReport {
        let strings = FormStrings::get();
        let mut report = ValidationReport::new();

        report.require(&self.name_kor, strings.name_kor_required);
        report.require(&self.name_eng, strings.name_eng_required);
        report.require(&self.description_kor, strings.description_kor_required);
        report.require(&self.description_eng, strings.description_eng_required);
        report
    }
}

// ==================== Dish Form ====================

/// One ingredient row of the dish form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientRow {
    /// Selected ingredient id (empty when nothing is selected)
    pub ingredient_id: String,
    /// Amount as typed
    pub amount: String,
}

impl IngredientRow {
    pub fn new(ingredient_id: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            ingredient_id: ingredient_id.into(),
            amount: amount.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishForm {
    pub name_kor: String,
    pub name_eng: String,
    pub ingredient_rows: Vec<IngredientRow>,
    /// Checked cooking method ids
    pub cooking_method_ids: Vec<String>,
    pub instructions_kor: String,
    pub instructions_eng: String,
}

impl FormValidator for DishForm {
    fn validate(&self) -> ValidationReport {
        let strings = FormStrings::get();
        let mut report = ValidationReport::new();

        report.require(&self.name_kor, strings.name_kor_required);
        report.require(&self.name_eng, strings.name_eng_required);

        if self.ingredient_rows.is_empty() {
            report.errors.push(strings.ingredient_required.to_string());
        }

        for (index, row) in self.ingredient_rows.iter().enumerate() {
            let position = (index + 1).to_string();

            if row.ingredient_id.is_empty() {
                report
                    .errors
                    .push(strings.ingredient_row_unselected.replace("{index}", &position));
            }

            if row.amount.is_empty() || numeric_value(&row.amount) <= 0.0 {
                report
                    .errors
                    .push(strings.ingredient_row_amount.replace("{index}", &position));
            }
        }

        if self.cooking_method_ids.is_empty() {
            report.errors.push(strings.cooking_method_required.to_string());
        }

        report.require(&self.instructions_kor, strings.instructions_kor_required);
        report.require(&self.instructions_eng, strings.instructions_eng_required);
        report
    }
}
