//! Storage vs. production toggle of the ingredient stock form.
//!
//! The form records either that an ingredient went into storage (a single
//! date) or that it is being produced over a period bounded by the
//! ingredient's minimum and maximum production time. `ProductionForm` holds
//! what the user picked; `view` derives labels, which options are
//! selectable, and the end-date constraints from that state.

use crate::i18n::FormStrings;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Storage,
    Production,
}

/// One selectable ingredient of the stock form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientOption {
    /// Submitted value (ingredient id)
    pub value: String,
    pub label: String,
    pub producible: bool,
    /// Minimum production time in days
    #[serde(default)]
    pub min_time: Option<u32>,
    /// Maximum production time in days
    #[serde(default)]
    pub max_time: Option<u32>,
}

impl IngredientOption {
    /// Both production bounds, when both are set and non-zero.
    fn production_days(&self) -> Option<(u32, u32)> {
        match (self.min_time, self.max_time) {
            (Some(min), Some(max)) if min > 0 && max > 0 => Some((min, max)),
            _ => None,
        }
    }
}

/// Derived state of one ingredient option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub disabled: bool,
    /// Tooltip explaining why the option is disabled
    pub title: Option<String>,
}

/// Everything the stock form displays for the current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductionFormView {
    pub mode: Mode,
    pub options: Vec<OptionView>,
    pub selected: Option<String>,
    pub start_label: String,
    pub end_label: String,
    pub start_min: NaiveDate,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub end_disabled: bool,
    pub end_min: Option<NaiveDate>,
    pub end_max: Option<NaiveDate>,
    pub helper_text: Option<String>,
}

/// End-date bounds for a production period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndDateRange {
    pub min: NaiveDate,
    pub max: NaiveDate,
    pub min_days: u32,
    pub max_days: u32,
}

/// State of the storage/production stock form.
#[derive(Debug, Clone)]
pub struct ProductionForm {
    options: Vec<IngredientOption>,
    mode: Mode,
    selected: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    today: NaiveDate,
}

impl ProductionForm {
    /// Create the form in storage mode with nothing selected.
    pub fn new(options: Vec<IngredientOption>, today: NaiveDate) -> Self {
        let mut form = Self {
            options,
            mode: Mode::Storage,
            selected: None,
            start_date: None,
            end_date: None,
            today,
        };
        form.update_for_mode();
        form
    }

    // ==================== Events ====================

    pub fn set_mode(&mut self, mode: Mode) {
        debug!(?mode, "Stock form mode changed");
        self.mode = mode;
        self.update_for_mode();
    }

    /// Select an ingredient by value; an empty value clears the selection.
    pub fn select_ingredient(&mut self, value: &str) {
        self.selected = if value.is_empty() || self.option(value).is_none() {
            None
        } else {
            Some(value.to_string())
        };
        self.update_for_mode();
    }

    pub fn set_start_date(&mut self, date: Option<NaiveDate>) {
        self.start_date = date;
        if self.mode == Mode::Storage {
            self.end_date = date;
        }
    }

    /// Set the end date typed by the user. Ignored while the field is disabled.
    pub fn set_end_date(&mut self, date: Option<NaiveDate>) {
        if self.mode == Mode::Production {
            self.end_date = date;
        }
    }

    // ==================== Queries ====================

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn selected(&self) -> Option<&IngredientOption> {
        self.selected.as_deref().and_then(|value| self.option(value))
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Allowed end dates of the current production period, if any.
    pub fn end_date_range(&self) -> Option<EndDateRange> {
        if self.mode != Mode::Production {
            return None;
        }
        let start = self.start_date?;
        let (min_days, max_days) = self.selected()?.production_days()?;

        Some(EndDateRange {
            min: start.checked_add_days(Days::new(min_days.into()))?,
            max: start.checked_add_days(Days::new(max_days.into()))?,
            min_days,
            max_days,
        })
    }

    pub fn view(&self) -> ProductionFormView {
        let strings = FormStrings::get();
        let production = self.mode == Mode::Production;
        let range = self.end_date_range();

        ProductionFormView {
            mode: self.mode,
            options: self
                .options
                .iter()
                .map(|option| {
                    let disabled = production && !option.producible;
                    OptionView {
                        value: option.value.clone(),
                        label: option.label.clone(),
                        disabled,
                        title: disabled.then(|| strings.not_producible.to_string()),
                    }
                })
                .collect(),
            selected: self.selected.clone(),
            start_label: if production {
                strings.start_label_production
            } else {
                strings.start_label_storage
            }
            .to_string(),
            end_label: if production {
                strings.end_label_production
            } else {
                strings.end_label_storage
            }
            .to_string(),
            start_min: self.today,
            start_date: self.start_date,
            end_date: self.end_date,
            end_disabled: !production,
            end_min: range.map(|r| r.min),
            end_max: range.map(|r| r.max),
            helper_text: range.map(|r| {
                strings
                    .production_period
                    .replace("{min}", &r.min_days.to_string())
                    .replace("{max}", &r.max_days.to_string())
                    .replace("{min_date}", &r.min.format(DATE_FORMAT).to_string())
                    .replace("{max_date}", &r.max.format(DATE_FORMAT).to_string())
            }),
        }
    }

    fn option(&self, value: &str) -> Option<&IngredientOption> {
        self.options.iter().find(|option| option.value == value)
    }

    fn update_for_mode(&mut self) {
        if self.mode == Mode::Production
            && self.selected().is_some_and(|option| !option.producible)
        {
            debug!("Clearing non-producible ingredient in production mode");
            self.selected = None;
        }
        // Storage is a single day; switching modes only syncs a filled start
        if self.mode == Mode::Storage && self.start_date.is_some() {
            self.end_date = self.start_date;
        }
    }
}

/// Parse a `YYYY-MM-DD` form value.
pub fn parse_form_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(value: &str) -> NaiveDate {
        parse_form_date(value).unwrap()
    }

    fn options() -> Vec<IngredientOption> {
        vec![
            IngredientOption {
                value: "1".to_string(),
                label: "상추".to_string(),
                producible: true,
                min_time: Some(30),
                max_time: Some(45),
            },
            IngredientOption {
                value: "2".to_string(),
                label: "소금".to_string(),
                producible: false,
                min_time: None,
                max_time: None,
            },
            IngredientOption {
                value: "3".to_string(),
                label: "새싹".to_string(),
                producible: true,
                min_time: Some(0),
                max_time: Some(7),
            },
        ]
    }

    fn form() -> ProductionForm {
        ProductionForm::new(options(), date("2025-03-01"))
    }

    // ==================== Storage Mode Tests ====================

    #[test]
    fn test_storage_mode_defaults() {
        let view = form().view();
        assert_eq!(view.mode, Mode::Storage);
        assert_eq!(view.start_label, "보관 시작일:");
        assert_eq!(view.end_label, "보관 종료일:");
        assert!(view.end_disabled);
        assert_eq!(view.start_min, date("2025-03-01"));
        assert!(view.options.iter().all(|o| !o.disabled));
        assert!(view.helper_text.is_none());
    }

    #[test]
    fn test_storage_end_date_follows_start_date() {
        let mut form = form();
        form.select_ingredient("2");
        form.set_start_date(Some(date("2025-03-10")));
        assert_eq!(form.end_date(), Some(date("2025-03-10")));

        form.set_end_date(Some(date("2025-04-01")));
        assert_eq!(form.end_date(), Some(date("2025-03-10")));
    }

    #[test]
    fn test_storage_clearing_start_clears_end() {
        let mut form = form();
        form.set_start_date(Some(date("2025-03-10")));
        assert_eq!(form.end_date(), Some(date("2025-03-10")));

        form.set_start_date(None);
        assert_eq!(form.start_date(), None);
        assert_eq!(form.end_date(), form.start_date());
    }

    #[test]
    fn test_mode_switch_without_start_keeps_end() {
        let mut form = form();
        form.set_mode(Mode::Production);
        form.set_end_date(Some(date("2025-04-02")));

        form.set_mode(Mode::Storage);
        assert_eq!(form.end_date(), Some(date("2025-04-02")));
    }

    // ==================== Production Mode Tests ====================

    #[test]
    fn test_production_disables_non_producible_options() {
        let mut form = form();
        form.set_mode(Mode::Production);
        let view = form.view();

        assert_eq!(view.start_label, "생산 시작일:");
        assert_eq!(view.end_label, "생산 종료일:");
        assert!(!view.end_disabled);

        let salt = view.options.iter().find(|o| o.value == "2").unwrap();
        assert!(salt.disabled);
        assert_eq!(salt.title.as_deref(), Some("이 재료는 생산할 수 없습니다"));
        let lettuce = view.options.iter().find(|o| o.value == "1").unwrap();
        assert!(!lettuce.disabled);
        assert!(lettuce.title.is_none());
    }

    #[test]
    fn test_production_clears_non_producible_selection() {
        let mut form = form();
        form.select_ingredient("2");
        assert!(form.selected().is_some());

        form.set_mode(Mode::Production);
        assert!(form.selected().is_none());
    }

    #[test]
    fn test_production_end_date_range_and_helper() {
        let mut form = form();
        form.set_mode(Mode::Production);
        form.select_ingredient("1");
        form.set_start_date(Some(date("2025-03-01")));

        let view = form.view();
        assert_eq!(view.end_min, Some(date("2025-03-31")));
        assert_eq!(view.end_max, Some(date("2025-04-15")));
        assert_eq!(
            view.helper_text.as_deref(),
            Some("생산 기간: 30~45일 (2025-03-31 ~ 2025-04-15)")
        );
    }

    #[test]
    fn test_production_zero_min_time_has_no_range() {
        let mut form = form();
        form.set_mode(Mode::Production);
        form.select_ingredient("3");
        form.set_start_date(Some(date("2025-03-01")));

        assert!(form.end_date_range().is_none());
        assert!(form.view().helper_text.is_none());
    }

    #[test]
    fn test_production_without_start_date_has_no_range() {
        let mut form = form();
        form.set_mode(Mode::Production);
        form.select_ingredient("1");
        assert!(form.end_date_range().is_none());
    }

    #[test]
    fn test_back_to_storage_drops_range() {
        let mut form = form();
        form.set_mode(Mode::Production);
        form.select_ingredient("1");
        form.set_start_date(Some(date("2025-03-01")));
        form.set_end_date(Some(date("2025-04-02")));
        assert_eq!(form.end_date(), Some(date("2025-04-02")));

        form.set_mode(Mode::Storage);
        let view = form.view();
        assert!(view.helper_text.is_none());
        assert!(view.end_disabled);
        assert_eq!(view.end_date, Some(date("2025-03-01")));
    }

    #[test]
    fn test_select_unknown_value_clears_selection() {
        let mut form = form();
        form.select_ingredient("1");
        form.select_ingredient("99");
        assert!(form.selected().is_none());
        form.select_ingredient("1");
        form.select_ingredient("");
        assert!(form.selected().is_none());
    }

    // ==================== Serialization Tests ====================

    #[test]
    fn test_view_serializes_dates_as_form_values() {
        let mut form = form();
        form.set_start_date(Some(date("2025-03-02")));
        let json = serde_json::to_value(form.view()).unwrap();
        assert_eq!(json["mode"], "storage");
        assert_eq!(json["start_date"], "2025-03-02");
        assert_eq!(json["end_date"], "2025-03-02");
    }

    #[test]
    fn test_parse_form_date() {
        assert_eq!(parse_form_date(" 2025-01-31 "), Some(date("2025-01-31")));
        assert!(parse_form_date("31/01/2025").is_none());
        assert!(parse_form_date("").is_none());
    }
}
