use crate::i18n::LanguageRegistry;
use crate::production::parse_form_date;
use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};

#[derive(Debug, Clone)]
pub struct Config {
    // Languages offered by multilingual fields, in selector order
    pub supported_languages: Vec<String>,

    // Preview
    pub form_definition: String,

    // Storage/production form
    pub today: Option<NaiveDate>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            supported_languages: std::env::var("FORM_LANGUAGES")
                .map(|v| parse_language_list(&v))
                .unwrap_or_else(|_| default_languages()),

            form_definition: std::env::var("FORM_DEFINITION")
                .unwrap_or_else(|_| "data/form_preview.json".to_string()),

            today: std::env::var("FORM_TODAY")
                .ok()
                .map(|v| {
                    parse_form_date(&v)
                        .with_context(|| format!("FORM_TODAY must be YYYY-MM-DD, got '{}'", v))
                })
                .transpose()?,
        })
    }

    /// The storage/production form's today: `FORM_TODAY` or the local date.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Build the language registry the configured codes describe.
    pub fn language_registry(&self) -> Result<LanguageRegistry> {
        if self.supported_languages.is_empty() {
            bail!("FORM_LANGUAGES must list at least one language code");
        }
        LanguageRegistry::from_codes(&self.supported_languages).context("Invalid FORM_LANGUAGES")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            supported_languages: default_languages(),
            form_definition: "data/form_preview.json".to_string(),
            today: None,
        }
    }
}

fn default_languages() -> Vec<String> {
    LanguageRegistry::get().codes().map(str::to_string).collect()
}

/// Split a comma-separated code list, dropping blanks.
fn parse_language_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}
