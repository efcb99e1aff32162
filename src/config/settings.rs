//! User settings for Spendwise
//!
//! Manages the backend location, the budget alert threshold and display
//! preferences. Every field has a default so older or hand-edited files load.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::file_io::{read_json, write_json_atomic};
use super::paths::SpendwisePaths;
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::monitors::DEFAULT_THRESHOLD;

/// Backend used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// User settings for Spendwise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the remote service
    #[serde(default = "default_api_url")]
    pub api_base_url: String,

    /// Fraction of a budget that may be spent before an alert (0, 1]
    #[serde(default = "default_threshold")]
    pub budget_threshold: f64,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api_base_url: default_api_url(),
            budget_threshold: default_threshold(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    ///
    /// Defaults are not written back; callers decide when to persist.
    pub fn load_or_create(paths: &SpendwisePaths) -> SpendwiseResult<Self> {
        let settings: Settings = read_json(paths.settings_file())?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendwisePaths) -> SpendwiseResult<()> {
        self.validate()?;
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Apply command-line/environment overrides for this run
    pub fn with_overrides(
        mut self,
        api_base_url: Option<String>,
        budget_threshold: Option<f64>,
    ) -> SpendwiseResult<Self> {
        if let Some(url) = api_base_url {
            self.api_base_url = url;
        }
        if let Some(threshold) = budget_threshold {
            self.budget_threshold = threshold;
        }
        self.validate()?;
        Ok(self)
    }

    /// Check field ranges
    pub fn validate(&self) -> SpendwiseResult<()> {
        if !(self.budget_threshold > 0.0 && self.budget_threshold <= 1.0) {
            return Err(SpendwiseError::Validation(format!(
                "budget_threshold must be greater than 0 and at most 1, got {}",
                self.budget_threshold
            )));
        }

        let url = self.api_base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(SpendwiseError::Config(format!(
                "api_base_url must start with http:// or https://, got '{}'",
                self.api_base_url
            )));
        }

        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(SpendwiseError::Config(format!(
                "date_format is not a valid strftime pattern: '{}'",
                self.date_format
            )));
        }

        Ok(())
    }
}
