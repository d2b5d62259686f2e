//! User settings for the money tracker
//!
//! Stored in `config.json`. Every field has a serde default so older or
//! hand-edited files keep loading.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::{TrackerError, TrackerResult};
use crate::models::validation::validate_currency;
use crate::models::HouseholdId;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency code given to new households
    #[serde(default = "default_currency")]
    pub default_currency: String,

    /// Household used when a command omits `--household`
    #[serde(default)]
    pub default_household: Option<HouseholdId>,

    /// Log filter used when neither RUST_LOG nor `-v` is given
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Symbol prefixed to amounts in tables
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "EUR".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_currency_symbol() -> String {
    "€".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_currency: default_currency(),
            default_household: None,
            log_level: default_log_level(),
            date_format: default_date_format(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist yet
    pub fn load_or_create(paths: &TrackerPaths) -> TrackerResult<Self> {
        let settings_path = paths.settings_file();
        if !settings_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;
        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> TrackerResult<()> {
        self.validate()?;
        paths.ensure_directories()?;
        crate::storage::write_json_atomic(paths.settings_file(), self)
    }

    /// Check the values that are not free-form
    pub fn validate(&self) -> TrackerResult<()> {
        validate_currency(&self.default_currency)
            .map_err(|e| TrackerError::Config(e.to_string()))?;
        if self.log_level.trim().is_empty() {
            return Err(TrackerError::Config("log_level must not be empty".into()));
        }
        Ok(())
    }

    /// Set a single setting by its config.json key
    pub fn set(&mut self, key: &str, value: &str) -> TrackerResult<()> {
        match key {
            "default_currency" => self.default_currency = value.trim().to_uppercase(),
            "default_household" => {
                self.default_household = if value.trim().is_empty() || value == "none" {
                    None
                } else {
                    Some(HouseholdId::parse(value).map_err(|_| {
                        TrackerError::Config(format!("Invalid household ID: {}", value))
                    })?)
                }
            }
            "log_level" => self.log_level = value.trim().to_string(),
            "date_format" => self.date_format = value.to_string(),
            "currency_symbol" => self.currency_symbol = value.to_string(),
            other => {
                return Err(TrackerError::Config(format!("Unknown setting: {}", other)));
            }
        }
        self.validate()
    }
}
