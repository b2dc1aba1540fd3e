//! User settings
//!
//! A small persisted settings file created on first run. Nothing here
//! affects record semantics; it only shapes presentation defaults.

use serde::{Deserialize, Serialize};

use crate::error::ExpenseResult;
use crate::storage::{read_json, write_json_atomic};

use super::paths::SpendlogPaths;

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_trend_months() -> u32 {
    6
}

/// Persisted user settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Symbol prefixed to displayed amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Default window for the monthly trend report
    #[serde(default = "default_trend_months")]
    pub trend_months: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            trend_months: default_trend_months(),
        }
    }
}

impl Settings {
    /// Load settings, writing the defaults if no file exists yet
    pub fn load_or_create(paths: &SpendlogPaths) -> ExpenseResult<Self> {
        let path = paths.settings_file();
        if path.exists() {
            read_json(&path)
        } else {
            let settings = Self::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendlogPaths) -> ExpenseResult<()> {
        write_json_atomic(paths.settings_file(), self)
    }
}
