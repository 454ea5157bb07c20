use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::categorizer::{CategoryRule, RuleTable};
use crate::error::{LensError, Result};
use crate::importer::DEFAULT_DATE_FORMAT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Replaces the built-in rule table when present. Order is significant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<CategoryRule>>,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            currency_symbol: default_currency_symbol(),
            rules: None,
        }
    }
}

impl Settings {
    pub fn rule_table(&self) -> RuleTable {
        match &self.rules {
            Some(rules) => RuleTable::new(rules.clone()),
            None => RuleTable::default(),
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("spendlens")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn load_settings_from(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| LensError::Settings(format!("cannot read {}: {e}", path.display())))?;
    serde_json::from_str(&content)
        .map_err(|e| LensError::Settings(format!("invalid {}: {e}", path.display())))
}

/// An explicit path must load; the default location falls back to built-in
/// settings when absent.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        return load_settings_from(path);
    }
    let path = settings_path();
    if path.exists() {
        load_settings_from(&path)
    } else {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        Ok(Settings::default())
    }
}
