//! TOML-based application configuration.
//!
//! Stores the tracker's tunables:
//! - Fallback cycle and period lengths used before enough history exists
//! - How much completed history is required before trusting averages
//! - The trailing window for the period-length average
//! - Whether a new start is born with a synthesized end date
//!
//! Configuration is stored at `~/.config/lunalog/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::{ConfigError, Result};

/// Cycle-inference configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Fallback average cycle length in days
    #[serde(default = "default_cycle_days")]
    pub default_cycle_days: u32,
    /// Fallback period length in days, also the synthesized-end offset
    #[serde(default = "default_period_days")]
    pub default_period_days: u32,
    /// Completed cycles required before the computed cycle average is
    /// trusted over the default
    #[serde(default = "default_min_cycles")]
    pub min_cycles_for_average: usize,
    /// Trailing window, in calendar months, for the period-length average
    #[serde(default = "default_window_months")]
    pub average_window_months: u32,
    /// Synthesize `start + default_period_days` as the end date when a
    /// start is recorded, instead of leaving the cycle open
    #[serde(default)]
    pub auto_close_on_start: bool,
    /// Visible span of an ongoing cycle in the calendar view
    #[serde(default = "default_ongoing_days")]
    pub ongoing_display_days: u32,
}

/// Event-log store configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Overrides the default event-log location when set.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/lunalog/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

// Default functions
fn default_cycle_days() -> u32 {
    28
}
fn default_period_days() -> u32 {
    5
}
fn default_min_cycles() -> usize {
    2
}
fn default_window_months() -> u32 {
    6
}
fn default_ongoing_days() -> u32 {
    7
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            default_cycle_days: default_cycle_days(),
            default_period_days: default_period_days(),
            min_cycles_for_average: default_min_cycles(),
            average_window_months: default_window_months(),
            auto_close_on_start: false,
            ongoing_display_days: default_ongoing_days(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, or return the defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or
    /// parsed.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| {
                ConfigError::LoadFailed {
                    path,
                    message: e.to_string(),
                }
                .into()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }
            .into()),
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| {
            ConfigError::SaveFailed {
                path,
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Look up a value by dotted path, e.g. `tracker.default_cycle_days`.
    pub fn get(&self, key: &str) -> Option<String> {
        let root = serde_json::to_value(self).ok()?;
        let mut current = &root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(match current {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Set a value by dotted path, coercing to the existing field's type,
    /// and persist the result.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut root = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut root, key, value)?;
        *self = serde_json::from_value(root).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.save()
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<()> {
        let mut parts = key.split('.').peekable();
        let mut current = root;

        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current
                    .as_object_mut()
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
                let existing = obj
                    .get(part)
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|e| ConfigError::InvalidValue {
                            key: key.to_string(),
                            message: e.to_string(),
                        })?,
                    ),
                    serde_json::Value::Number(_) => {
                        let n = value.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                            key: key.to_string(),
                            message: format!("cannot parse '{value}' as number"),
                        })?;
                        serde_json::Value::Number(n.into())
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current
                .get_mut(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        }

        Err(ConfigError::UnknownKey(key.to_string()).into())
    }
}
