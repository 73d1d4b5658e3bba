//! Event-log persistence.
//!
//! The log is a single pretty-printed JSON array of records at
//! `~/.config/lunalog/periods.json`. Saving replaces the whole file;
//! there is no incremental patching, and concurrent writers resolve to
//! last-writer-wins. The engine never touches this module: it receives
//! a loaded snapshot and hands back a full replacement.

use std::path::PathBuf;

use super::Config;
use crate::error::{CoreError, Result};
use crate::events::PeriodEvent;

/// File-backed store for the period event log.
pub struct EventStore {
    path: PathBuf,
}

impl EventStore {
    /// Open the store at the default location.
    pub fn open() -> Result<Self> {
        Ok(Self {
            path: super::data_dir()?.join("periods.json"),
        })
    }

    /// Open the store at an explicit path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Open the store at the configured location, falling back to the
    /// default when no override is set.
    pub fn from_config(config: &Config) -> Result<Self> {
        match &config.store.path {
            Some(path) => Ok(Self::with_path(path.clone())),
            None => Self::open(),
        }
    }

    /// Load the full event log. A missing file is an empty log.
    pub fn load(&self) -> Result<Vec<PeriodEvent>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| CoreError::Store {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Replace the event log on disk with `events`.
    pub fn save(&self, events: &[PeriodEvent]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(events)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    /// Get the log file path
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}
