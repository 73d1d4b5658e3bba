mod config;
mod store;

pub use config::{Config, StoreConfig, TrackerConfig};
pub use store::EventStore;

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/lunalog[-dev]/` based on LUNALOG_ENV.
///
/// Set LUNALOG_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("LUNALOG_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("lunalog-dev")
    } else {
        base_dir.join("lunalog")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
