use std::path::PathBuf;

use clap::Subcommand;
use lunalog_core::{migrate_tagged_log, Config, EventStore, TaggedEvent};

#[derive(Subcommand)]
pub enum ImportAction {
    /// Migrate a paired start/end event log into the canonical format
    Legacy {
        /// Path to the legacy JSON log
        file: PathBuf,
    },
}

pub fn run(action: ImportAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ImportAction::Legacy { file } => {
            let config = Config::load()?;
            let store = EventStore::from_config(&config)?;

            // One-time migration: never merge into existing data
            if !store.load()?.is_empty() {
                return Err("refusing to import: the event log is not empty".into());
            }

            let content = std::fs::read_to_string(&file)?;
            let legacy: Vec<TaggedEvent> = serde_json::from_str(&content)?;
            let events = migrate_tagged_log(&legacy);
            store.save(&events)?;
            println!("imported {} cycles", events.len());
        }
    }
    Ok(())
}
