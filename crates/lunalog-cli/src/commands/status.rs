use lunalog_core::{parse_cycles, period_status, Config, EventStore};

use super::parse_date;

pub fn run(date: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let store = EventStore::from_config(&config)?;
    let events = store.load()?;

    let today = match date {
        Some(raw) => parse_date(&raw)?,
        None => chrono::Local::now().date_naive(),
    };

    let status = period_status(&parse_cycles(&events), today, &config.tracker);
    println!("{}", serde_json::to_string_pretty(&status)?);
    Ok(())
}
