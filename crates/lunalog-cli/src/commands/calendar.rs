use chrono::Datelike;
use lunalog_core::{all_period_days, parse_cycles, Config, EventStore};

pub fn run(month: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let store = EventStore::from_config(&config)?;
    let cycles = parse_cycles(&store.load()?);

    let mut days = all_period_days(&cycles, &config.tracker);
    if let Some(raw) = month {
        let (year, month) = parse_month(&raw)?;
        days.retain(|day| day.year() == year && day.month() == month);
    }

    println!("{}", serde_json::to_string_pretty(&days)?);
    Ok(())
}

fn parse_month(raw: &str) -> Result<(i32, u32), Box<dyn std::error::Error>> {
    let invalid = || format!("invalid month '{raw}', expected YYYY-MM");
    let (year, month) = raw.split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid().into());
    }
    Ok((year, month))
}
