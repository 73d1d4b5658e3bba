use lunalog_core::{parse_cycles, Config, Cycle, EventStore};

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct HistoryEntry {
    #[serde(flatten)]
    cycle: Cycle,
    /// Inclusive length in days, absent while the cycle is open
    period_days: Option<i64>,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let store = EventStore::from_config(&config)?;
    let cycles = parse_cycles(&store.load()?);

    let entries: Vec<HistoryEntry> = cycles
        .into_iter()
        .map(|cycle| HistoryEntry {
            period_days: cycle
                .end_date
                .map(|end| (end - cycle.start_date).num_days() + 1),
            cycle,
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}
