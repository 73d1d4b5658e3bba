use clap::Subcommand;
use lunalog_core::{
    add_period_end, add_period_start, delete_period_cycle, parse_cycles, period_status,
    update_period_cycle, Config, EventStore,
};

use super::parse_date;

#[derive(Subcommand)]
pub enum PeriodAction {
    /// Record a period start
    Start {
        /// Start date (YYYY-MM-DD)
        date: String,
    },
    /// Close the most recent open period
    End {
        /// End date (YYYY-MM-DD)
        date: String,
    },
    /// Delete the cycle starting on the given date
    Delete {
        /// Start date of the cycle to delete (YYYY-MM-DD)
        start: String,
    },
    /// Edit a recorded cycle
    Edit {
        /// Start date of the cycle to edit (YYYY-MM-DD)
        old_start: String,
        /// New start date
        #[arg(long)]
        start: String,
        /// New end date; omit to reopen the cycle
        #[arg(long)]
        end: Option<String>,
    },
}

pub fn run(action: PeriodAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let store = EventStore::from_config(&config)?;
    let events = store.load()?;

    let updated = match action {
        PeriodAction::Start { date } => {
            add_period_start(&events, parse_date(&date)?, &config.tracker)
        }
        PeriodAction::End { date } => add_period_end(&events, parse_date(&date)?),
        PeriodAction::Delete { start } => delete_period_cycle(&events, parse_date(&start)?),
        PeriodAction::Edit { old_start, start, end } => {
            let end = end.as_deref().map(parse_date).transpose()?;
            update_period_cycle(&events, parse_date(&old_start)?, parse_date(&start)?, end)
        }
    };

    store.save(&updated)?;

    // Re-render the refreshed status, like the UI does after every edit
    let today = chrono::Local::now().date_naive();
    let status = period_status(&parse_cycles(&updated), today, &config.tracker);
    println!("{}", serde_json::to_string_pretty(&status)?);
    Ok(())
}
