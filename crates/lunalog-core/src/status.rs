//! Status & prediction engine.
//!
//! Given the normalized cycle list and a reference date, computes a
//! [`PeriodStatus`] snapshot: whether the date falls inside a cycle,
//! day offsets into and out of it, rolling averages over completed
//! history, and the projected next start. The snapshot is computed
//! fresh per query and never persisted.
//!
//! All date arithmetic is whole-day subtraction on `NaiveDate`, which
//! carries no time-of-day component, so there is no midnight or
//! timezone rounding to worry about.

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::cycles::Cycle;
use crate::storage::TrackerConfig;

/// Snapshot of the cycle state on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodStatus {
    /// True iff `current_cycle` is set
    pub is_on_period: bool,
    /// The cycle containing the reference date, if any
    pub current_cycle: Option<Cycle>,
    /// Days elapsed since the current cycle started (0 on the start day)
    pub days_since_start: Option<i64>,
    /// Days until the current cycle ends; projected from the average
    /// period length when no end is recorded, and then possibly negative
    pub days_until_end: Option<i64>,
    /// Signed days until the next expected start; negative means overdue
    pub days_until_next: Option<i64>,
    /// Rolling average gap between consecutive completed-cycle starts,
    /// or the configured default with too little history
    pub average_cycle_days: i64,
    /// Rolling average inclusive period length over the trailing window,
    /// `None` when no completed cycle falls inside it
    pub average_period_days: Option<i64>,
}

/// Compute the status snapshot for `today`.
///
/// `cycles` must be ordered ascending by start date, as produced by
/// [`crate::cycles::parse_cycles`]. Overlapping or duplicate cycles are
/// tolerated: the first match in iteration order wins, and the tie-break
/// is deliberately left as-is for compatibility with existing logs.
pub fn period_status(cycles: &[Cycle], today: NaiveDate, config: &TrackerConfig) -> PeriodStatus {
    let current_cycle = cycles
        .iter()
        .find(|cycle| match cycle.end_date {
            Some(end) => cycle.start_date <= today && today <= end,
            None => cycle.start_date <= today,
        })
        .copied();
    let is_on_period = current_cycle.is_some();

    let completed: Vec<Cycle> = cycles
        .iter()
        .filter(|c| c.end_date.is_some())
        .copied()
        .collect();

    // Average gap between consecutive completed-cycle starts. With too
    // little history the configured default stands in.
    let average_cycle_days = if completed.len() >= config.min_cycles_for_average.max(2) {
        let gaps: Vec<i64> = completed
            .windows(2)
            .map(|pair| (pair[1].start_date - pair[0].start_date).num_days())
            .collect();
        round_mean(&gaps)
    } else {
        i64::from(config.default_cycle_days)
    };

    // Average inclusive period length, restricted to cycles ending within
    // the trailing window. Stale history outside the window is never
    // silently reused.
    let window_start = today
        .checked_sub_months(Months::new(config.average_window_months))
        .unwrap_or(NaiveDate::MIN);
    let recent_lengths: Vec<i64> = completed
        .iter()
        .filter_map(|c| c.end_date.map(|end| (c.start_date, end)))
        .filter(|(_, end)| *end >= window_start)
        .map(|(start, end)| (end - start).num_days() + 1)
        .collect();
    let average_period_days = if recent_lengths.is_empty() {
        None
    } else {
        Some(round_mean(&recent_lengths))
    };

    let mut days_since_start = None;
    let mut days_until_end = None;
    if let Some(cycle) = &current_cycle {
        days_since_start = Some((today - cycle.start_date).num_days());
        days_until_end = match cycle.end_date {
            Some(end) => Some((end - today).num_days()),
            None => {
                let period_days =
                    average_period_days.unwrap_or(i64::from(config.default_period_days));
                let expected_end = cycle
                    .start_date
                    .checked_add_days(Days::new(period_days.saturating_sub(1).max(0) as u64))
                    .unwrap_or(cycle.start_date);
                Some((expected_end - today).num_days())
            }
        };
    }

    let days_until_next = if is_on_period {
        None
    } else {
        completed.last().and_then(|last| {
            last.start_date
                .checked_add_days(Days::new(average_cycle_days.max(0) as u64))
                .map(|expected| (expected - today).num_days())
        })
    };

    PeriodStatus {
        is_on_period,
        current_cycle,
        days_since_start,
        days_until_end,
        days_until_next,
        average_cycle_days,
        average_period_days,
    }
}

fn round_mean(values: &[i64]) -> i64 {
    if values.is_empty() {
        return 0;
    }
    let sum: i64 = values.iter().sum();
    (sum as f64 / values.len() as f64).round() as i64
}
