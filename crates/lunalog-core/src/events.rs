//! Event-log records and the pure mutation helpers over them.
//!
//! The canonical log is a flat list of [`PeriodEvent`] records, one per
//! cycle, serialized as a JSON array with `YYYY-MM-DD` string dates. An
//! absent end date is stored as `""` to stay compatible with logs written
//! by earlier versions of the application.
//!
//! All helpers take the log by reference and return a new `Vec`; the
//! caller's snapshot is never mutated.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::storage::TrackerConfig;

/// One recorded cycle: a start date and an optional end date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodEvent {
    /// First day of the period
    pub start_date: NaiveDate,
    /// Last day of the period, `None` while the period is ongoing
    #[serde(with = "opt_date_string", default)]
    pub end_date: Option<NaiveDate>,
    /// Free-form user note, not interpreted by the engine
    #[serde(default)]
    pub note: String,
}

/// A record in the historical paired representation: one entry per start
/// and one per end, matched by proximity. Accepted only by the migration
/// path, never by the engine proper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedEvent {
    pub date: NaiveDate,
    pub kind: EventKind,
}

/// Tag of a [`TaggedEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Start,
    End,
}

/// Record a new period start.
///
/// The result is re-sorted ascending by start date. When
/// `config.auto_close_on_start` is set, an end date of
/// `date + default_period_days` is synthesized so the record is born
/// closed; otherwise it stays open until [`add_period_end`].
pub fn add_period_start(
    events: &[PeriodEvent],
    date: NaiveDate,
    config: &TrackerConfig,
) -> Vec<PeriodEvent> {
    let end_date = if config.auto_close_on_start {
        date.checked_add_days(Days::new(u64::from(config.default_period_days)))
    } else {
        None
    };

    let mut out = events.to_vec();
    out.push(PeriodEvent {
        start_date: date,
        end_date,
        note: String::new(),
    });
    out.sort_by_key(|e| e.start_date);
    out
}

/// Close the most recently started open record whose start is on or
/// before `date`. If no such record exists the log is returned unchanged.
pub fn add_period_end(events: &[PeriodEvent], date: NaiveDate) -> Vec<PeriodEvent> {
    let target = events
        .iter()
        .filter(|e| e.end_date.is_none() && e.start_date <= date)
        .max_by_key(|e| e.start_date)
        .map(|e| e.start_date);

    let Some(start) = target else {
        return events.to_vec();
    };

    events
        .iter()
        .cloned()
        .map(|mut e| {
            if e.start_date == start {
                e.end_date = Some(date);
            }
            e
        })
        .collect()
}

/// Remove the record(s) starting on `start_date`, matched by exact date
/// equality. Deleting a date with no record is the identity.
pub fn delete_period_cycle(events: &[PeriodEvent], start_date: NaiveDate) -> Vec<PeriodEvent> {
    events
        .iter()
        .filter(|e| e.start_date != start_date)
        .cloned()
        .collect()
}

/// Rewrite the dates of the record starting on `old_start_date`, then
/// re-sort. Passing `None` for the end reopens the cycle. An unknown
/// `old_start_date` is the identity.
pub fn update_period_cycle(
    events: &[PeriodEvent],
    old_start_date: NaiveDate,
    new_start: NaiveDate,
    new_end: Option<NaiveDate>,
) -> Vec<PeriodEvent> {
    let mut out: Vec<PeriodEvent> = events
        .iter()
        .cloned()
        .map(|mut e| {
            if e.start_date == old_start_date {
                e.start_date = new_start;
                e.end_date = new_end;
            }
            e
        })
        .collect();
    out.sort_by_key(|e| e.start_date);
    out
}

/// Serde codec for optional dates that round-trips `None` as `""`,
/// matching the historical log format.
pub(crate) mod opt_date_string {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
