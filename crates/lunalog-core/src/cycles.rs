//! Cycle normalizer: turns a raw event log into an ordered cycle list.
//!
//! Cycles are derived values, recomputed on every read. The normalizer is
//! deterministic and side-effect-free; output is always sorted ascending
//! by start date regardless of input order.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::events::{EventKind, PeriodEvent, TaggedEvent};
use crate::storage::TrackerConfig;

/// One menstrual cycle, from a start date to an optional end date.
///
/// `end_date` is `None` while the cycle is ongoing. When present it is
/// never before `start_date` in well-formed data; the engine tolerates
/// violations without crashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cycle {
    pub start_date: NaiveDate,
    #[serde(with = "crate::events::opt_date_string", default)]
    pub end_date: Option<NaiveDate>,
}

/// Normalize the canonical single-record log into ordered cycles.
///
/// Sorting compares parsed date values, not strings. Each record maps to
/// exactly one cycle, so the function is idempotent over its own output
/// shape.
pub fn parse_cycles(events: &[PeriodEvent]) -> Vec<Cycle> {
    let mut cycles: Vec<Cycle> = events
        .iter()
        .map(|e| Cycle {
            start_date: e.start_date,
            end_date: e.end_date,
        })
        .collect();
    cycles.sort_by_key(|c| c.start_date);
    cycles
}

/// Reconstruct cycles from the historical paired representation.
///
/// The tagged log is scanned in date order. A `Start` opens a pending
/// cycle (a second `Start` before any `End` replaces the pending one);
/// the next `End` closes it. An `End` with nothing pending is dropped,
/// and a trailing pending `Start` becomes one ongoing cycle.
pub fn parse_tagged_cycles(events: &[TaggedEvent]) -> Vec<Cycle> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.date);

    let mut cycles = Vec::new();
    let mut pending: Option<NaiveDate> = None;

    for event in sorted {
        match event.kind {
            EventKind::Start => pending = Some(event.date),
            EventKind::End => {
                if let Some(start) = pending.take() {
                    cycles.push(Cycle {
                        start_date: start,
                        end_date: Some(event.date),
                    });
                }
            }
        }
    }

    if let Some(start) = pending {
        cycles.push(Cycle {
            start_date: start,
            end_date: None,
        });
    }

    cycles.sort_by_key(|c| c.start_date);
    cycles
}

/// Expand every cycle into its inclusive day sequence, for calendar
/// highlighting. An ongoing cycle is shown spanning
/// `config.ongoing_display_days` days.
pub fn all_period_days(cycles: &[Cycle], config: &TrackerConfig) -> Vec<NaiveDate> {
    let mut days = Vec::new();

    for cycle in cycles {
        let span = u64::from(config.ongoing_display_days.max(1) - 1);
        let end = cycle
            .end_date
            .or_else(|| cycle.start_date.checked_add_days(Days::new(span)))
            .unwrap_or(cycle.start_date);

        let mut current = cycle.start_date;
        while current <= end {
            days.push(current);
            match current.checked_add_days(Days::new(1)) {
                Some(next) => current = next,
                None => break,
            }
        }
    }

    days
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn event(start: &str, end: Option<&str>) -> PeriodEvent {
        PeriodEvent {
            start_date: d(start),
            end_date: end.map(d),
            note: String::new(),
        }
    }

    fn tagged(date: &str, kind: EventKind) -> TaggedEvent {
        TaggedEvent { date: d(date), kind }
    }

    #[test]
    fn test_parse_cycles_sorts_unsorted_input() {
        let events = vec![
            event("2024-03-01", None),
            event("2024-01-01", Some("2024-01-05")),
            event("2024-02-01", Some("2024-02-04")),
        ];
        let cycles = parse_cycles(&events);
        let starts: Vec<NaiveDate> = cycles.iter().map(|c| c.start_date).collect();
        assert_eq!(starts, vec![d("2024-01-01"), d("2024-02-01"), d("2024-03-01")]);
        assert_eq!(cycles[2].end_date, None);
    }

    #[test]
    fn test_parse_cycles_is_idempotent() {
        let events = vec![
            event("2024-02-01", Some("2024-02-04")),
            event("2024-01-01", Some("2024-01-05")),
        ];
        let once = parse_cycles(&events);
        let again: Vec<PeriodEvent> = once
            .iter()
            .map(|c| PeriodEvent {
                start_date: c.start_date,
                end_date: c.end_date,
                note: String::new(),
            })
            .collect();
        assert_eq!(parse_cycles(&again), once);
    }

    #[test]
    fn test_tagged_pairs_close_in_order() {
        let events = vec![
            tagged("2024-01-05", EventKind::End),
            tagged("2024-01-01", EventKind::Start),
            tagged("2024-02-01", EventKind::Start),
            tagged("2024-02-04", EventKind::End),
        ];
        let cycles = parse_tagged_cycles(&events);
        assert_eq!(
            cycles,
            vec![
                Cycle { start_date: d("2024-01-01"), end_date: Some(d("2024-01-05")) },
                Cycle { start_date: d("2024-02-01"), end_date: Some(d("2024-02-04")) },
            ]
        );
    }

    #[test]
    fn test_tagged_double_start_keeps_latest_pending() {
        let events = vec![
            tagged("2024-01-01", EventKind::Start),
            tagged("2024-01-03", EventKind::Start),
            tagged("2024-01-06", EventKind::End),
        ];
        let cycles = parse_tagged_cycles(&events);
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].start_date, d("2024-01-03"));
        assert_eq!(cycles[0].end_date, Some(d("2024-01-06")));
    }

    #[test]
    fn test_tagged_trailing_start_is_ongoing() {
        let events = vec![
            tagged("2024-01-01", EventKind::Start),
            tagged("2024-01-05", EventKind::End),
            tagged("2024-02-01", EventKind::Start),
        ];
        let cycles = parse_tagged_cycles(&events);
        assert_eq!(cycles.len(), 2);
        assert_eq!(cycles[1].end_date, None);
    }

    #[test]
    fn test_tagged_orphan_end_is_dropped() {
        let events = vec![tagged("2024-01-05", EventKind::End)];
        assert!(parse_tagged_cycles(&events).is_empty());
    }

    #[test]
    fn test_all_period_days_inclusive_span() {
        let cycles = vec![Cycle {
            start_date: d("2024-01-01"),
            end_date: Some(d("2024-01-03")),
        }];
        let days = all_period_days(&cycles, &TrackerConfig::default());
        assert_eq!(days, vec![d("2024-01-01"), d("2024-01-02"), d("2024-01-03")]);
    }

    #[test]
    fn test_all_period_days_defaults_ongoing_to_seven() {
        let cycles = vec![Cycle {
            start_date: d("2024-01-01"),
            end_date: None,
        }];
        let days = all_period_days(&cycles, &TrackerConfig::default());
        assert_eq!(days.len(), 7);
        assert_eq!(*days.last().unwrap(), d("2024-01-07"));
    }
}
