//! One-time migration from the paired start/end log format.
//!
//! Earlier versions of the application stored two tagged entries per
//! cycle. The canonical format is one record per cycle; this module
//! converts an entire legacy log in one pass so the engine never has to
//! understand both shapes.

use crate::cycles::parse_tagged_cycles;
use crate::events::{PeriodEvent, TaggedEvent};

/// Convert a legacy paired log into canonical single-record events,
/// ordered ascending by start date. Notes did not exist in the legacy
/// format, so every migrated record carries an empty note.
pub fn migrate_tagged_log(events: &[TaggedEvent]) -> Vec<PeriodEvent> {
    parse_tagged_cycles(events)
        .into_iter()
        .map(|cycle| PeriodEvent {
            start_date: cycle.start_date,
            end_date: cycle.end_date,
            note: String::new(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycles::parse_cycles;
    use crate::events::EventKind;
    use chrono::NaiveDate;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_migration_pairs_and_orders() {
        let legacy = vec![
            TaggedEvent { date: d("2024-02-01"), kind: EventKind::Start },
            TaggedEvent { date: d("2024-01-05"), kind: EventKind::End },
            TaggedEvent { date: d("2024-01-01"), kind: EventKind::Start },
        ];
        let events = migrate_tagged_log(&legacy);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].start_date, d("2024-01-01"));
        assert_eq!(events[0].end_date, Some(d("2024-01-05")));
        assert_eq!(events[1].start_date, d("2024-02-01"));
        assert_eq!(events[1].end_date, None);
    }

    #[test]
    fn test_migrated_log_normalizes_identically() {
        let legacy = vec![
            TaggedEvent { date: d("2024-01-01"), kind: EventKind::Start },
            TaggedEvent { date: d("2024-01-05"), kind: EventKind::End },
        ];
        let migrated = migrate_tagged_log(&legacy);
        assert_eq!(parse_cycles(&migrated), parse_tagged_cycles(&legacy));
    }

    #[test]
    fn test_legacy_json_shape_deserializes() {
        let json = r#"[{"date":"2024-01-01","kind":"start"},{"date":"2024-01-05","kind":"end"}]"#;
        let legacy: Vec<TaggedEvent> = serde_json::from_str(json).unwrap();
        let events = migrate_tagged_log(&legacy);
        assert_eq!(events.len(), 1);
    }
}
