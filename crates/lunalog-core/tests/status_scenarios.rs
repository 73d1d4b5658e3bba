//! Integration tests for the cycle engine.
//!
//! Drives the full workflow the CLI runs on every command: mutate the
//! raw log through the pure helpers, persist it through the store,
//! re-normalize, and query status.

use chrono::NaiveDate;
use lunalog_core::{
    add_period_end, add_period_start, delete_period_cycle, migrate_tagged_log, parse_cycles,
    period_status, update_period_cycle, EventKind, EventStore, TaggedEvent, TrackerConfig,
};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_full_tracking_workflow() {
    let dir = tempfile::tempdir().unwrap();
    let store = EventStore::with_path(dir.path().join("periods.json"));
    let config = TrackerConfig::default();

    // Record a start on an empty log
    let events = store.load().unwrap();
    assert!(events.is_empty());
    let events = add_period_start(&events, d("2024-03-01"), &config);
    store.save(&events).unwrap();

    // Reload and query: first day of a new open cycle
    let cycles = parse_cycles(&store.load().unwrap());
    let status = period_status(&cycles, d("2024-03-01"), &config);
    assert!(status.is_on_period);
    assert_eq!(status.days_since_start, Some(0));
    assert_eq!(status.current_cycle.unwrap().end_date, None);

    // Close the cycle and verify the day after it is off-period
    let events = add_period_end(&store.load().unwrap(), d("2024-03-05"));
    store.save(&events).unwrap();
    let cycles = parse_cycles(&store.load().unwrap());
    let status = period_status(&cycles, d("2024-03-10"), &config);
    assert!(!status.is_on_period);
    assert_eq!(status.average_period_days, Some(5));
}

#[test]
fn test_history_builds_predictions() {
    let config = TrackerConfig::default();
    let mut events = Vec::new();
    for (start, end) in [
        ("2024-01-01", "2024-01-05"),
        ("2024-01-29", "2024-02-02"),
        ("2024-02-26", "2024-03-01"),
    ] {
        events = add_period_start(&events, d(start), &config);
        events = add_period_end(&events, d(end));
    }

    let cycles = parse_cycles(&events);
    let status = period_status(&cycles, d("2024-03-10"), &config);
    assert!(!status.is_on_period);
    assert_eq!(status.average_cycle_days, 28);
    assert_eq!(status.average_period_days, Some(5));
    // Next expected start: Feb 26 + 28 days = Mar 25
    assert_eq!(status.days_until_next, Some(15));
}

#[test]
fn test_auto_close_variant_is_on_period_semantics() {
    let config = TrackerConfig {
        auto_close_on_start: true,
        ..TrackerConfig::default()
    };

    let events = add_period_start(&[], d("2024-03-01"), &config);
    let cycles = parse_cycles(&events);

    // The synthesized end covers start + default_period_days
    let status = period_status(&cycles, d("2024-03-06"), &config);
    assert!(status.is_on_period);
    let status = period_status(&cycles, d("2024-03-07"), &config);
    assert!(!status.is_on_period);
}

#[test]
fn test_edit_and_delete_round_trip_through_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = EventStore::with_path(dir.path().join("periods.json"));
    let config = TrackerConfig::default();

    let events = add_period_start(&[], d("2024-01-01"), &config);
    let events = add_period_end(&events, d("2024-01-05"));
    store.save(&events).unwrap();

    // Shift the whole cycle forward a day
    let events = update_period_cycle(
        &store.load().unwrap(),
        d("2024-01-01"),
        d("2024-01-02"),
        Some(d("2024-01-06")),
    );
    store.save(&events).unwrap();
    let cycles = parse_cycles(&store.load().unwrap());
    assert_eq!(cycles[0].start_date, d("2024-01-02"));
    assert_eq!(cycles[0].end_date, Some(d("2024-01-06")));

    // Deleting a date that no longer exists leaves the log alone
    let events = delete_period_cycle(&store.load().unwrap(), d("2024-01-01"));
    assert_eq!(events, store.load().unwrap());

    // Deleting the real start empties it
    let events = delete_period_cycle(&events, d("2024-01-02"));
    store.save(&events).unwrap();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_legacy_import_feeds_the_engine() {
    let legacy = vec![
        TaggedEvent { date: d("2024-01-01"), kind: EventKind::Start },
        TaggedEvent { date: d("2024-01-05"), kind: EventKind::End },
        TaggedEvent { date: d("2024-01-29"), kind: EventKind::Start },
        TaggedEvent { date: d("2024-02-02"), kind: EventKind::End },
        TaggedEvent { date: d("2024-02-26"), kind: EventKind::Start },
    ];

    let events = migrate_tagged_log(&legacy);
    let cycles = parse_cycles(&events);
    assert_eq!(cycles.len(), 3);
    assert_eq!(cycles[2].end_date, None);

    let status = period_status(&cycles, d("2024-02-27"), &TrackerConfig::default());
    assert!(status.is_on_period);
    assert_eq!(status.days_since_start, Some(1));
    assert_eq!(status.average_cycle_days, 28);
}
