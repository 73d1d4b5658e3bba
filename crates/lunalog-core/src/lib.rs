//! # Lunalog Core Library
//!
//! This library provides the core business logic for the Lunalog period
//! tracker. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary, with any GUI being a thin layer
//! over the same core library.
//!
//! ## Architecture
//!
//! - **Event log**: a flat list of period records, owned by the store;
//!   every engine call works on a loaded snapshot and returns new values
//! - **Normalizer**: derives the ordered cycle list from the raw log on
//!   every read
//! - **Status engine**: pure inference over the cycle list -- current
//!   state, rolling averages, next-period prediction
//! - **Storage**: JSON event-log store and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`parse_cycles`]: raw events to ordered cycles
//! - [`period_status`]: the status & prediction snapshot
//! - [`EventStore`]: event-log persistence
//! - [`Config`]: application configuration management

pub mod cycles;
pub mod error;
pub mod events;
pub mod migrate;
pub mod status;
pub mod storage;

pub use cycles::{all_period_days, parse_cycles, parse_tagged_cycles, Cycle};
pub use error::{ConfigError, CoreError};
pub use events::{
    add_period_end, add_period_start, delete_period_cycle, update_period_cycle, EventKind,
    PeriodEvent, TaggedEvent,
};
pub use migrate::migrate_tagged_log;
pub use status::{period_status, PeriodStatus};
pub use storage::{Config, EventStore, StoreConfig, TrackerConfig};
