//! Timetable Core
//!
//! Client-side state synchronization for the class timetable viewer.
//!
//! Layered like the rest of the workspace:
//! - domain: config, remote snapshot and annotation types
//! - service: remote timetable API client
//! - storage: persisted key-value backends
//! - store: the state container the UI drives
//! - layout: snapshot -> display rows (lunch insertion)

pub mod config;
pub mod domain;
pub mod error;
pub mod layout;
pub mod service;
pub mod storage;
pub mod store;

pub use config::ApiConfig;
pub use domain::{
    ClassConfig, OriginalPeriod, PeriodEntry, PeriodSlot, TeacherAnnotations, TimetableSnapshot,
    Week,
};
pub use error::{ConfigError, FetchError, LayoutError, StorageError, StoreError};
pub use layout::{build_period_rows, school_year, PeriodCell, PeriodRow, WEEKDAYS};
pub use service::{HttpTimetableService, TimetableService};
pub use storage::{KeyValueStore, MemoryStore};
pub use store::{StoreView, TimetableStore};
