//! Domain Layer
//!
//! Plain data types shared by the store, the service client and the UI.
//! No I/O happens here.

mod annotations;
mod class_config;
mod timetable;
mod week;

pub use annotations::TeacherAnnotations;
pub use class_config::ClassConfig;
pub use timetable::{OriginalPeriod, PeriodEntry, PeriodSlot, TimetableSnapshot};
pub use week::Week;
