//! UI Components
//!
//! Presentation only: every state change goes through `AppContext`.

mod config_dialog;
mod timetable_cell;
mod timetable_grid;
mod timetable_header;

pub use config_dialog::ConfigDialog;
pub use timetable_cell::TimetableCell;
pub use timetable_grid::TimetableGrid;
pub use timetable_header::TimetableHeader;
