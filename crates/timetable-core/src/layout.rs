//! Period Layout
//!
//! Turns a snapshot into the rows the grid renders, with the lunch break
//! spliced in after the configured period.

use chrono::{Datelike, NaiveDate};

use crate::domain::{PeriodSlot, TimetableSnapshot};
use crate::error::LayoutError;

/// Weekday column headers, Monday to Friday.
pub const WEEKDAYS: [&str; 5] = ["월", "화", "수", "목", "금"];

pub const LUNCH_LABEL: &str = "점심";
pub const LUNCH_TIME: &str = "12:20~13:20";

/// One rendered cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodCell {
    /// Empty when the service has nothing scheduled.
    pub subject: String,
    pub replaced: bool,
    pub original_subject: Option<String>,
}

impl PeriodCell {
    pub fn is_empty(&self) -> bool {
        self.subject.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodRow {
    Class {
        /// Index into `day_time` / the per-day period arrays.
        index: usize,
        slot: PeriodSlot,
        cells: Vec<PeriodCell>,
    },
    Lunch,
}

impl PeriodRow {
    pub fn is_lunch(&self) -> bool {
        matches!(self, PeriodRow::Lunch)
    }
}

/// Build display rows for `snapshot`, inserting lunch at `lunch_after`.
///
/// A snapshot with no periods or no days yields no rows at all.
pub fn build_period_rows(
    snapshot: &TimetableSnapshot,
    lunch_after: u32,
) -> Result<Vec<PeriodRow>, LayoutError> {
    if snapshot.day_time.is_empty() || snapshot.timetable.is_empty() {
        return Ok(Vec::new());
    }

    let periods = snapshot.day_time.len();
    let at = lunch_after as usize;
    if at > periods {
        return Err(LayoutError::LunchOutOfRange {
            lunch_after,
            periods,
        });
    }

    let mut rows: Vec<PeriodRow> = snapshot
        .day_time
        .iter()
        .enumerate()
        .map(|(index, raw)| PeriodRow::Class {
            index,
            slot: PeriodSlot::parse(raw),
            cells: (0..WEEKDAYS.len())
                .map(|day| cell_at(snapshot, day, index))
                .collect(),
        })
        .collect();

    rows.insert(at, PeriodRow::Lunch);
    Ok(rows)
}

fn cell_at(snapshot: &TimetableSnapshot, day: usize, period: usize) -> PeriodCell {
    match snapshot.entry(day, period) {
        Some(entry) => PeriodCell {
            subject: entry.subject.clone(),
            replaced: entry.replaced,
            original_subject: entry
                .original
                .as_ref()
                .filter(|_| entry.replaced)
                .map(|o| o.subject.clone()),
        },
        None => PeriodCell {
            subject: String::new(),
            replaced: false,
            original_subject: None,
        },
    }
}

/// School year `date` falls in; the year turns over in March.
pub fn school_year(date: NaiveDate) -> i32 {
    if date.month() < 3 {
        date.year() - 1
    } else {
        date.year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OriginalPeriod, PeriodEntry};

    fn entry(period: u32, subject: &str) -> PeriodEntry {
        PeriodEntry {
            period,
            subject: subject.to_string(),
            teacher: String::new(),
            replaced: false,
            original: None,
        }
    }

    fn snapshot(periods: usize) -> TimetableSnapshot {
        TimetableSnapshot {
            day_time: (1..=periods)
                .map(|p| format!("{}(0{}:00~0{}:45)", p, p, p))
                .collect(),
            timetable: (0..5)
                .map(|day| {
                    (1..=periods)
                        .map(|p| entry(p as u32, &format!("과목{}-{}", day, p)))
                        .collect()
                })
                .collect(),
            update_date: "(2025-03-10)".to_string(),
        }
    }

    fn labels(rows: &[PeriodRow]) -> Vec<String> {
        rows.iter()
            .map(|row| match row {
                PeriodRow::Class { slot, .. } => slot.label.clone(),
                PeriodRow::Lunch => LUNCH_LABEL.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_seven_periods_lunch_after_four() {
        let rows = build_period_rows(&snapshot(7), 4).unwrap();
        assert_eq!(rows.len(), 8);
        assert!(rows[4].is_lunch());
        assert_eq!(labels(&rows), ["1", "2", "3", "4", "점심", "5", "6", "7"]);
    }

    #[test]
    fn test_lunch_at_every_valid_position() {
        let data = snapshot(6);
        for k in 0..=6u32 {
            let rows = build_period_rows(&data, k).unwrap();
            assert_eq!(rows.len(), 7);
            assert!(rows[k as usize].is_lunch(), "lunch not at {}", k);
            let order: Vec<usize> = rows
                .iter()
                .filter_map(|row| match row {
                    PeriodRow::Class { index, .. } => Some(*index),
                    PeriodRow::Lunch => None,
                })
                .collect();
            assert_eq!(order, (0..6).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_lunch_out_of_range_is_reported() {
        let err = build_period_rows(&snapshot(3), 4).unwrap_err();
        assert_eq!(
            err,
            LayoutError::LunchOutOfRange {
                lunch_after: 4,
                periods: 3
            }
        );
    }

    #[test]
    fn test_empty_snapshot_has_no_rows() {
        let mut data = snapshot(0);
        assert!(build_period_rows(&data, 0).unwrap().is_empty());

        data = snapshot(3);
        data.timetable.clear();
        assert!(build_period_rows(&data, 9).unwrap().is_empty());
    }

    #[test]
    fn test_missing_cells_are_empty_and_replacements_carried() {
        let mut data = snapshot(2);
        data.timetable[1].truncate(1);
        data.timetable[0][1] = PeriodEntry {
            period: 2,
            subject: "체육".to_string(),
            teacher: "박*".to_string(),
            replaced: true,
            original: Some(OriginalPeriod {
                period: 2,
                subject: "수학".to_string(),
                teacher: "이*".to_string(),
            }),
        };

        let rows = build_period_rows(&data, 2).unwrap();
        match &rows[1] {
            PeriodRow::Class { cells, slot, .. } => {
                assert_eq!(slot.time.as_deref(), Some("02:00~02:45"));
                assert_eq!(cells.len(), 5);
                assert!(cells[0].replaced);
                assert_eq!(cells[0].original_subject.as_deref(), Some("수학"));
                assert!(cells[1].is_empty());
            }
            PeriodRow::Lunch => panic!("expected a class row"),
        }
    }

    #[test]
    fn test_school_year_turns_over_in_march() {
        let feb = NaiveDate::from_ymd_opt(2025, 2, 28).unwrap();
        let mar = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(school_year(feb), 2024);
        assert_eq!(school_year(mar), 2025);
    }
}
