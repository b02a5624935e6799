//! Remote timetable snapshot
//!
//! Schema of the `/timetable` response. Field names follow the wire format.

use serde::{Deserialize, Serialize};

/// One week of schedule for one class, as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableSnapshot {
    /// Period labels like `"1(08:50~09:35)"`, in order.
    pub day_time: Vec<String>,
    /// `timetable[day][period]`, Monday first.
    pub timetable: Vec<Vec<PeriodEntry>>,
    pub update_date: String,
}

/// A single scheduled slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodEntry {
    pub period: u32,
    pub subject: String,
    #[serde(default)]
    pub teacher: String,
    #[serde(default)]
    pub replaced: bool,
    #[serde(default)]
    pub original: Option<OriginalPeriod>,
}

/// What a replaced slot was originally scheduled as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginalPeriod {
    pub period: u32,
    pub subject: String,
    #[serde(default)]
    pub teacher: String,
}

impl TimetableSnapshot {
    /// Entry at `day`/`period`, if the service returned one.
    pub fn entry(&self, day: usize, period: usize) -> Option<&PeriodEntry> {
        self.timetable.get(day).and_then(|periods| periods.get(period))
    }

    pub fn period_count(&self) -> usize {
        self.day_time.len()
    }

    /// `update_date` without the delimiter the service wraps it in.
    pub fn display_update_date(&self) -> &str {
        let mut chars = self.update_date.chars();
        chars.next();
        chars.next_back();
        chars.as_str()
    }
}

/// A parsed `day_time` label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodSlot {
    pub label: String,
    /// `"start~end"`, when the label carried one.
    pub time: Option<String>,
}

impl PeriodSlot {
    pub fn parse(raw: &str) -> Self {
        match raw.split_once('(') {
            Some((label, rest)) => {
                let time = rest.split(')').next().unwrap_or_default();
                Self {
                    label: label.trim().to_string(),
                    time: (!time.is_empty()).then(|| time.to_string()),
                }
            }
            None => Self {
                label: raw.trim().to_string(),
                time: None,
            },
        }
    }

    pub fn start(&self) -> Option<&str> {
        self.time.as_deref().and_then(|t| t.split('~').next())
    }

    pub fn end(&self) -> Option<&str> {
        self.time.as_deref().and_then(|t| t.split_once('~')).map(|(_, end)| end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "day_time": ["1(08:50~09:35)", "2(09:45~10:30)"],
        "timetable": [
            [
                {"period": 1, "subject": "국어", "teacher": "김*", "replaced": false, "original": null},
                {"period": 2, "subject": "체육", "teacher": "박*", "replaced": true,
                 "original": {"period": 2, "subject": "수학", "teacher": "이*"}}
            ]
        ],
        "update_date": "(2025-03-10 08:00:00)"
    }"#;

    #[test]
    fn test_parse_sample_response() {
        let snapshot: TimetableSnapshot = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(snapshot.period_count(), 2);

        let replaced = snapshot.entry(0, 1).unwrap();
        assert!(replaced.replaced);
        assert_eq!(replaced.original.as_ref().unwrap().subject, "수학");
        assert!(snapshot.entry(1, 0).is_none());
        assert_eq!(snapshot.display_update_date(), "2025-03-10 08:00:00");
    }

    #[test]
    fn test_optional_fields_default() {
        let entry: PeriodEntry = serde_json::from_str(r#"{"period": 3, "subject": "음악"}"#).unwrap();
        assert!(!entry.replaced);
        assert!(entry.original.is_none());
        assert!(entry.teacher.is_empty());
    }

    #[test]
    fn test_period_slot_parse() {
        let slot = PeriodSlot::parse("1(08:50~09:35)");
        assert_eq!(slot.label, "1");
        assert_eq!(slot.time.as_deref(), Some("08:50~09:35"));
        assert_eq!(slot.start(), Some("08:50"));
        assert_eq!(slot.end(), Some("09:35"));

        let bare = PeriodSlot::parse("7");
        assert_eq!(bare.label, "7");
        assert!(bare.time.is_none());
        assert!(bare.start().is_none());
    }

    #[test]
    fn test_display_update_date_short_values() {
        let mut snapshot: TimetableSnapshot = serde_json::from_str(SAMPLE).unwrap();
        snapshot.update_date = String::new();
        assert_eq!(snapshot.display_update_date(), "");
        snapshot.update_date = "x".to_string();
        assert_eq!(snapshot.display_update_date(), "");
    }
}
