//! Store state and the read-only view handed to the UI.

use std::collections::BTreeMap;

use crate::domain::{ClassConfig, TeacherAnnotations, TimetableSnapshot, Week};

/// Everything the presentation layer may read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreView {
    pub config: ClassConfig,
    pub temp_config: Option<ClassConfig>,
    pub timetable: Option<TimetableSnapshot>,
    pub is_loading: bool,
    pub is_week_change_loading: bool,
    pub error: Option<String>,
    pub is_next_week: bool,
    pub show_config: bool,
    /// Notes for the active config only.
    pub teacher_notes: BTreeMap<String, String>,
}

impl StoreView {
    pub fn teacher_note(&self, subject: &str) -> Option<&str> {
        self.teacher_notes.get(subject).map(String::as_str)
    }

    /// Config the settings dialog should start from.
    pub fn draft_or_active(&self) -> &ClassConfig {
        self.temp_config.as_ref().unwrap_or(&self.config)
    }
}

/// Mutable state behind the store's lock.
#[derive(Debug)]
pub(crate) struct StoreState {
    pub config: ClassConfig,
    pub annotations: TeacherAnnotations,
    pub temp_config: Option<ClassConfig>,
    pub timetable: Option<TimetableSnapshot>,
    pub is_loading: bool,
    pub is_week_change_loading: bool,
    pub error: Option<String>,
    pub week: Week,
    pub show_config: bool,

    /// Last request ticket handed out. Only this ticket may commit.
    pub latest_request: u64,
    /// Ticket that raised `is_loading`.
    pub loading_owner: Option<u64>,
    /// Ticket and target of the week change that raised `is_week_change_loading`.
    pub week_change: Option<(u64, Week)>,
}

impl StoreState {
    pub fn new() -> Self {
        Self {
            config: ClassConfig::default(),
            annotations: TeacherAnnotations::new(),
            temp_config: None,
            timetable: None,
            is_loading: true,
            is_week_change_loading: false,
            error: None,
            week: Week::Current,
            show_config: false,
            latest_request: 0,
            loading_owner: None,
            week_change: None,
        }
    }

    pub fn issue_ticket(&mut self) -> u64 {
        self.latest_request += 1;
        self.latest_request
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        self.latest_request == ticket
    }

    pub fn begin_loading(&mut self, ticket: u64) {
        self.is_loading = true;
        self.loading_owner = Some(ticket);
    }

    /// Clear `is_loading` if `ticket` still owns it.
    pub fn end_loading(&mut self, ticket: u64) {
        if self.loading_owner == Some(ticket) {
            self.is_loading = false;
            self.loading_owner = None;
        }
    }

    pub fn begin_week_change(&mut self, ticket: u64, target: Week) {
        self.is_week_change_loading = true;
        self.week_change = Some((ticket, target));
    }

    pub fn end_week_change(&mut self, ticket: u64) {
        if matches!(self.week_change, Some((owner, _)) if owner == ticket) {
            self.is_week_change_loading = false;
            self.week_change = None;
        }
    }

    pub fn view(&self) -> StoreView {
        StoreView {
            config: self.config.clone(),
            temp_config: self.temp_config.clone(),
            timetable: self.timetable.clone(),
            is_loading: self.is_loading,
            is_week_change_loading: self.is_week_change_loading,
            error: self.error.clone(),
            is_next_week: self.week.is_next(),
            show_config: self.show_config,
            teacher_notes: self.annotations.for_config(&self.config),
        }
    }
}
