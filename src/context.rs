//! Application Context
//!
//! Hands components the core store and fire-and-forget wrappers around its
//! async actions.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use timetable_core::{ClassConfig, HttpTimetableService, TimetableStore};

use crate::storage::BrowserStorage;

pub type CoreStore = TimetableStore<HttpTimetableService, BrowserStorage>;

/// Copyable handle to the core store
#[derive(Clone, Copy)]
pub struct AppContext {
    core: StoredValue<Rc<CoreStore>, LocalStorage>,
}

impl AppContext {
    pub fn new(core: Rc<CoreStore>) -> Self {
        Self {
            core: StoredValue::new_local(core),
        }
    }

    pub fn core(&self) -> Rc<CoreStore> {
        self.core.get_value()
    }

    /// Load persisted state and the current week
    pub fn initialize(&self) {
        let core = self.core();
        spawn_local(async move {
            core.initialize().await;
        });
    }

    pub fn change_week(&self, is_next: bool) {
        let core = self.core();
        spawn_local(async move {
            if let Err(e) = core.change_week(is_next).await {
                web_sys::console::log_1(&format!("[WEEK] change to next={} failed: {}", is_next, e).into());
            }
        });
    }

    pub fn set_show_config(&self, show: bool) {
        self.core().set_show_config(show);
    }

    /// Stage `draft` and try to make it the active config.
    /// The dialog closes itself on success.
    pub fn save_config(&self, draft: ClassConfig) {
        let core = self.core();
        core.set_temp_config(draft);
        spawn_local(async move {
            if let Err(e) = core.save_config().await {
                web_sys::console::log_1(&format!("[CONFIG] save failed: {}", e).into());
            }
        });
    }

    pub fn save_teacher_info(&self, subject: &str, note: &str) {
        self.core().save_teacher_info(subject, note);
    }
}
