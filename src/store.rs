//! Reactive Mirror of the Timetable Store
//!
//! The core store owns the state; this reactive_stores copy only exists so
//! components re-render on field-level changes.

use std::collections::BTreeMap;

use leptos::prelude::*;
use reactive_stores::Store;
use timetable_core::{ClassConfig, StoreView, TimetableSnapshot};

/// Field-level reactive copy of the latest `StoreView`
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub config: ClassConfig,
    pub temp_config: Option<ClassConfig>,
    pub timetable: Option<TimetableSnapshot>,
    pub is_loading: bool,
    pub is_week_change_loading: bool,
    pub error: Option<String>,
    pub is_next_week: bool,
    pub show_config: bool,
    /// Notes for the active class, by subject
    pub teacher_notes: BTreeMap<String, String>,
}

impl AppState {
    /// Same defaults the core starts from: loading until initialized
    pub fn new() -> Self {
        Self {
            is_loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Copy a core view into the reactive store, touching only changed fields
pub fn store_apply_view(store: &AppStore, view: &StoreView) {
    if store.config().get_untracked() != view.config {
        store.config().set(view.config.clone());
    }
    if store.temp_config().get_untracked() != view.temp_config {
        store.temp_config().set(view.temp_config.clone());
    }
    if store.timetable().get_untracked() != view.timetable {
        store.timetable().set(view.timetable.clone());
    }
    if store.is_loading().get_untracked() != view.is_loading {
        store.is_loading().set(view.is_loading);
    }
    if store.is_week_change_loading().get_untracked() != view.is_week_change_loading {
        store.is_week_change_loading().set(view.is_week_change_loading);
    }
    if store.error().get_untracked() != view.error {
        store.error().set(view.error.clone());
    }
    if store.is_next_week().get_untracked() != view.is_next_week {
        store.is_next_week().set(view.is_next_week);
    }
    if store.show_config().get_untracked() != view.show_config {
        store.show_config().set(view.show_config);
    }
    if store.teacher_notes().get_untracked() != view.teacher_notes {
        store.teacher_notes().set(view.teacher_notes.clone());
    }
}
