//! Timetable Frontend App
//!
//! Wires the core store to the reactive mirror and lays out header, grid and
//! settings dialog.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;
use timetable_core::{ApiConfig, HttpTimetableService, TimetableStore};

use crate::components::{ConfigDialog, TimetableGrid, TimetableHeader};
use crate::context::AppContext;
use crate::storage::BrowserStorage;
use crate::store::{store_apply_view, AppState, AppStateStoreFields, AppStore};

const API_CONFIG: &str = include_str!("../config.json");

#[component]
pub fn App() -> impl IntoView {
    let api_config = ApiConfig::from_json_str(API_CONFIG).unwrap_or_else(|e| {
        web_sys::console::log_1(&format!("[APP] bad config.json, using defaults: {}", e).into());
        ApiConfig::default()
    });
    let service = HttpTimetableService::from_config(&api_config);
    web_sys::console::log_1(&format!("[APP] Timetable API at {}", service.api_url()).into());

    let core = Rc::new(TimetableStore::new(service, BrowserStorage));
    let store: AppStore = Store::new(AppState::new());
    core.subscribe(move |view| store_apply_view(&store, view));

    let ctx = AppContext::new(core);
    provide_context(store);
    provide_context(ctx);

    ctx.initialize();

    Effect::new(move |_| {
        let title = store.config().get().title();
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&title);
        }
    });

    let body = move || {
        if let Some(error) = store.error().get() {
            view! {
                <div class="timetable-frame">
                    <pre class="timetable-error">{error}</pre>
                </div>
            }
            .into_any()
        } else if store.is_loading().get() || store.is_week_change_loading().get() {
            view! {
                <div class="timetable-frame">
                    <div class="skeleton"></div>
                </div>
            }
            .into_any()
        } else {
            view! {
                <div class="timetable-frame">
                    <TimetableGrid />
                </div>
            }
            .into_any()
        }
    };

    let update_date = move || {
        let error = store.error().get();
        store
            .timetable()
            .get()
            .filter(|_| error.is_none())
            .map(|data| format!("업데이트: {}", data.display_update_date()))
    };

    view! {
        <main class="app-layout">
            <TimetableHeader />
            {body}
            <p class="update-date">{update_date}</p>
            <ConfigDialog />
        </main>
    }
}
