//! Timetable Header Component
//!
//! Title, week toggle and settings button.

use leptos::prelude::*;
use timetable_core::school_year;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TimetableHeader() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let year = school_year(chrono::Local::now().date_naive());

    let week_class = move |is_next: bool| {
        move || {
            if store.is_next_week().get() == is_next { "week-tab active" } else { "week-tab" }
        }
    };

    view! {
        <header class="timetable-header">
            <p class="school-year">{format!("{}학년도", year)}</p>
            <h1>
                {move || {
                    let config = store.config().get();
                    format!("{} {}학년 {}반", config.school, config.grade, config.class_no)
                }}
            </h1>
            <div class="week-switch">
                <button
                    class=week_class(false)
                    disabled=move || store.is_week_change_loading().get()
                    on:click=move |_| ctx.change_week(false)
                >
                    "이번 주"
                </button>
                <button
                    class=week_class(true)
                    disabled=move || store.is_week_change_loading().get()
                    on:click=move |_| ctx.change_week(true)
                >
                    "다음 주"
                </button>
            </div>
            <button class="settings-btn" on:click=move |_| ctx.set_show_config(true)>
                "설정"
            </button>
        </header>
    }
}
