//! Timetable Grid Component
//!
//! Weekday header plus one row per period, lunch spliced in by the core layout.

use leptos::prelude::*;
use timetable_core::{build_period_rows, PeriodRow, WEEKDAYS};

use crate::components::TimetableCell;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TimetableGrid() -> impl IntoView {
    let store = use_app_store();

    let rows = move || {
        let Some(data) = store.timetable().get() else {
            return Vec::new();
        };
        let lunch_after = store.config().get().lunch_after;
        match build_period_rows(&data, lunch_after) {
            Ok(rows) => rows,
            Err(e) => {
                web_sys::console::log_1(&format!("[GRID] {}", e).into());
                // Show the periods without a lunch row.
                let mut rows = build_period_rows(&data, data.period_count() as u32).unwrap_or_default();
                rows.retain(|row| !row.is_lunch());
                rows
            }
        }
    };

    view! {
        <div class="timetable-grid">
            <div class="grid-row grid-head">
                <div class="period-head">"교시"</div>
                {WEEKDAYS.iter().map(|day| view! { <div class="day-head">{*day}</div> }).collect_view()}
            </div>
            {move || rows().into_iter().map(|row| match row {
                PeriodRow::Lunch => view! {
                    <div class="grid-row lunch-row">
                        <div class="period-head">"점심"</div>
                        <div class="lunch-cell">"점심시간"</div>
                    </div>
                }.into_any(),
                PeriodRow::Class { slot, cells, .. } => view! {
                    <div class="grid-row">
                        <div class="period-head">
                            <span>{format!("{}교시", slot.label)}</span>
                            {slot.time.map(|time| view! { <span class="period-time">{format!("({})", time)}</span> })}
                        </div>
                        {cells.into_iter().map(|cell| view! { <TimetableCell cell=cell /> }).collect_view()}
                    </div>
                }.into_any(),
            }).collect_view()}
        </div>
    }
}
