//! Timetable Cell Component
//!
//! One subject slot. Clicking a subject opens an inline teacher-note editor.

use leptos::prelude::*;
use timetable_core::PeriodCell;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

/// Notes longer than this are shortened in the grid
const NOTE_PREVIEW_CHARS: usize = 4;

fn preview(note: &str) -> String {
    if note.chars().count() > NOTE_PREVIEW_CHARS {
        format!("{}...", note.chars().take(NOTE_PREVIEW_CHARS).collect::<String>())
    } else {
        note.to_string()
    }
}

#[component]
pub fn TimetableCell(cell: PeriodCell) -> impl IntoView {
    if cell.is_empty() {
        return view! { <div class="cell empty"></div> }.into_any();
    }

    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(String::new());

    let subject = StoredValue::new(cell.subject.clone());
    let note = move || subject.with_value(|s| store.teacher_notes().get().get(s).cloned());

    let open_editor = move |_| {
        set_draft.set(note().unwrap_or_default());
        set_editing.set(true);
    };

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        subject.with_value(|s| ctx.save_teacher_info(s, &draft.get()));
        set_editing.set(false);
    };

    let class = if cell.replaced { "cell replaced" } else { "cell" };
    let original = cell.original_subject.clone();

    view! {
        <div class=class>
            {move || if editing.get() {
                view! {
                    <form class="note-editor" on:submit=on_save>
                        <input
                            type="text"
                            placeholder="선생님 이름"
                            prop:value=move || draft.get()
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                        />
                        <button type="submit">"저장"</button>
                        <button type="button" on:click=move |_| set_editing.set(false)>"취소"</button>
                    </form>
                }.into_any()
            } else {
                view! {
                    <div class="cell-body" on:click=open_editor>
                        <span class="subject">{subject.get_value()}</span>
                        {original.clone().map(|o| view! { <span class="original">{format!("({} 대체)", o)}</span> })}
                        {move || note().map(|n| view! { <span class="note">{preview(&n)}</span> })}
                    </div>
                }.into_any()
            }}
        </div>
    }
    .into_any()
}
