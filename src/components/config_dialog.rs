//! Config Dialog Component
//!
//! Edits a draft of the class config. The draft is only staged in the core
//! store on save; the store closes the dialog once the service accepts it.

use leptos::prelude::*;
use timetable_core::ClassConfig;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

const GRADES: [&str; 3] = ["1", "2", "3"];

#[component]
pub fn ConfigDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (draft, set_draft) = signal(ClassConfig::default());

    // Reopening always starts from the staged draft or the active config.
    Effect::new(move |_| {
        if store.show_config().get() {
            let start = store
                .temp_config()
                .get_untracked()
                .unwrap_or_else(|| store.config().get_untracked());
            set_draft.set(start);
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.save_config(draft.get());
    };

    let text_field = move |label: &'static str, get: fn(&ClassConfig) -> String, set: fn(&mut ClassConfig, String)| {
        view! {
            <label class="config-field">
                <span>{label}</span>
                <input
                    type="text"
                    prop:value=move || draft.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_draft.update(|d| set(d, value));
                    }
                />
            </label>
        }
    };

    view! {
        <Show when=move || store.show_config().get()>
            <div class="dialog-backdrop">
                <form class="config-dialog" on:submit=on_submit>
                    <h2>"설정"</h2>
                    <p class="dialog-description">"학급 정보 등을 설정해 주세요."</p>

                    {text_field("학교", |c| c.school.clone(), |c, v| c.school = v)}
                    {text_field("학교 코드", |c| c.school_code.clone(), |c, v| c.school_code = v)}

                    <label class="config-field">
                        <span>"학년"</span>
                        <select
                            prop:value=move || draft.with(|d| d.grade.clone())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                set_draft.update(|d| d.grade = value);
                            }
                        >
                            {GRADES.iter().map(|g| view! { <option value=*g>{format!("{}학년", g)}</option> }).collect_view()}
                        </select>
                    </label>

                    {text_field("반", |c| c.class_no.clone(), |c, v| c.class_no = v)}

                    <label class="config-field">
                        <span>"점심시간 (몇 교시 후)"</span>
                        <input
                            type="number"
                            min="0"
                            prop:value=move || draft.with(|d| d.lunch_after.to_string())
                            on:input=move |ev| {
                                if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                                    set_draft.update(|d| d.lunch_after = value);
                                }
                            }
                        />
                    </label>

                    {move || store.error().get().map(|e| view! { <p class="dialog-error">{e}</p> })}

                    <div class="dialog-actions">
                        <button type="button" on:click=move |_| ctx.set_show_config(false)>"취소"</button>
                        <button type="submit" disabled=move || store.is_loading().get()>"저장"</button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
