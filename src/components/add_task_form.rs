//! Add Task Form Component
//!
//! Title + optional description. Blank titles never leave the form.

use leptos::prelude::*;

use crate::board::{Mutation, TaskDraft};
use crate::context::use_board_context;

#[component]
pub fn AddTaskForm() -> impl IntoView {
    let ctx = use_board_context();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (pending, set_pending) = signal(false);

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() { return; }
        let Some(draft) = TaskDraft::new(&title.get_untracked(), &description.get_untracked()) else {
            return;
        };

        set_pending.set(true);
        let ctx = ctx.clone();
        let scope = ctx.scope.clone();
        scope.spawn(async move {
            if ctx.apply(Mutation::Create(draft)).await {
                set_title.set(String::new());
                set_description.set(String::new());
            }
            set_pending.set(false);
        });
    };

    view! {
        <form class="add-task-form glass" on:submit=add_task>
            <div class="add-task-row">
                <div class="field">
                    <label>"Task"</label>
                    <input
                        type="text"
                        placeholder="What needs to be done?"
                        required
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label>"Description"</label>
                    <input
                        type="text"
                        placeholder="Optional details..."
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="primary-btn" disabled=move || pending.get()>
                    {move || if pending.get() { "..." } else { "Add Task" }}
                </button>
            </div>
        </form>
    }
}
