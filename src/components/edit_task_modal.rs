//! Edit Task Modal Component
//!
//! Overlay for changing a task's title and description. Clicking the
//! backdrop closes it without saving.

use leptos::prelude::*;

use crate::board::{Mutation, TaskDraft};
use crate::context::use_board_context;
use crate::models::Task;
use crate::store::BoardStateStoreFields;

#[component]
pub fn EditTaskModal(task: Task) -> impl IntoView {
    let ctx = use_board_context();
    let store = ctx.store;

    let id = task.id;
    let (title, set_title) = signal(task.title.clone());
    let (description, set_description) = signal(task.description.clone());
    let (pending, set_pending) = signal(false);

    let close = move || store.editing().set(None);

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() { return; }
        let Some(draft) = TaskDraft::new(&title.get_untracked(), &description.get_untracked()) else {
            return;
        };

        set_pending.set(true);
        let ctx = ctx.clone();
        let scope = ctx.scope.clone();
        scope.spawn(async move {
            let saved = ctx.apply(Mutation::Update(id, draft)).await;
            set_pending.set(false);
            if saved {
                close();
            }
        });
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| close()>
            <div class="modal glass" on:click=|ev| ev.stop_propagation()>
                <h2>"Edit Task"</h2>
                <form on:submit=save>
                    <div class="field">
                        <label>"Title"</label>
                        <input
                            type="text"
                            required
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label>"Description"</label>
                        <input
                            type="text"
                            placeholder="Description"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="ghost-btn" on:click=move |_| close()>"Cancel"</button>
                        <button type="submit" class="primary-btn" disabled=move || pending.get()>
                            {move || if pending.get() { "..." } else { "Save Changes" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
