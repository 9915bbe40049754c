//! Task Item Component
//!
//! A single task row: checkbox, title, description, edit and delete.

use leptos::prelude::*;

use crate::board::Mutation;
use crate::components::DeleteConfirmButton;
use crate::context::use_board_context;
use crate::models::Task;
use crate::store::BoardStateStoreFields;

#[component]
pub fn TaskItem(task: Task) -> impl IntoView {
    let ctx = use_board_context();
    let store = ctx.store;

    let id = task.id;
    let completed = task.completed;
    let title = task.title.clone();
    let description = task.description.clone();
    let created = task.created_at.format("%b %-d, %Y").to_string();

    let toggle_ctx = ctx.clone();
    let delete_ctx = ctx.clone();
    let on_delete = Callback::new(move |_: ()| delete_ctx.dispatch(Mutation::Delete(id)));

    view! {
        <div class=if completed { "task-item glass completed" } else { "task-item glass" }>
            <input
                type="checkbox"
                class="task-check"
                prop:checked=completed
                on:click=move |ev| {
                    // the box flips only when the refetched row replaces this one
                    ev.prevent_default();
                    toggle_ctx.dispatch(Mutation::Toggle(id));
                }
            />

            <div class="task-body">
                <p class="task-title">{title}</p>
                {(!description.is_empty()).then(|| view! {
                    <p class="task-description">{description.clone()}</p>
                })}
                <p class="task-date">{created}</p>
            </div>

            <div class="task-actions">
                <button
                    class="task-btn edit"
                    title="Edit"
                    on:click=move |_| store.editing().set(Some(task.clone()))
                >
                    "✎"
                </button>
                <DeleteConfirmButton on_confirm=on_delete />
            </div>
        </div>
    }
}
