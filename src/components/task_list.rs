//! Task List Component

use leptos::prelude::*;

use chrono::NaiveDateTime;

use crate::components::TaskItem;
use crate::context::use_board_context;
use crate::models::Task;
use crate::store::BoardStateStoreFields;

/// Identity of a rendered row; any displayed field changing means a new row
pub fn row_key(task: &Task) -> (i64, bool, String, String, NaiveDateTime) {
    (task.id, task.completed, task.title.clone(), task.description.clone(), task.updated_at)
}

/// Renders the last fetched list. Rows are keyed on every displayed field so
/// a refetch that changed a task re-renders its row.
#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_board_context().store;

    view! {
        <Show
            when=move || !store.tasks().read().is_empty()
            fallback=|| view! {
                <div class="task-empty glass">
                    <p class="task-empty-title">"No tasks yet"</p>
                    <p class="task-empty-hint">"Add your first task above"</p>
                </div>
            }
        >
            <div class="section-divider">
                <p>"All Tasks"</p>
                <div class="divider-line" />
            </div>
            <div class="task-list">
                <For
                    each=move || store.tasks().get()
                    key=row_key
                    children=move |task| view! { <TaskItem task=task /> }
                />
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::task_list_json;

    fn tasks(rows: &[(i64, &str, bool)]) -> Vec<Task> {
        serde_json::from_str(&task_list_json(rows, 1)).unwrap()
    }

    #[test]
    fn test_refetched_toggle_replaces_row() {
        let before = tasks(&[(7, "Buy milk", false)]);
        let after = tasks(&[(7, "Buy milk", true)]);
        assert_ne!(row_key(&before[0]), row_key(&after[0]));
    }

    #[test]
    fn test_unchanged_task_keeps_row() {
        let before = tasks(&[(7, "Buy milk", false), (8, "Call mom", true)]);
        let again = tasks(&[(7, "Buy milk", false), (8, "Call mom", true)]);
        let keys = |list: &[Task]| list.iter().map(row_key).collect::<Vec<_>>();
        assert_eq!(keys(&before), keys(&again));
    }
}
