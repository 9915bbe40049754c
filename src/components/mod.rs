//! UI Components
//!
//! Reusable Leptos components.

mod auth_form;
mod add_task_form;
mod task_item;
mod task_list;
mod edit_task_modal;
mod delete_confirm_button;
mod error_banner;
mod sidebar;
mod phase_view;

pub use auth_form::{AuthForm, AuthMode};
pub use add_task_form::AddTaskForm;
pub use task_item::TaskItem;
pub use task_list::TaskList;
pub use edit_task_modal::EditTaskModal;
pub use delete_confirm_button::DeleteConfirmButton;
pub use error_banner::ErrorBanner;
pub use sidebar::Sidebar;
pub use phase_view::PhaseView;
