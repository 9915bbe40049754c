//! Task Board Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity on the tasks page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Task;
use crate::roadmap::TASK_BOARD_PHASE;

/// State of the tasks page, created on mount and dropped on navigation
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Last fetched list; replaced wholesale on every refetch
    pub tasks: Vec<Task>,
    /// Transient error banner
    pub error: Option<String>,
    /// Bumped for every banner shown, so a stale timer can tell it was replaced
    pub error_seq: u64,
    /// Task open in the edit modal
    pub editing: Option<Task>,
    /// Roadmap phase selected in the sidebar
    pub active_phase: String,
    pub sidebar_collapsed: bool,
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            active_phase: TASK_BOARD_PHASE.to_string(),
            ..Default::default()
        }
    }

    /// Show `message`, returning the id of this banner
    pub fn raise_error(&mut self, message: String) -> u64 {
        self.error_seq += 1;
        self.error = Some(message);
        self.error_seq
    }

    /// Clear banner `seq` if no newer one replaced it
    pub fn dismiss_error(&mut self, seq: u64) {
        if self.error_seq == seq {
            self.error = None;
        }
    }
}

pub type BoardStore = Store<BoardState>;

pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the list with a fresh fetch result
pub fn store_set_tasks(store: &BoardStore, tasks: Vec<Task>) {
    log::debug!("applying {} tasks", tasks.len());
    store.tasks().set(tasks);
}

/// Show a transient error; it clears itself unless replaced meanwhile
pub fn store_show_error(store: &BoardStore, message: String) {
    let Some(seq) = store.try_update(|state| state.raise_error(message)) else {
        return;
    };
    let store = *store;
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(ERROR_BANNER_MS).await;
        // page may be gone by now
        let _ = store.try_update(|state| state.dismiss_error(seq));
    });
}

/// How long an error banner stays up
const ERROR_BANNER_MS: u32 = 4_000;
