//! Application Context
//!
//! Shared services and navigation provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::board::{Mutation, TaskBoard, LOAD_FAILED};
use crate::routes::Route;
use crate::scope::ViewScope;
use crate::session::SessionStore;
use crate::store::{store_set_tasks, store_show_error, BoardStore};

/// App-wide services provided via context
#[derive(Clone)]
pub struct AppContext {
    pub api: ApiClient,
    pub sessions: SessionStore,
    /// Current page - read
    pub route: ReadSignal<Route>,
    /// Current page - write
    set_route: WriteSignal<Route>,
}

impl AppContext {
    pub fn new(api: ApiClient, sessions: SessionStore, route: (ReadSignal<Route>, WriteSignal<Route>)) -> Self {
        Self {
            api,
            sessions,
            route: route.0,
            set_route: route.1,
        }
    }

    /// Navigate, adding a history entry
    pub fn navigate(&self, route: Route) {
        log::debug!("navigate to {}", route.path());
        route.sync_location(false);
        self.set_route.set(route);
    }

    /// Redirect, replacing the current history entry
    pub fn redirect(&self, route: Route) {
        log::debug!("redirect to {}", route.path());
        route.sync_location(true);
        self.set_route.set(route);
    }

    /// Follow the address bar after back/forward
    pub fn follow_location(&self) {
        let route = Route::current();
        if self.route.get_untracked() != route {
            self.set_route.set(route);
        }
    }

    /// Clear the session and return to the login page
    pub fn logout(&self) {
        self.sessions.clear();
        self.navigate(Route::Login);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

/// The tasks page's board, store and view scope, provided to its children
#[derive(Clone)]
pub struct BoardContext {
    pub board: TaskBoard,
    pub store: BoardStore,
    pub scope: ViewScope,
}

impl BoardContext {
    /// Refetch the list into the store
    pub async fn refresh(&self) {
        match self.board.fetch().await {
            Ok(tasks) => store_set_tasks(&self.store, tasks),
            Err(e) => {
                log::warn!("loading tasks failed: {}", e);
                store_show_error(&self.store, LOAD_FAILED.to_string());
            }
        }
    }

    /// Mutate, then resynchronize. Returns whether the mutation went through.
    pub async fn apply(&self, mutation: Mutation) -> bool {
        match self.board.apply(mutation).await {
            Ok(tasks) => {
                store_set_tasks(&self.store, tasks);
                true
            }
            Err(e) => {
                match e.status() {
                    Some(status) => log::warn!("task change rejected with {}: {}", status, e),
                    None => log::error!("task change failed: {}", e),
                }
                store_show_error(&self.store, e.to_string());
                false
            }
        }
    }

    /// Fire-and-forget mutation, scoped to the page
    pub fn dispatch(&self, mutation: Mutation) {
        let ctx = self.clone();
        self.scope.spawn(async move {
            ctx.apply(mutation).await;
        });
    }
}

pub fn use_board_context() -> BoardContext {
    use_context::<BoardContext>().expect("BoardContext should be provided")
}
