//! Tasks Page
//!
//! The authenticated task board: sidebar of roadmap phases, header with
//! counts and log out, and either the live task list or a phase view.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::{check_session, counts, Gate, TaskBoard};
use crate::components::{AddTaskForm, EditTaskModal, ErrorBanner, PhaseView, Sidebar, TaskList};
use crate::context::{use_app_context, BoardContext};
use crate::roadmap::{self, TASK_BOARD_PHASE};
use crate::scope::ViewScope;
use crate::session::Session;
use crate::store::{BoardState, BoardStateStoreFields};

#[component]
pub fn TasksPage() -> impl IntoView {
    let ctx = use_app_context();

    match check_session(&ctx.sessions) {
        Gate::Redirect(route) => {
            log::info!("no session, redirecting to {}", route.path());
            Effect::new(move |_| ctx.redirect(route));
            view! {
                <div class="page-center">
                    <div class="loader-ring" />
                </div>
            }
            .into_any()
        }
        Gate::Proceed(session) => view! { <Board session=session /> }.into_any(),
    }
}

#[component]
fn Board(session: Session) -> impl IntoView {
    let app = use_app_context();
    let store = Store::new(BoardState::new());
    let board = BoardContext {
        board: TaskBoard::new(app.api.clone(), session),
        store,
        scope: ViewScope::for_current_view(),
    };
    provide_context(store);
    provide_context(board.clone());

    log::info!("loading tasks for user {}", board.board.session().user_id);
    let loader = board.clone();
    board.scope.spawn(async move { loader.refresh().await });

    let on_board = move || store.active_phase().read().as_str() == TASK_BOARD_PHASE;
    let phase = move || roadmap::find(store.active_phase().read().as_str());
    let collapsed = move || store.sidebar_collapsed().get();

    let scope = board.scope.clone();
    let logout = move |_| {
        scope.cancel();
        app.logout();
    };

    view! {
        <div class="board-layout">
            <Sidebar />

            <div class=move || if collapsed() { "board-main" } else { "board-main with-sidebar" }>
                <header class="board-header">
                    <div class="board-header-inner">
                        <div>
                            <div class="eyebrow">{move || phase().label}</div>
                            <h1 class="shimmer">
                                {move || if on_board() { "My Tasks" } else { phase().subtitle }}
                            </h1>
                            <Show when=move || on_board() && !store.tasks().read().is_empty()>
                                {move || {
                                    let (pending, done) = counts(&store.tasks().read());
                                    view! {
                                        <div class="badge-row">
                                            <span class="badge">{format!("{} pending", pending)}</span>
                                            <span class={if done > 0 { "badge done" } else { "badge" }}>
                                                {format!("{} done", done)}
                                            </span>
                                        </div>
                                    }
                                }}
                            </Show>
                        </div>
                        <button class="ghost-btn" on:click=logout>"Log out"</button>
                    </div>
                </header>

                <main class="board-content">
                    {move || if on_board() {
                        view! {
                            <div class="board-stack">
                                <ErrorBanner message=Signal::derive(move || store.error().get()) />
                                <AddTaskForm />
                                <TaskList />
                                {move || store.editing().get().map(|task| view! { <EditTaskModal task=task /> })}
                            </div>
                        }.into_any()
                    } else {
                        view! { <PhaseView phase=phase() /> }.into_any()
                    }}
                </main>
            </div>
        </div>
    }
}
