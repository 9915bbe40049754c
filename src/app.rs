//! Todo Frontend App
//!
//! Root component: wires services into context and switches pages on the
//! current route.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{HomePage, LoginPage, SignupPage, TasksPage};
use crate::routes::Route;
use crate::session::SessionStore;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let (route, set_route) = signal(Route::current());

    let api = ApiClient::with_reqwest(config.api_url.clone());
    let ctx = AppContext::new(api, SessionStore::local(), (route, set_route));
    provide_context(ctx.clone());

    // Back/forward and hand-edited URLs
    let listener_ctx = ctx.clone();
    let _ = window_event_listener(leptos::ev::hashchange, move |_| listener_ctx.follow_location());

    view! {
        <div class="app-root">
            {move || match route.get() {
                Route::Home => view! { <HomePage /> }.into_any(),
                Route::Login => view! { <LoginPage /> }.into_any(),
                Route::Signup => view! { <SignupPage /> }.into_any(),
                Route::Tasks => view! { <TasksPage /> }.into_any(),
            }}
        </div>
    }
}
