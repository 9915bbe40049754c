//! Home Page
//!
//! Sends the visitor to the task board or the login page.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::routes::Route;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();

    Effect::new(move |_| {
        let target = if ctx.sessions.is_active() { Route::Tasks } else { Route::Login };
        ctx.redirect(target);
    });

    view! {
        <div class="page-center">
            <div class="loader-ring" />
        </div>
    }
}
