//! Login Page

use leptos::prelude::*;

use crate::components::{AuthForm, AuthMode};
use crate::context::use_app_context;
use crate::routes::Route;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="page-center">
            <div class="auth-stack">
                <AuthForm mode=AuthMode::Login />
                <p class="auth-switch">
                    "Don't have an account? "
                    <a href="#/signup" on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(Route::Signup);
                    }>"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
