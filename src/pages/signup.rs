//! Signup Page

use leptos::prelude::*;

use crate::components::{AuthForm, AuthMode};
use crate::context::use_app_context;
use crate::routes::Route;

#[component]
pub fn SignupPage() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="page-center">
            <div class="auth-stack">
                <AuthForm mode=AuthMode::Signup />
                <p class="auth-switch">
                    "Already have an account? "
                    <a href="#/login" on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(Route::Login);
                    }>"Log in"</a>
                </p>
            </div>
        </div>
    }
}
