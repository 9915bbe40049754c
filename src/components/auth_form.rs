//! Auth Form Component
//!
//! Shared login/signup card. On success the session is saved and the app
//! moves on to the task board.

use leptos::prelude::*;

use crate::api::{self, ApiError};
use crate::context::{use_app_context, AppContext};
use crate::routes::Route;
use crate::scope::ViewScope;
use super::ErrorBanner;

/// Which account flow the form drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    fn heading(&self) -> &'static str {
        match self {
            AuthMode::Login => "Welcome Back",
            AuthMode::Signup => "Create Account",
        }
    }

    fn tagline(&self) -> &'static str {
        match self {
            AuthMode::Login => "Sign in to manage your tasks",
            AuthMode::Signup => "Get started with your todo journey",
        }
    }

    fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Sign In",
            AuthMode::Signup => "Sign Up",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            AuthMode::Login => "→",
            AuthMode::Signup => "✦",
        }
    }
}

/// Minimum password length accepted by the form
pub const MIN_PASSWORD_LEN: usize = 6;

async fn authenticate(ctx: &AppContext, mode: AuthMode, email: &str, password: &str) -> Result<(), ApiError> {
    let auth = match mode {
        AuthMode::Login => api::login(&ctx.api, email, password).await?,
        AuthMode::Signup => api::signup(&ctx.api, email, password).await?,
    };
    ctx.sessions.save(&auth.access_token, auth.user_id);
    ctx.navigate(Route::Tasks);
    Ok(())
}

/// User-facing text for a failed attempt
fn failure_message(err: &ApiError) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        "Something went wrong".to_string()
    } else {
        message
    }
}

#[component]
pub fn AuthForm(mode: AuthMode) -> impl IntoView {
    let ctx = use_app_context();
    let scope = ViewScope::for_current_view();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (pending, set_pending) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() { return; }
        set_error.set(None);
        set_pending.set(true);

        let ctx = ctx.clone();
        let email = email.get_untracked();
        let password = password.get_untracked();
        scope.spawn(async move {
            if let Err(e) = authenticate(&ctx, mode, email.trim(), &password).await {
                set_error.set(Some(failure_message(&e)));
            }
            set_pending.set(false);
        });
    };

    view! {
        <div class="auth-card glass">
            <form on:submit=submit>
                <div class="auth-icon">{mode.icon()}</div>
                <h1 class="shimmer">{mode.heading()}</h1>
                <p class="auth-tagline">{mode.tagline()}</p>

                <ErrorBanner message=error />

                <input
                    type="email"
                    placeholder="Email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    required
                    minlength=MIN_PASSWORD_LEN.to_string()
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit" class="primary-btn wide" disabled=move || pending.get()>
                    {move || if pending.get() { "..." } else { mode.submit_label() }}
                </button>
            </form>
        </div>
    }
}
