//! Error Banner Component

use leptos::prelude::*;

/// Inline error message; renders nothing while `message` is `None`
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || message.get().map(|text| view! { <div class="error-banner" role="alert">{text}</div> })
}
