//! Sidebar Component
//!
//! Collapsible list of roadmap phases with progress rings.

use leptos::prelude::*;

use crate::roadmap::{Phase, PHASES};
use crate::store::{use_board_store, BoardStateStoreFields};

/// Circumference of the progress ring (r = 11)
const RING_LENGTH: f64 = 69.1;

fn ring_dasharray(phase: &Phase) -> String {
    format!("{:.1} {}", phase.progress() * RING_LENGTH, RING_LENGTH)
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_board_store();
    let collapsed = move || store.sidebar_collapsed().get();

    view! {
        <button
            class=move || if collapsed() { "sidebar-toggle collapsed" } else { "sidebar-toggle" }
            on:click=move |_| store.sidebar_collapsed().update(|c| *c = !*c)
        >
            {move || if collapsed() { ">" } else { "<" }}
        </button>

        <Show when=move || !collapsed()>
            <aside class="sidebar">
                <div class="sidebar-logo">
                    <div class="logo-mark">"✦"</div>
                    <h2>"Evolution of"</h2>
                    <h1 class="shimmer">"Todo App"</h1>
                </div>

                <div class="phase-list">
                    <p class="section-label">"Project Phases"</p>
                    {PHASES.iter().map(|phase| {
                        let id = phase.id;
                        let is_active = move || store.active_phase().read().as_str() == id;
                        let complete = phase.is_complete();
                        let class = move || {
                            let mut c = String::from("phase-btn");
                            if is_active() { c.push_str(" active"); }
                            if complete { c.push_str(" done"); }
                            c
                        };

                        view! {
                            <button class=class on:click=move |_| store.active_phase().set(id.to_string())>
                                <div class="phase-icon">{phase.icon}</div>
                                <div class="phase-text">
                                    <p class="phase-label">{phase.label}</p>
                                    <p class="phase-subtitle">{phase.subtitle}</p>
                                </div>
                                <svg class="phase-ring" width="28" height="28" viewBox="0 0 28 28">
                                    <circle cx="14" cy="14" r="11" fill="none" class="ring-track" stroke-width="2" />
                                    <circle
                                        cx="14" cy="14" r="11" fill="none"
                                        class="ring-progress"
                                        stroke-width="2"
                                        stroke-dasharray=ring_dasharray(phase)
                                        stroke-linecap="round"
                                        transform="rotate(-90 14 14)"
                                    />
                                </svg>
                            </button>
                        }
                    }).collect_view()}
                </div>

                <div class="sidebar-footer">
                    <p>"Hackathon Project 2026"</p>
                </div>
            </aside>
        </Show>
    }
}
