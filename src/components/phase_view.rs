//! Phase View Component
//!
//! Read-only roadmap page for a single phase.

use leptos::prelude::*;

use crate::roadmap::Phase;

#[component]
pub fn PhaseView(phase: &'static Phase) -> impl IntoView {
    let details = phase.details();
    let done = phase.done_count();
    let total = phase.tasks.len();
    let complete = phase.is_complete();

    view! {
        <div class="phase-view">
            <div class="phase-header">
                <div class="eyebrow">{format!("{} - {}", phase.label, phase.subtitle)}</div>
                <h1 class="shimmer">{phase.subtitle}</h1>
                <div class="badge-row">
                    <span class=if complete { "badge done" } else { "badge" }>
                        {if complete { "Completed" } else { "In Progress" }}
                    </span>
                    <span class="badge">{format!("{}/{} tasks", done, total)}</span>
                </div>
            </div>

            <section class="glass card">
                <p class="section-label">"Overview"</p>
                <p class="phase-description">{details.description}</p>
            </section>

            <section class="glass card">
                <p class="section-label">"Tech Stack"</p>
                <div class="tech-list">
                    {details.tech.iter().map(|tech| view! { <span class="tech-badge">{*tech}</span> }).collect_view()}
                </div>
            </section>

            <section class="glass card">
                <p class="section-label">"Deliverables"</p>
                <div class="deliverables">
                    {phase.tasks.iter().map(|task| view! {
                        <div class=if task.done { "deliverable done" } else { "deliverable" }>
                            <div class="deliverable-check">{task.done.then_some("✓")}</div>
                            <span>{task.title}</span>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <section class="glass card">
                <p class="section-label">"Features"</p>
                <div class="features">
                    {details.features.iter().map(|feature| view! {
                        <div class="feature">
                            <span class="feature-dot">"●"</span>
                            <span>{*feature}</span>
                        </div>
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}
