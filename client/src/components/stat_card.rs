//! Small headline-number card used by the dashboard overview and panels.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into, optional)] caption: Option<Signal<String>>,
    #[prop(into, optional)] icon: Option<String>,
) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <div class="stat-card__body">
                <p class="stat-card__label muted">{label}</p>
                <p class="stat-card__value">{move || value.get()}</p>
                {caption.map(|c| view! { <p class="stat-card__caption muted">{move || c.get()}</p> })}
            </div>
            {icon.map(|i| view! { <span class="stat-card__icon">{i}</span> })}
        </div>
    }
}
