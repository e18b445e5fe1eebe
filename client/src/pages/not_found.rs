//! Fallback page for unknown routes.

use leptos::prelude::*;

use crate::components::navigation::Navigation;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page">
            <Navigation/>
            <div class="not-found">
                <h1>"Page Not Found"</h1>
                <p class="muted">"There is nothing at this address."</p>
                <a href="/" class="btn btn--primary">"Return Home"</a>
            </div>
        </div>
    }
}
