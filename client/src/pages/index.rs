//! Root route: the public landing page or the artist dashboard.
//!
//! The switch lives in page state rather than the URL; reloading always lands
//! on the platform view.

use leptos::prelude::*;

use crate::components::artist_dashboard::ArtistDashboard;
use crate::components::navigation::Navigation;
use crate::net::stories::{all_stories, story_href};
use crate::state::ui::AppView;

#[component]
pub fn IndexPage() -> impl IntoView {
    let view_mode = RwSignal::new(AppView::default());

    let open_dashboard = Callback::new(move |()| view_mode.update(|v| *v = v.open_dashboard()));
    let back_to_platform = Callback::new(move |()| view_mode.update(|v| *v = v.back_to_platform()));

    view! {
        <div class="page">
            <Show
                when=move || view_mode.get() == AppView::Dashboard
                fallback=move || {
                    view! {
                        <Navigation on_artist_dashboard=open_dashboard/>
                        <Landing/>
                    }
                }
            >
                <ArtistDashboard on_back_to_main=back_to_platform/>
            </Show>
        </div>
    }
}

#[component]
fn Landing() -> impl IntoView {
    view! {
        <main class="landing">
            <section class="hero">
                <h1 class="hero__title">"Book the artists who make your moments"</h1>
                <p class="hero__subtitle muted">
                    "Photographers, musicians, painters, and performers, all in one place."
                </p>
                <div class="hero__actions">
                    <button class="btn btn--primary">"Find an Artist"</button>
                    <button class="btn btn--outline">"Join as Artist"</button>
                </div>
            </section>

            <section class="stories">
                <h2>"Stories"</h2>
                <div class="stories__grid">
                    {all_stories()
                        .iter()
                        .map(|story| {
                            view! {
                                <a class="card story-card" href={story_href(story.id)}>
                                    <img class="story-card__image" src={story.image} alt={story.title}/>
                                    <div class="story-card__body">
                                        <span class="badge badge--muted">{story.category}</span>
                                        <h3>{story.title}</h3>
                                        <p class="muted">{story.description}</p>
                                        <p class="muted story-card__meta">
                                            {format!("{} \u{b7} {}", story.date, story.read_time)}
                                        </p>
                                    </div>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </main>
    }
}
