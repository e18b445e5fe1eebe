//! Story article page at `/story/:story_id`.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::navigation::Navigation;
use crate::net::stories::{Story, find_story};
use crate::util::markdown::render_html;

#[component]
pub fn StoryPage() -> impl IntoView {
    let params = use_params_map();
    let story = move || {
        let id = params.with(|p| p.get("story_id").unwrap_or_default());
        find_story(&id).copied()
    };

    view! {
        <div class="page">
            <Navigation/>
            {move || match story() {
                Ok(story) => view! { <StoryArticle story/> }.into_any(),
                Err(e) => {
                    leptos::logging::warn!("{e}");
                    view! { <StoryNotFound/> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn StoryArticle(story: Story) -> impl IntoView {
    let body = render_html(story.body);

    view! {
        <Title text=format!("{} | Kala Connect", story.title)/>
        <article class="story">
            <a href="/" class="btn btn--ghost story__back">"\u{2190} Back"</a>
            <span class="badge badge--primary">{story.category}</span>
            <h1 class="story__title">{story.title}</h1>
            <p class="story__description muted">{story.description}</p>
            <div class="story__meta muted">
                <span>{story.author}</span>
                <span>{story.date}</span>
                <span>{story.read_time}</span>
            </div>
            <img class="story__image" src={story.image} alt={story.title}/>
            <div class="story__body" inner_html=body></div>
        </article>
    }
}

#[component]
fn StoryNotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Story Not Found"</h1>
            <p class="muted">"The story you're looking for doesn't exist."</p>
            <a href="/" class="btn btn--primary">"Return Home"</a>
        </div>
    }
}
