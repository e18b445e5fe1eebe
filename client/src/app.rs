//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{index::IndexPage, not_found::NotFoundPage, story::StoryPage};
use crate::state::auth::SessionState;
use crate::util::dark_mode::{self, Theme};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and theme contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::mock_artist());
    let theme = RwSignal::new(Theme::default());
    provide_context(session);
    provide_context(theme);

    // Pick up the stored theme once the app is running in the browser.
    Effect::new(move || {
        let stored = dark_mode::read_preference();
        dark_mode::apply(stored);
        theme.set(stored);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/kala-connect.css"/>
        <Title text="Kala Connect"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=IndexPage/>
                <Route path=(StaticSegment("story"), ParamSegment("story_id")) view=StoryPage/>
            </Routes>
        </Router>
    }
}
