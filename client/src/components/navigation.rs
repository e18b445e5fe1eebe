//! Sticky site header with brand, notifications, theme toggle, and profile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session flags come from the `SessionState` context provided by `App`; the
//! header only owns its menu toggles.

use leptos::prelude::*;

use crate::state::auth::SessionState;
use crate::state::ui::NavState;
use crate::util::dark_mode::{self, Theme};

/// Site header.
///
/// `on_artist_dashboard` runs when an artist picks "Artist Dashboard" from the
/// profile menu; pages without a dashboard leave it unset.
#[component]
pub fn Navigation(#[prop(optional)] on_artist_dashboard: Option<Callback<()>>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let theme = expect_context::<RwSignal<Theme>>();
    let nav = RwSignal::new(NavState::default());

    let user_name = move || session.get().user.map(|u| u.name).unwrap_or_default();
    let user_email = move || session.get().user.map(|u| u.email).unwrap_or_default();

    let on_dashboard = move |_| {
        nav.update(NavState::close_all);
        if let Some(cb) = on_artist_dashboard {
            cb.run(());
        }
    };

    let on_toggle_theme = move |_| {
        let next = dark_mode::toggle(theme.get_untracked());
        theme.set(next);
    };

    view! {
        <nav class="nav">
            <div class="nav__inner">
                <a href="/" class="nav__brand">
                    <span class="nav__logo">"K"</span>
                    <span class="nav__title">"Kala Connect"</span>
                </a>

                <span class="nav__spacer"></span>

                <div class="nav__actions" class:nav__actions--open=move || nav.get().menu_open>
                    <button class="btn btn--ghost nav__theme" on:click=on_toggle_theme title="Toggle dark mode">
                        {move || theme.get().toggle_glyph()}
                    </button>

                    <Show
                        when=move || session.get().logged_in()
                        fallback=|| {
                            view! {
                                <div class="nav__auth">
                                    <button class="btn btn--outline">"Log in"</button>
                                    <button class="btn btn--primary">"Sign up"</button>
                                </div>
                            }
                        }
                    >
                        <button class="btn btn--ghost nav__bell" title="Notifications">
                            "\u{1f514}"
                            <span class="nav__bell-dot"></span>
                        </button>

                        <div class="nav__profile">
                            <button
                                class="avatar nav__avatar"
                                title="Profile"
                                on:click=move |_| nav.update(NavState::toggle_profile)
                            >
                                {move || session.get().initials()}
                            </button>
                            <Show when=move || nav.get().profile_open>
                                <div class="menu">
                                    <div class="menu__label">
                                        <p class="menu__name">{user_name}</p>
                                        <p class="menu__email muted">{user_email}</p>
                                    </div>
                                    <hr class="menu__separator"/>
                                    <button class="menu__item">"My Profile"</button>
                                    <button class="menu__item">"Settings"</button>
                                    <button class="menu__item">"Help & Support"</button>
                                    <hr class="menu__separator"/>
                                    <Show when=move || session.get().can_open_dashboard()>
                                        <button class="menu__item menu__item--accent" on:click=on_dashboard>
                                            "Artist Dashboard"
                                        </button>
                                        <hr class="menu__separator"/>
                                    </Show>
                                    <button class="menu__item">"Log out"</button>
                                </div>
                            </Show>
                        </div>
                    </Show>
                </div>

                <button
                    class="btn btn--ghost nav__menu-toggle"
                    title="Menu"
                    on:click=move |_| nav.update(NavState::toggle_menu)
                >
                    {move || if nav.get().menu_open { "\u{2715}" } else { "\u{2630}" }}
                </button>
            </div>
        </nav>
    }
}
