//! Reviews & reputation panel: headline stats, review list with reply
//! composers, badges, rating distribution, and the review detail modal.

use leptos::logging::warn;
use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::net::types::Review;
use crate::state::reviews::{ReviewsState, stars};
use crate::util::format::initials;

#[component]
pub fn ReviewsReputation() -> impl IntoView {
    let reviews = expect_context::<RwSignal<ReviewsState>>();
    let notice = RwSignal::new(None::<String>);

    let on_reply = Callback::new(move |id: u32| {
        let result = reviews.try_update(|r| r.reply(id)).unwrap_or(Ok(()));
        match result {
            Ok(()) => notice.set(None),
            Err(e) => {
                warn!("reply to review {id} failed: {e}");
                notice.set(Some(e.to_string()));
            }
        }
    });
    let on_open = Callback::new(move |id: u32| {
        let result = reviews.try_update(|r| r.open_review(id)).unwrap_or(Ok(()));
        match result {
            Ok(()) => notice.set(None),
            Err(e) => {
                warn!("open review {id} failed: {e}");
                notice.set(Some(e.to_string()));
            }
        }
    });

    let average = Signal::derive(move || reviews.with(|r| format!("{:.1}", r.stats.average_rating)));
    let computed = Signal::derive(move || reviews.with(ReviewsState::computed_average_caption));
    let total = Signal::derive(move || reviews.with(|r| r.stats.total_reviews.to_string()));
    let response_rate = Signal::derive(move || reviews.with(|r| format!("{}%", r.stats.response_rate)));
    let repeat = Signal::derive(move || reviews.with(|r| format!("{}%", r.stats.repeat_clients)));

    let list = move || reviews.with(|r| r.reviews.clone());

    view! {
        <div class="reviews">
            <h2 class="panel__title">"Reviews & Reputation"</h2>

            <section class="reviews__stats">
                <StatCard label="Average Rating" value=average caption=computed icon="\u{2605}"/>
                <StatCard label="Total Reviews" value=total/>
                <StatCard label="Response Rate" value=response_rate caption="Within 24 hours"/>
                <StatCard label="Repeat Clients" value=repeat/>
            </section>

            <Show when=move || notice.get().is_some()>
                <div class="notice notice--error" role="alert">
                    <span>{move || notice.get().unwrap_or_default()}</span>
                    <button class="btn btn--ghost btn--sm" on:click=move |_| notice.set(None)>"\u{2715}"</button>
                </div>
            </Show>

            <div class="reviews__layout">
                <div class="reviews__list">
                    <div class="reviews__list-head">
                        <h3>"Recent Reviews"</h3>
                        <span class="muted">
                            {move || format!("{} awaiting reply", reviews.with(ReviewsState::unreplied_count))}
                        </span>
                    </div>
                    <For each=list key=|r| (r.id, r.replied) let:review>
                        <ReviewCard review reviews on_reply on_open/>
                    </For>
                </div>

                <aside class="reviews__side">
                    <div class="card">
                        <h3>"Reputation Badges"</h3>
                        <p class="muted">
                            {move || reviews.with(|r| format!("{} of {} earned", r.earned_badge_count(), r.badges.len()))}
                        </p>
                        <ul class="badges">
                            {move || {
                                reviews
                                    .get()
                                    .badges
                                    .into_iter()
                                    .map(|b| {
                                        view! {
                                            <li class="badges__item" class:badges__item--locked={!b.earned}>
                                                <span class="badges__icon">{b.icon}</span>
                                                <div>
                                                    <p class="badges__name">{b.name}</p>
                                                    <p class="muted">{b.description}</p>
                                                </div>
                                                {b.earned.then(|| view! { <span class="badge badge--success">"Earned"</span> })}
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </div>

                    <div class="card">
                        <h3>"Rating Distribution"</h3>
                        {move || {
                            reviews
                                .get()
                                .distribution
                                .into_iter()
                                .map(|share| {
                                    view! {
                                        <div class="distribution__row">
                                            <span class="distribution__label">{format!("{} \u{2605}", share.stars)}</span>
                                            <div class="progress">
                                                <div class="progress__bar" style={format!("width: {}%", share.percent)}></div>
                                            </div>
                                            <span class="distribution__pct muted">{format!("{}%", share.percent)}</span>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </aside>
            </div>

            <Show when=move || reviews.with(|r| r.selected_review().is_some())>
                <ReviewModal reviews/>
            </Show>
        </div>
    }
}

#[component]
fn StarRow(rating: u8) -> impl IntoView {
    view! {
        <span class="stars" title={format!("{rating} out of 5")}>
            {stars(rating)
                .into_iter()
                .map(|filled| view! { <span class="stars__star" class:stars__star--filled=filled>"\u{2605}"</span> })
                .collect_view()}
        </span>
    }
}

#[component]
fn ReviewCard(
    review: Review,
    reviews: RwSignal<ReviewsState>,
    on_reply: Callback<u32>,
    on_open: Callback<u32>,
) -> impl IntoView {
    let id = review.id;
    let replied = review.replied;

    view! {
        <div class="card review" data-review={id.to_string()}>
            <div class="review__head">
                <span class="avatar">{initials(&review.client)}</span>
                <div class="review__who">
                    <h4>{review.client.clone()}</h4>
                    <p class="muted">{format!("{} \u{b7} {}", review.event, review.date)}</p>
                </div>
                <StarRow rating={review.rating}/>
            </div>

            <p class="review__text">{review.text.clone()}</p>

            <div class="review__meta muted">
                <span>{format!("{} found this helpful", review.helpful)}</span>
                <button class="btn btn--ghost btn--sm" on:click=move |_| on_open.run(id)>"View"</button>
            </div>

            {review.reply.clone().map(|reply| view! {
                <div class="review__reply">
                    <p class="review__reply-label">"Your reply"</p>
                    <p>{reply}</p>
                </div>
            })}

            <Show when=move || !replied>
                <div class="review__composer">
                    <textarea
                        class="field__input"
                        rows="2"
                        placeholder="Write a reply..."
                        prop:value=move || reviews.with(|r| r.draft(id).to_owned())
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            reviews.update(|r| r.set_draft(id, text));
                        }
                    ></textarea>
                    <button
                        class="btn btn--primary btn--sm"
                        disabled=move || reviews.with(|r| r.draft(id).trim().is_empty())
                        on:click=move |_| on_reply.run(id)
                    >
                        "Reply"
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ReviewModal(reviews: RwSignal<ReviewsState>) -> impl IntoView {
    let close = move || reviews.update(ReviewsState::close_review);

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div
                class="dialog"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        close();
                    }
                }
                tabindex="0"
            >
                {move || {
                    reviews
                        .with(|r| r.selected_review().cloned())
                        .map(|review| {
                            view! {
                                <div class="dialog__head">
                                    <h2>{review.client.clone()}</h2>
                                    <StarRow rating={review.rating}/>
                                </div>
                                <p class="muted">{format!("{} \u{b7} {}", review.event, review.date)}</p>
                                <p class="dialog__message">{review.text.clone()}</p>
                                {review.reply.clone().map(|reply| view! {
                                    <h3>"Your Reply"</h3>
                                    <p class="dialog__message">{reply}</p>
                                })}
                            }
                        })
                }}
                <div class="dialog__actions">
                    <button class="btn btn--ghost" on:click=move |_| close()>"Close"</button>
                </div>
            </div>
        </div>
    }
}
