//! Booking-requests panel: filter tabs, request cards, and the details modal.
//!
//! Every action goes through `BookingsState`; a rejected action leaves the
//! list untouched and shows an inline notice instead.

#[cfg(test)]
#[path = "booking_management_test.rs"]
mod booking_management_test;

use leptos::logging::warn;
use leptos::prelude::*;

use crate::error::DashboardError;
use crate::net::types::{BookingRequest, BookingStatus};
use crate::state::bookings::{BookingFilter, BookingsState};
use crate::util::format::{format_currency, initials};

#[component]
pub fn BookingManagement() -> impl IntoView {
    let bookings = expect_context::<RwSignal<BookingsState>>();
    let notice = RwSignal::new(None::<String>);

    let act = Callback::new(move |action: BookingAction| {
        let result = bookings.try_update(|b| action.apply(b)).unwrap_or(Ok(()));
        match result {
            Ok(()) => notice.set(None),
            Err(e) => {
                warn!("booking action failed: {e}");
                notice.set(Some(e.to_string()));
            }
        }
    });

    let filtered = move || bookings.with(|b| b.filtered().into_iter().cloned().collect::<Vec<_>>());
    let show_empty = move || bookings.with(|b| b.filter == BookingFilter::Pending && b.pending().is_empty());

    view! {
        <div class="bookings">
            <h2 class="panel__title">"Booking Requests"</h2>

            <Show when=move || notice.get().is_some()>
                <div class="notice notice--error" role="alert">
                    <span>{move || notice.get().unwrap_or_default()}</span>
                    <button class="btn btn--ghost btn--sm" on:click=move |_| notice.set(None)>"\u{2715}"</button>
                </div>
            </Show>

            <div class="tabs tabs--sub" role="tablist">
                {BookingFilter::ALL
                    .into_iter()
                    .map(|filter| {
                        view! {
                            <button
                                class="tabs__trigger"
                                class:tabs__trigger--active=move || bookings.with(|b| b.filter == filter)
                                on:click=move |_| bookings.update(|b| b.set_filter(filter))
                            >
                                {move || format!("{} ({})", filter.label(), bookings.with(|b| b.count(filter)))}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <Show when=show_empty>
                <div class="card empty-state">
                    <p>"No pending requests"</p>
                    <p class="muted">"New booking requests will appear here."</p>
                </div>
            </Show>

            <div class="bookings__list">
                <For each=filtered key=|r| (r.id, r.status) let:request>
                    <RequestCard request act/>
                </For>
            </div>

            <Show when=move || bookings.with(|b| b.selected_request().is_some())>
                <RequestDetailsModal bookings act/>
            </Show>
        </div>
    }
}

/// A user action on the booking list.
#[derive(Clone, Copy, Debug)]
enum BookingAction {
    Accept(u32),
    Decline(u32),
    Open(u32),
    SaveNotes,
}

impl BookingAction {
    fn apply(self, state: &mut BookingsState) -> Result<(), DashboardError> {
        match self {
            Self::Accept(id) => state.accept(id),
            Self::Decline(id) => state.decline(id),
            Self::Open(id) => state.open_details(id),
            Self::SaveNotes => state.save_notes(),
        }
    }
}

#[component]
fn RequestCard(request: BookingRequest, act: Callback<BookingAction>) -> impl IntoView {
    let id = request.id;
    let is_pending = request.status == BookingStatus::Pending;

    view! {
        <div class="card request" data-request={id.to_string()}>
            <div class="request__head">
                <span class="avatar">{initials(&request.client)}</span>
                <div class="request__who">
                    <h3>{request.client.clone()}</h3>
                    <p class="muted">{request.submitted_at.clone()}</p>
                </div>
                <span class={request.status.badge_class()}>{request.status.label()}</span>
            </div>

            <div class="request__facts">
                <p><strong>{request.event.clone()}</strong></p>
                <p class="muted">{format!("{} \u{b7} {}", request.date, request.time)}</p>
                <p class="muted">{request.location.clone()}</p>
                <p class="request__budget">{format_currency(request.budget)}</p>
            </div>

            <p class="request__message">{request.message.clone()}</p>
            {request.response.clone().map(|r| view! { <p class="request__response muted">{format!("Your response: {r}")}</p> })}

            <div class="request__actions">
                <button class="btn btn--outline btn--sm" on:click=move |_| act.run(BookingAction::Open(id))>
                    "View Details"
                </button>
                <Show when=move || is_pending>
                    <button class="btn btn--danger btn--sm" on:click=move |_| act.run(BookingAction::Decline(id))>
                        "Decline"
                    </button>
                    <button class="btn btn--primary btn--sm" on:click=move |_| act.run(BookingAction::Accept(id))>
                        "Accept"
                    </button>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn RequestDetailsModal(bookings: RwSignal<BookingsState>, act: Callback<BookingAction>) -> impl IntoView {
    let close = move || bookings.update(BookingsState::close_details);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };

    let selected = move || bookings.with(|b| b.selected_request().cloned());
    let selected_id = move || bookings.with(|b| b.selected);
    let is_pending = move || selected().is_some_and(|r| r.status == BookingStatus::Pending);

    let decide = move |accept: bool| {
        if let Some(id) = selected_id() {
            act.run(if accept { BookingAction::Accept(id) } else { BookingAction::Decline(id) });
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div
                class="dialog dialog--wide"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                {move || {
                    selected()
                        .map(|r| {
                            view! {
                                <div class="dialog__head">
                                    <h2>{r.event.clone()}</h2>
                                    <span class={r.status.badge_class()}>{r.status.label()}</span>
                                </div>
                                <dl class="dialog__facts">
                                    <dt>"Client"</dt>
                                    <dd>{r.client.clone()}</dd>
                                    <dt>"Date"</dt>
                                    <dd>{r.date.clone()}</dd>
                                    <dt>"Time"</dt>
                                    <dd>{r.time.clone()}</dd>
                                    <dt>"Location"</dt>
                                    <dd>{r.location.clone()}</dd>
                                    <dt>"Budget"</dt>
                                    <dd>{format_currency(r.budget)}</dd>
                                </dl>
                                <h3>"Client Message"</h3>
                                <p class="dialog__message">{r.message.clone()}</p>
                                {r.response.clone().map(|text| view! {
                                    <h3>"Your Response"</h3>
                                    <p class="dialog__message">{text}</p>
                                })}
                            }
                        })
                }}

                <Show when=is_pending>
                    <label class="field">
                        <span class="field__label">"Response to client"</span>
                        <textarea
                            class="field__input"
                            rows="3"
                            placeholder="Add a message to send with your decision..."
                            prop:value=move || bookings.with(|b| b.response_draft.clone())
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                bookings.update(|b| b.response_draft = text);
                            }
                        ></textarea>
                    </label>
                </Show>

                <label class="field">
                    <span class="field__label">"Private notes"</span>
                    <textarea
                        class="field__input"
                        rows="3"
                        placeholder="Notes only you can see..."
                        prop:value=move || bookings.with(|b| b.notes_draft.clone())
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            bookings.update(|b| b.notes_draft = text);
                        }
                    ></textarea>
                </label>

                <div class="dialog__actions">
                    <button class="btn btn--outline" on:click=move |_| act.run(BookingAction::SaveNotes)>
                        "Save Notes"
                    </button>
                    <span class="dialog__spacer"></span>
                    <Show when=is_pending>
                        <button class="btn btn--danger" on:click=move |_| decide(false)>"Decline"</button>
                        <button class="btn btn--primary" on:click=move |_| decide(true)>"Accept"</button>
                    </Show>
                    <button class="btn btn--ghost" on:click=move |_| close()>"Close"</button>
                </div>
            </div>
        </div>
    }
}
