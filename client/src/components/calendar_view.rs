//! Calendar & availability panel.

use leptos::prelude::*;

use crate::state::calendar::{CalendarState, MonthCell, ViewMode, WEEKDAY_HEADERS};

#[component]
pub fn CalendarView() -> impl IntoView {
    let calendar = expect_context::<RwSignal<CalendarState>>();

    let is_mode = move |mode: ViewMode| move || calendar.with(|c| c.view_mode == mode);

    view! {
        <div class="calendar">
            <div class="calendar__toolbar">
                <h2 class="panel__title">"Availability Calendar"</h2>
                <div class="toggle-group">
                    <button
                        class="btn btn--sm"
                        class:btn--primary=is_mode(ViewMode::Week)
                        class:btn--outline=move || !is_mode(ViewMode::Week)()
                        on:click=move |_| calendar.update(|c| c.set_view_mode(ViewMode::Week))
                    >
                        "Week"
                    </button>
                    <button
                        class="btn btn--sm"
                        class:btn--primary=is_mode(ViewMode::Month)
                        class:btn--outline=move || !is_mode(ViewMode::Month)()
                        on:click=move |_| calendar.update(|c| c.set_view_mode(ViewMode::Month))
                    >
                        "Month"
                    </button>
                </div>
            </div>

            <div class="calendar__layout">
                <div class="card calendar__main">
                    <div class="calendar__nav">
                        <button class="btn btn--ghost" title="Previous month" on:click=move |_| calendar.update(CalendarState::previous_month)>
                            "\u{2039}"
                        </button>
                        <h3 class="calendar__title">{move || calendar.with(CalendarState::month_title)}</h3>
                        <button class="btn btn--ghost" title="Next month" on:click=move |_| calendar.update(CalendarState::next_month)>
                            "\u{203a}"
                        </button>
                    </div>

                    <Show when=is_mode(ViewMode::Month) fallback=move || view! { <WeekSlots calendar/> }>
                        <MonthGridView calendar/>
                    </Show>
                </div>

                <aside class="card calendar__sidebar">
                    <h3>"Upcoming Bookings"</h3>
                    <ul class="upcoming">
                        {move || {
                            calendar
                                .get()
                                .upcoming
                                .into_iter()
                                .map(|b| {
                                    let label = b.status_label();
                                    view! {
                                        <li class="upcoming__item">
                                            <div class="upcoming__head">
                                                <span class="upcoming__event">{b.event}</span>
                                                <span class={b.status.badge_class()}>{label}</span>
                                            </div>
                                            <p class="muted">{b.client}</p>
                                            <p class="muted upcoming__when">{format!("{} \u{b7} {}", b.date, b.time)}</p>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                    <div class="calendar__legend">
                        <span class="legend legend--available">
                            {move || format!("{} available", calendar.with(CalendarState::available_slot_count))}
                        </span>
                        <span class="legend legend--booked">
                            {move || format!("{} booked", calendar.with(CalendarState::booked_slot_count))}
                        </span>
                    </div>
                </aside>
            </div>
        </div>
    }
}

/// Weekly availability windows.
#[component]
fn WeekSlots(calendar: RwSignal<CalendarState>) -> impl IntoView {
    view! {
        <ul class="slots">
            {move || {
                calendar
                    .get()
                    .slots
                    .into_iter()
                    .map(|slot| {
                        let status = if slot.available { "Available" } else { "Booked" };
                        view! {
                            <li class="slot" class:slot--booked={!slot.available}>
                                <span class="slot__day">{slot.day}</span>
                                <span class="slot__time">{slot.time}</span>
                                <span class="slot__status">{status}</span>
                                {slot.booking.map(|title| view! { <span class="slot__booking muted">{title}</span> })}
                            </li>
                        }
                    })
                    .collect_view()
            }}
        </ul>
    }
}

#[component]
fn MonthGridView(calendar: RwSignal<CalendarState>) -> impl IntoView {
    let render_cell = |cell: MonthCell| {
        let text = cell.day.map(|d| d.to_string()).unwrap_or_default();
        view! {
            <div class="month__cell" class:month__cell--empty={cell.day.is_none()} class:month__cell--today={cell.is_today}>
                {text}
            </div>
        }
    };

    view! {
        <div class="month">
            <div class="month__row month__row--header">
                {WEEKDAY_HEADERS.iter().map(|d| view! { <div class="month__weekday">{*d}</div> }).collect_view()}
            </div>
            {move || {
                let grid = calendar.with(CalendarState::month_grid);
                grid.rows()
                    .map(|row| {
                        let cells = row.iter().copied().map(render_cell).collect_view();
                        view! { <div class="month__row">{cells}</div> }
                    })
                    .collect_view()
            }}
        </div>
    }
}
