//! Earnings & payments panel with the booking-ledger modal.

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::state::earnings::{EarningsState, Timeframe};
use crate::util::format::format_currency;

#[component]
pub fn EarningsPayments() -> impl IntoView {
    let earnings = expect_context::<RwSignal<EarningsState>>();

    let headline = Signal::derive(move || earnings.with(|e| format_currency(e.current())));
    let previous = Signal::derive(move || earnings.with(|e| format_currency(e.previous())));
    let growth = move || earnings.with(EarningsState::growth_label);
    let growth_up = move || earnings.with(EarningsState::is_growth_positive);
    let caption = move || earnings.with(|e| e.timeframe.current_caption());
    let comparison = move || earnings.with(|e| e.timeframe.comparison_caption());

    let on_timeframe = move |ev: leptos::ev::Event| {
        if let Some(tf) = Timeframe::parse(&event_target_value(&ev)) {
            earnings.update(|e| e.set_timeframe(tf));
        }
    };

    view! {
        <div class="earnings">
            <div class="earnings__toolbar">
                <h2 class="panel__title">"Earnings & Payments"</h2>
                <div class="earnings__controls">
                    <select
                        class="field__input field__input--select"
                        prop:value=move || earnings.with(|e| e.timeframe.id())
                        on:change=on_timeframe
                    >
                        {Timeframe::ALL
                            .into_iter()
                            .map(|tf| view! { <option value={tf.id()}>{tf.label()}</option> })
                            .collect_view()}
                    </select>
                    <button class="btn btn--outline" on:click=move |_| earnings.update(EarningsState::open_ledger)>
                        "Booking Ledger"
                    </button>
                </div>
            </div>

            <div class="earnings__summary">
                <div class="card stat-card stat-card--hero">
                    <p class="stat-card__label muted">{caption}</p>
                    <p class="stat-card__value">{move || headline.get()}</p>
                    <p class="growth" class:growth--up=growth_up class:growth--down=move || !growth_up()>
                        {move || format!("{} {}", growth(), comparison())}
                    </p>
                </div>
                <StatCard label="Previous Period" value=previous/>
            </div>

            <Show when=move || earnings.with(EarningsState::shows_breakdown)>
                <div class="card">
                    <h3>"Monthly Breakdown"</h3>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Month"</th>
                                <th>"Earnings"</th>
                                <th>"Bookings"</th>
                                <th>"Avg / Booking"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                earnings
                                    .get()
                                    .breakdown
                                    .into_iter()
                                    .map(|m| {
                                        view! {
                                            <tr>
                                                <td>{m.month}</td>
                                                <td>{format_currency(m.earnings)}</td>
                                                <td>{m.bookings}</td>
                                                <td>{format_currency(m.avg_per_booking)}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
            </Show>

            <div class="earnings__grid">
                <div class="card">
                    <h3>"Recent Transactions"</h3>
                    <ul class="transactions">
                        {move || {
                            earnings
                                .get()
                                .transactions
                                .into_iter()
                                .map(|tx| {
                                    view! {
                                        <li class="transactions__item">
                                            <div>
                                                <p class="transactions__event">{tx.event}</p>
                                                <p class="muted">{format!("{} \u{b7} {}", tx.date, tx.invoice)}</p>
                                            </div>
                                            <div class="transactions__meta">
                                                <span class="transactions__amount">{format_currency(tx.amount)}</span>
                                                <span class={tx.kind.badge_class()}>{tx.kind.label()}</span>
                                                <span class={tx.status.badge_class()}>{tx.status.label()}</span>
                                            </div>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </div>

                <div class="earnings__side">
                    <div class="card">
                        <h3>"Payment Methods"</h3>
                        <ul class="methods">
                            {move || {
                                earnings
                                    .get()
                                    .payment_methods
                                    .into_iter()
                                    .map(|m| {
                                        view! {
                                            <li class="methods__item">
                                                <div>
                                                    <p>{m.kind}</p>
                                                    <p class="muted">{m.account}</p>
                                                </div>
                                                {m.is_default.then(|| view! { <span class="badge badge--primary">"Default"</span> })}
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </div>

                    <div class="card">
                        <h3>"This Month's Goals"</h3>
                        {move || {
                            earnings
                                .get()
                                .goals
                                .into_iter()
                                .map(|goal| {
                                    let pct = goal.percent();
                                    view! {
                                        <div class="goal">
                                            <div class="goal__head">
                                                <span>{goal.label.clone()}</span>
                                                <span class="muted">{goal.progress_label()}</span>
                                            </div>
                                            <div class="progress">
                                                <div class="progress__bar" style={format!("width: {pct}%")}></div>
                                            </div>
                                            <p class="muted goal__pct">{format!("{pct}% complete")}</p>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </div>

            <Show when=move || earnings.with(|e| e.show_ledger)>
                <LedgerModal earnings/>
            </Show>
        </div>
    }
}

/// Full-screen table of every booking's advance and outstanding balance.
#[component]
fn LedgerModal(earnings: RwSignal<EarningsState>) -> impl IntoView {
    let close = move || earnings.update(EarningsState::close_ledger);
    let totals = move || earnings.with(EarningsState::ledger_totals);

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div
                class="dialog dialog--full"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        close();
                    }
                }
                tabindex="0"
            >
                <div class="dialog__head">
                    <h2>"Booking Ledger"</h2>
                    <button class="btn btn--ghost" title="Close" on:click=move |_| close()>"\u{2715}"</button>
                </div>

                <div class="ledger__totals">
                    <StatCard label="Total Advance" value=Signal::derive(move || format_currency(totals().advance))/>
                    <StatCard label="Total Value" value=Signal::derive(move || format_currency(totals().total))/>
                    <StatCard label="Remaining" value=Signal::derive(move || format_currency(totals().remaining))/>
                </div>

                <table class="table ledger">
                    <thead>
                        <tr>
                            <th>"Client"</th>
                            <th>"Event"</th>
                            <th>"Date"</th>
                            <th>"Total"</th>
                            <th>"Advance"</th>
                            <th>"Remaining"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            earnings
                                .get()
                                .ledger
                                .into_iter()
                                .map(|entry| {
                                    let remaining = entry.remaining();
                                    view! {
                                        <tr>
                                            <td>{entry.client}</td>
                                            <td>{entry.event}</td>
                                            <td>{entry.date}</td>
                                            <td>{format_currency(entry.total)}</td>
                                            <td>{format_currency(entry.advance)}</td>
                                            <td class:ledger__due={remaining > 0}>{format_currency(remaining)}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
