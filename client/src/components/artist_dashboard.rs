//! Artist dashboard shell: header, overview cards, tab strip, and panels.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell creates one `RwSignal` per panel state and provides them as
//! context. All four panels stay mounted and only the active one is visible,
//! so drafts and selections survive switching tabs.

use leptos::prelude::*;
use time::OffsetDateTime;

use crate::components::booking_management::BookingManagement;
use crate::components::calendar_view::CalendarView;
use crate::components::earnings_payments::EarningsPayments;
use crate::components::reviews_reputation::ReviewsReputation;
use crate::components::stat_card::StatCard;
use crate::state::bookings::BookingsState;
use crate::state::calendar::CalendarState;
use crate::state::earnings::EarningsState;
use crate::state::reviews::ReviewsState;
use crate::state::ui::{DashboardState, DashboardTab};
use crate::util::format::format_currency;

/// Bookings shown on the overview card; the seed has no history behind it.
const TOTAL_BOOKINGS: &str = "24";

#[component]
pub fn ArtistDashboard(on_back_to_main: Callback<()>) -> impl IntoView {
    let dashboard = RwSignal::new(DashboardState::default());
    let calendar = RwSignal::new(CalendarState::new(OffsetDateTime::now_utc().date()));
    let bookings = RwSignal::new(BookingsState::default());
    let earnings = RwSignal::new(EarningsState::default());
    let reviews = RwSignal::new(ReviewsState::default());

    provide_context(calendar);
    provide_context(bookings);
    provide_context(earnings);
    provide_context(reviews);

    let pending_count = Signal::derive(move || bookings.with(|b| b.pending().len().to_string()));
    let month_earnings = Signal::derive(move || earnings.with(|e| format_currency(e.totals.this_month)));
    let avg_rating = Signal::derive(move || reviews.with(|r| format!("{:.1}", r.stats.average_rating)));
    let avg_caption = Signal::derive(move || reviews.with(ReviewsState::computed_average_caption));
    let total_bookings = Signal::derive(|| TOTAL_BOOKINGS.to_owned());

    let panel_class = move |tab: DashboardTab| move || dashboard.with(|d| d.panel_class(tab));

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <div class="dashboard__heading">
                    <button class="btn btn--ghost" on:click=move |_| on_back_to_main.run(())>
                        "\u{2190} Back to Platform"
                    </button>
                    <div>
                        <h1 class="dashboard__title">"Artist Dashboard"</h1>
                        <p class="muted">"Manage your bookings, earnings, and reputation"</p>
                    </div>
                </div>
            </header>

            <section class="dashboard__overview">
                <StatCard label="Total Bookings" value=total_bookings caption="All time" icon="\u{1f4c5}"/>
                <StatCard label="This Month" value=month_earnings caption="Earnings" icon="$"/>
                <StatCard label="Avg Rating" value=avg_rating caption=avg_caption icon="\u{2605}"/>
                <StatCard label="Pending Requests" value=pending_count caption="Awaiting response" icon="\u{1f4ac}"/>
            </section>

            <div class="tabs" role="tablist">
                {DashboardTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class="tabs__trigger"
                                class:tabs__trigger--active=move || dashboard.get().is_active(tab)
                                role="tab"
                                data-tab={tab.id()}
                                on:click=move |_| dashboard.update(|d| d.select(tab))
                            >
                                <span class="tabs__icon">{tab.icon()}</span>
                                <span class="tabs__label">{tab.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <section class=panel_class(DashboardTab::Calendar) data-panel="calendar">
                <CalendarView/>
            </section>
            <section class=panel_class(DashboardTab::Bookings) data-panel="bookings">
                <BookingManagement/>
            </section>
            <section class=panel_class(DashboardTab::Earnings) data-panel="earnings">
                <EarningsPayments/>
            </section>
            <section class=panel_class(DashboardTab::Reviews) data-panel="reviews">
                <ReviewsReputation/>
            </section>
        </div>
    }
}
