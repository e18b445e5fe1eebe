//! Seed records standing in for the booking, payments, and reviews API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each panel state is constructed from these functions. A real data source
//! replaces this module behind the same return types.

use super::types::{
    AvailabilitySlot, BookingRequest, BookingStatus, EarningsGoal, GoalUnit, LedgerEntry, MonthlyEarnings,
    PaymentMethod, PaymentStatus, RatingShare, ReputationBadge, ReputationStats, Review, Transaction,
    TransactionType, UpcomingBooking, User,
};

#[must_use]
pub fn current_user() -> User {
    User { name: "John Doe".to_owned(), email: "john@example.com".to_owned(), avatar_url: None }
}

// =============================================================================
// BOOKINGS
// =============================================================================

#[must_use]
pub fn booking_requests() -> Vec<BookingRequest> {
    vec![
        BookingRequest {
            id: 1,
            client: "Sarah Johnson".to_owned(),
            event: "Wedding Photography".to_owned(),
            date: "December 25, 2024".to_owned(),
            time: "2:00 PM - 8:00 PM".to_owned(),
            location: "Grand Ballroom, NYC".to_owned(),
            budget: 1500,
            status: BookingStatus::Pending,
            message: "Hi! We're looking for a photographer for our wedding. We love your portfolio and would like \
                      to discuss the details."
                .to_owned(),
            submitted_at: "2 hours ago".to_owned(),
            notes: String::new(),
            response: None,
        },
        BookingRequest {
            id: 2,
            client: "Tech Corp Inc.".to_owned(),
            event: "Corporate Event Photography".to_owned(),
            date: "December 20, 2024".to_owned(),
            time: "10:00 AM - 4:00 PM".to_owned(),
            location: "Tech Corp HQ, Manhattan".to_owned(),
            budget: 800,
            status: BookingStatus::Pending,
            message: "We need professional photography for our annual company event. Please let us know your \
                      availability."
                .to_owned(),
            submitted_at: "1 day ago".to_owned(),
            notes: String::new(),
            response: None,
        },
        BookingRequest {
            id: 3,
            client: "Emma Davis".to_owned(),
            event: "Portrait Session".to_owned(),
            date: "December 18, 2024".to_owned(),
            time: "3:00 PM - 5:00 PM".to_owned(),
            location: "Central Park, NYC".to_owned(),
            budget: 300,
            status: BookingStatus::Accepted,
            message: "Looking for outdoor portrait session for my professional headshots.".to_owned(),
            submitted_at: "3 days ago".to_owned(),
            notes: "Client prefers natural lighting. Bring reflectors.".to_owned(),
            response: None,
        },
        BookingRequest {
            id: 4,
            client: "Priya Sharma".to_owned(),
            event: "Classical Dance Recital".to_owned(),
            date: "December 12, 2024".to_owned(),
            time: "6:00 PM - 9:00 PM".to_owned(),
            location: "Community Hall, Jersey City".to_owned(),
            budget: 450,
            status: BookingStatus::Declined,
            message: "Would you be able to cover our recital? Budget is flexible.".to_owned(),
            submitted_at: "5 days ago".to_owned(),
            notes: "Date clashes with the Dec 12 studio shoot.".to_owned(),
            response: Some("Sorry, I'm already booked that evening.".to_owned()),
        },
    ]
}

// =============================================================================
// CALENDAR
// =============================================================================

fn slot(day: &str, time: &str, booking: Option<&str>) -> AvailabilitySlot {
    AvailabilitySlot {
        day: day.to_owned(),
        time: time.to_owned(),
        available: booking.is_none(),
        booking: booking.map(str::to_owned),
    }
}

#[must_use]
pub fn availability_slots() -> Vec<AvailabilitySlot> {
    vec![
        slot("Monday", "9:00 AM - 12:00 PM", None),
        slot("Monday", "2:00 PM - 6:00 PM", None),
        slot("Tuesday", "10:00 AM - 4:00 PM", Some("Wedding Photography")),
        slot("Wednesday", "9:00 AM - 1:00 PM", None),
        slot("Thursday", "3:00 PM - 8:00 PM", Some("Portrait Session")),
        slot("Friday", "10:00 AM - 6:00 PM", None),
    ]
}

#[must_use]
pub fn upcoming_bookings() -> Vec<UpcomingBooking> {
    let upcoming = |date: &str, time: &str, event: &str, client: &str, status| UpcomingBooking {
        date: date.to_owned(),
        time: time.to_owned(),
        event: event.to_owned(),
        client: client.to_owned(),
        status,
    };
    vec![
        upcoming("Dec 15", "2:00 PM", "Wedding Photography", "Sarah & John", BookingStatus::Accepted),
        upcoming("Dec 18", "3:00 PM", "Portrait Session", "Emma Davis", BookingStatus::Accepted),
        upcoming("Dec 22", "10:00 AM", "Corporate Event", "Tech Corp", BookingStatus::Pending),
    ]
}

// =============================================================================
// EARNINGS
// =============================================================================

/// Period totals in whole dollars, keyed by timeframe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EarningsTotals {
    pub this_week: u64,
    pub last_week: u64,
    pub this_month: u64,
    pub last_month: u64,
    pub this_year: u64,
    pub last_year: u64,
}

#[must_use]
pub fn earnings_totals() -> EarningsTotals {
    EarningsTotals {
        this_week: 850,
        last_week: 720,
        this_month: 3240,
        last_month: 2890,
        this_year: 28_650,
        last_year: 22_100,
    }
}

#[must_use]
pub fn monthly_breakdown() -> Vec<MonthlyEarnings> {
    let month = |month: &str, earnings, bookings, avg_per_booking| MonthlyEarnings {
        month: month.to_owned(),
        earnings,
        bookings,
        avg_per_booking,
    };
    vec![
        month("December", 3240, 8, 405),
        month("November", 2890, 7, 413),
        month("October", 3150, 9, 350),
        month("September", 2750, 6, 458),
    ]
}

#[must_use]
pub fn transactions() -> Vec<Transaction> {
    let tx = |id, event: &str, amount, kind, date: &str, status, invoice: &str| Transaction {
        id,
        event: event.to_owned(),
        amount,
        kind,
        date: date.to_owned(),
        status,
        invoice: invoice.to_owned(),
    };
    vec![
        tx(1, "Wedding Photography - Sarah & John", 1500, TransactionType::Final, "Dec 10, 2024", PaymentStatus::Completed, "INV-001"),
        tx(2, "Corporate Event - Tech Corp", 800, TransactionType::Deposit, "Dec 8, 2024", PaymentStatus::Completed, "INV-002"),
        tx(3, "Portrait Session - Emma Davis", 300, TransactionType::Final, "Dec 5, 2024", PaymentStatus::Completed, "INV-003"),
        tx(4, "Wedding Photography - Mike & Lisa", 750, TransactionType::Deposit, "Dec 3, 2024", PaymentStatus::Pending, "INV-004"),
    ]
}

#[must_use]
pub fn payment_methods() -> Vec<PaymentMethod> {
    vec![
        PaymentMethod { kind: "Bank Transfer".to_owned(), account: "****1234".to_owned(), is_default: true },
        PaymentMethod { kind: "PayPal".to_owned(), account: "john@example.com".to_owned(), is_default: false },
    ]
}

#[must_use]
pub fn earnings_goals() -> Vec<EarningsGoal> {
    vec![
        EarningsGoal { label: "Earnings Goal".to_owned(), current: 3240, target: 4000, unit: GoalUnit::Currency },
        EarningsGoal { label: "Bookings Goal".to_owned(), current: 8, target: 10, unit: GoalUnit::Count },
    ]
}

#[must_use]
pub fn ledger_entries() -> Vec<LedgerEntry> {
    let entry = |id, client: &str, event: &str, date: &str, total, advance| LedgerEntry {
        id,
        client: client.to_owned(),
        event: event.to_owned(),
        date: date.to_owned(),
        total,
        advance,
    };
    vec![
        entry(1, "Sarah & John", "Wedding Photography", "Dec 15, 2024", 1500, 750),
        entry(2, "Tech Corp Inc.", "Corporate Event Photography", "Dec 20, 2024", 800, 400),
        entry(3, "Emma Davis", "Portrait Session", "Dec 18, 2024", 300, 300),
        entry(4, "Mike & Lisa", "Wedding Photography", "Dec 28, 2024", 1500, 750),
    ]
}

// =============================================================================
// REVIEWS
// =============================================================================

#[must_use]
pub fn reviews() -> Vec<Review> {
    vec![
        Review {
            id: 1,
            client: "Sarah Johnson".to_owned(),
            rating: 5,
            date: "Dec 10, 2024".to_owned(),
            event: "Wedding Photography".to_owned(),
            text: "Absolutely amazing work! The photos captured every precious moment of our special day. \
                   Professional, creative, and so easy to work with."
                .to_owned(),
            helpful: 12,
            replied: false,
            reply: None,
        },
        Review {
            id: 2,
            client: "Michael Chen".to_owned(),
            rating: 5,
            date: "Dec 8, 2024".to_owned(),
            event: "Corporate Event".to_owned(),
            text: "Outstanding photography for our company event. Great attention to detail and delivered photos \
                   quickly. Highly recommend!"
                .to_owned(),
            helpful: 8,
            replied: true,
            reply: Some("Thank you so much for the kind words! It was a pleasure working with your team.".to_owned()),
        },
        Review {
            id: 3,
            client: "Emma Davis".to_owned(),
            rating: 4,
            date: "Dec 5, 2024".to_owned(),
            event: "Portrait Session".to_owned(),
            text: "Great experience overall. The photographer was professional and the photos turned out \
                   beautiful. Would book again!"
                .to_owned(),
            helpful: 5,
            replied: false,
            reply: None,
        },
    ]
}

#[must_use]
pub fn reputation_stats() -> ReputationStats {
    ReputationStats { average_rating: 4.8, total_reviews: 87, response_rate: 92, repeat_clients: 68 }
}

#[must_use]
pub fn reputation_badges() -> Vec<ReputationBadge> {
    let badge = |name: &str, description: &str, earned, icon: &str| ReputationBadge {
        name: name.to_owned(),
        description: description.to_owned(),
        earned,
        icon: icon.to_owned(),
    };
    vec![
        badge("Top Rated", "Consistently high ratings", true, "\u{1f3c6}"),
        badge("Quick Responder", "Responds within 1 hour", true, "\u{21a9}"),
        badge("Repeat Client Favorite", "High repeat booking rate", true, "\u{1f44d}"),
        badge("Rising Star", "Growing popularity", false, "\u{1f4c8}"),
    ]
}

#[must_use]
pub fn rating_distribution() -> Vec<RatingShare> {
    [(5, 75), (4, 20), (3, 3), (2, 1), (1, 1)]
        .into_iter()
        .map(|(stars, percent)| RatingShare { stars, percent })
        .collect()
}
