//! Record shapes shared by the dashboard panels.
//!
//! DESIGN
//! ======
//! These types are the contract a booking/payments/reviews backend has to
//! satisfy. Field names serialize as snake_case and enum tags as lowercase so
//! swapping `seed` for a fetch layer needs no changes in `state`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// BOOKINGS
// =============================================================================

/// Lifecycle status of a booking request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    #[serde(alias = "confirmed")]
    Accepted,
    Declined,
}

impl BookingStatus {
    /// Display label used on status badges.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Declined => "Declined",
        }
    }

    /// CSS modifier for the status badge.
    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Pending => "badge badge--warning",
            Self::Accepted => "badge badge--success",
            Self::Declined => "badge badge--danger",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
        })
    }
}

/// An incoming request from a client to book the artist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub id: u32,
    pub client: String,
    pub event: String,
    pub date: String,
    /// Human-readable time range, e.g. `"2:00 PM - 8:00 PM"`.
    pub time: String,
    pub location: String,
    /// Offered budget in whole dollars.
    pub budget: u64,
    pub status: BookingStatus,
    pub message: String,
    /// Relative submission time as shown to the artist.
    pub submitted_at: String,
    #[serde(default)]
    pub notes: String,
    /// Message sent back to the client with the accept/decline decision.
    #[serde(default)]
    pub response: Option<String>,
}

// =============================================================================
// CALENDAR
// =============================================================================

/// A weekly availability window.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub day: String,
    pub time: String,
    pub available: bool,
    /// Title of the booking occupying the slot, when not available.
    #[serde(default)]
    pub booking: Option<String>,
}

/// A confirmed or pending event shown in the calendar sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingBooking {
    pub date: String,
    pub time: String,
    pub event: String,
    pub client: String,
    pub status: BookingStatus,
}

impl UpcomingBooking {
    /// Sidebar wording: accepted events read as confirmed.
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        match self.status {
            BookingStatus::Accepted => "Confirmed",
            status => status.label(),
        }
    }
}

// =============================================================================
// EARNINGS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Deposit,
    Final,
    Full,
    Milestone,
    Refund,
}

impl TransactionType {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Deposit => "Deposit",
            Self::Final => "Final Payment",
            Self::Full => "Full Payment",
            Self::Milestone => "Milestone",
            Self::Refund => "Refund",
        }
    }

    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Deposit | Self::Milestone => "badge badge--muted",
            Self::Final | Self::Full => "badge badge--primary",
            Self::Refund => "badge badge--caution",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Completed,
    Pending,
    Failed,
}

impl PaymentStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Pending => "Pending",
            Self::Failed => "Failed",
        }
    }

    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Completed => "badge badge--success",
            Self::Pending => "badge badge--warning",
            Self::Failed => "badge badge--danger",
        }
    }
}

/// A payment received (or refunded) against a booking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u32,
    pub event: String,
    /// Amount in whole dollars.
    pub amount: u64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub date: String,
    pub status: PaymentStatus,
    pub invoice: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyEarnings {
    pub month: String,
    pub earnings: u64,
    pub bookings: u32,
    pub avg_per_booking: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    /// Payout rail, e.g. `"Bank Transfer"`.
    pub kind: String,
    /// Masked account identifier.
    pub account: String,
    pub is_default: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalUnit {
    Currency,
    Count,
}

/// Progress towards a monthly target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsGoal {
    pub label: String,
    pub current: u64,
    pub target: u64,
    pub unit: GoalUnit,
}

/// One booking's payment position in the ledger modal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: u32,
    pub client: String,
    pub event: String,
    pub date: String,
    pub total: u64,
    /// Advance already paid.
    pub advance: u64,
}

impl LedgerEntry {
    /// Balance still owed; never negative.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.total.saturating_sub(self.advance)
    }
}

// =============================================================================
// REVIEWS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: u32,
    pub client: String,
    /// Star rating, 1 through 5.
    pub rating: u8,
    pub date: String,
    pub event: String,
    pub text: String,
    pub helpful: u32,
    pub replied: bool,
    #[serde(default)]
    pub reply: Option<String>,
}

/// Headline reputation numbers as reported by the platform.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReputationStats {
    pub average_rating: f32,
    pub total_reviews: u32,
    /// Percent of reviews answered within 24 hours.
    pub response_rate: u8,
    /// Percent of clients who booked again.
    pub repeat_clients: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReputationBadge {
    pub name: String,
    pub description: String,
    pub earned: bool,
    pub icon: String,
}

/// Share of reviews at one star level, in percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingShare {
    pub stars: u8,
    pub percent: u8,
}

// =============================================================================
// SESSION
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
}
