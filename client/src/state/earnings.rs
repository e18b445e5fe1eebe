//! Earnings panel state: timeframe selection, growth, and the booking ledger.

#[cfg(test)]
#[path = "earnings_test.rs"]
mod earnings_test;

use crate::net::seed::{self, EarningsTotals};
use crate::net::types::{EarningsGoal, GoalUnit, LedgerEntry, MonthlyEarnings, PaymentMethod, Transaction};
use crate::util::format::format_currency;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Timeframe {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl Timeframe {
    pub const ALL: [Self; 3] = [Self::Weekly, Self::Monthly, Self::Yearly];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
        }
    }

    /// Caption under the headline amount.
    #[must_use]
    pub fn current_caption(self) -> &'static str {
        match self {
            Self::Weekly => "This Week",
            Self::Monthly => "This Month",
            Self::Yearly => "This Year",
        }
    }

    #[must_use]
    pub fn comparison_caption(self) -> &'static str {
        match self {
            Self::Weekly => "vs last week",
            Self::Monthly => "vs last month",
            Self::Yearly => "vs last year",
        }
    }
}

/// Sums over the ledger modal's rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LedgerTotals {
    pub advance: u64,
    pub total: u64,
    pub remaining: u64,
}

/// Percentage change from `previous` to `current`; `None` when there is no
/// previous amount to compare against.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn growth_percent(current: u64, previous: u64) -> Option<f64> {
    if previous == 0 {
        return None;
    }
    Some((current as f64 - previous as f64) / previous as f64 * 100.0)
}

/// Growth rounded to one decimal with an explicit sign, e.g. `"+12.1%"`.
/// Anything that rounds to zero prints as `"+0.0%"`, never `"-0.0%"`.
#[must_use]
pub fn format_growth(current: u64, previous: u64) -> String {
    growth_percent(current, previous).map_or_else(
        || "n/a".to_owned(),
        |pct| {
            let pct = if pct.abs() < 0.05 { 0.0 } else { pct };
            format!("{pct:+.1}%")
        },
    )
}

impl EarningsGoal {
    /// Progress towards the target, rounded and clamped to 0..=100.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn percent(&self) -> u8 {
        if self.target == 0 {
            return 100;
        }
        let pct = (self.current as f64 / self.target as f64 * 100.0).round();
        pct.clamp(0.0, 100.0) as u8
    }

    /// Progress text such as `"$3,240 / $4,000"` or `"8 / 10"`.
    #[must_use]
    pub fn progress_label(&self) -> String {
        match self.unit {
            GoalUnit::Currency => format!("{} / {}", format_currency(self.current), format_currency(self.target)),
            GoalUnit::Count => format!("{} / {}", self.current, self.target),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EarningsState {
    pub timeframe: Timeframe,
    pub totals: EarningsTotals,
    pub breakdown: Vec<MonthlyEarnings>,
    pub transactions: Vec<Transaction>,
    pub payment_methods: Vec<PaymentMethod>,
    pub goals: Vec<EarningsGoal>,
    pub ledger: Vec<LedgerEntry>,
    pub show_ledger: bool,
}

impl Default for EarningsState {
    fn default() -> Self {
        Self {
            timeframe: Timeframe::default(),
            totals: seed::earnings_totals(),
            breakdown: seed::monthly_breakdown(),
            transactions: seed::transactions(),
            payment_methods: seed::payment_methods(),
            goals: seed::earnings_goals(),
            ledger: seed::ledger_entries(),
            show_ledger: false,
        }
    }
}

impl EarningsState {
    pub fn set_timeframe(&mut self, timeframe: Timeframe) {
        self.timeframe = timeframe;
    }

    #[must_use]
    pub fn current(&self) -> u64 {
        match self.timeframe {
            Timeframe::Weekly => self.totals.this_week,
            Timeframe::Monthly => self.totals.this_month,
            Timeframe::Yearly => self.totals.this_year,
        }
    }

    #[must_use]
    pub fn previous(&self) -> u64 {
        match self.timeframe {
            Timeframe::Weekly => self.totals.last_week,
            Timeframe::Monthly => self.totals.last_month,
            Timeframe::Yearly => self.totals.last_year,
        }
    }

    #[must_use]
    pub fn growth_label(&self) -> String {
        format_growth(self.current(), self.previous())
    }

    /// Flat or rising earnings count as positive.
    #[must_use]
    pub fn is_growth_positive(&self) -> bool {
        self.current() >= self.previous()
    }

    /// The monthly breakdown is only meaningful for the monthly timeframe.
    #[must_use]
    pub fn shows_breakdown(&self) -> bool {
        self.timeframe == Timeframe::Monthly
    }

    #[must_use]
    pub fn ledger_totals(&self) -> LedgerTotals {
        self.ledger.iter().fold(LedgerTotals::default(), |acc, entry| LedgerTotals {
            advance: acc.advance + entry.advance,
            total: acc.total + entry.total,
            remaining: acc.remaining + entry.remaining(),
        })
    }

    pub fn open_ledger(&mut self) {
        self.show_ledger = true;
    }

    pub fn close_ledger(&mut self) {
        self.show_ledger = false;
    }
}
