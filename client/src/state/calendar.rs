//! Calendar panel state: week/month mode, month navigation, and month grid.
//!
//! DESIGN
//! ======
//! The month grid is a pure function of `current_month` so navigating away
//! and back always reproduces the same cells.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use time::{Date, Month};

use crate::net::seed;
use crate::net::types::{AvailabilitySlot, UpcomingBooking};

pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Week,
    Month,
}

/// One square of the month grid. Padding cells have no day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthCell {
    pub day: Option<u8>,
    pub is_today: bool,
}

/// Sunday-first grid covering one month, in whole weeks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthGrid {
    pub cells: Vec<MonthCell>,
}

impl MonthGrid {
    pub fn rows(&self) -> impl Iterator<Item = &[MonthCell]> {
        self.cells.chunks(7)
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.cells.len() / 7
    }

    /// Day numbers in grid order, skipping padding.
    pub fn days(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().filter_map(|cell| cell.day)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarState {
    pub view_mode: ViewMode,
    /// First day of the displayed month.
    pub current_month: Date,
    pub today: Date,
    pub slots: Vec<AvailabilitySlot>,
    pub upcoming: Vec<UpcomingBooking>,
}

impl CalendarState {
    /// Panel state showing the month containing `today`.
    #[must_use]
    pub fn new(today: Date) -> Self {
        Self {
            view_mode: ViewMode::Week,
            current_month: today.replace_day(1).unwrap_or(today),
            today,
            slots: seed::availability_slots(),
            upcoming: seed::upcoming_bookings(),
        }
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn previous_month(&mut self) {
        let (year, month) = match self.current_month.month() {
            Month::January => (self.current_month.year() - 1, Month::December),
            month => (self.current_month.year(), month.previous()),
        };
        self.go_to(year, month);
    }

    pub fn next_month(&mut self) {
        let (year, month) = match self.current_month.month() {
            Month::December => (self.current_month.year() + 1, Month::January),
            month => (self.current_month.year(), month.next()),
        };
        self.go_to(year, month);
    }

    /// Out-of-range years leave the month unchanged.
    fn go_to(&mut self, year: i32, month: Month) {
        if let Ok(first) = Date::from_calendar_date(year, month, 1) {
            self.current_month = first;
        }
    }

    /// Heading such as `"December 2024"`.
    #[must_use]
    pub fn month_title(&self) -> String {
        format!("{} {}", self.current_month.month(), self.current_month.year())
    }

    #[must_use]
    pub fn month_grid(&self) -> MonthGrid {
        let year = self.current_month.year();
        let month = self.current_month.month();
        let leading = usize::from(self.current_month.weekday().number_days_from_sunday());
        let length = days_in_month(year, month);
        let today_day = (self.today.year() == year && self.today.month() == month).then(|| self.today.day());

        let filled = leading + usize::from(length);
        let total = filled.div_ceil(7) * 7;

        let cells = (0..total)
            .map(|index| {
                let day = index
                    .checked_sub(leading)
                    .filter(|offset| *offset < usize::from(length))
                    .and_then(|offset| u8::try_from(offset + 1).ok());
                MonthCell { day, is_today: day.is_some() && day == today_day }
            })
            .collect();
        MonthGrid { cells }
    }

    #[must_use]
    pub fn available_slot_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.available).count()
    }

    #[must_use]
    pub fn booked_slot_count(&self) -> usize {
        self.slots.len() - self.available_slot_count()
    }
}

/// Number of days in `month` of `year`, honouring leap years.
#[must_use]
pub fn days_in_month(year: i32, month: Month) -> u8 {
    match month {
        Month::February => {
            if time::util::is_leap_year(year) {
                29
            } else {
                28
            }
        }
        Month::April | Month::June | Month::September | Month::November => 30,
        _ => 31,
    }
}
