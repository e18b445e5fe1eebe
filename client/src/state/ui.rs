//! Local UI chrome state (top-level view, dashboard tabs, header menus).
//!
//! DESIGN
//! ======
//! Keeps navigation concerns out of the panel states (`bookings`, `earnings`,
//! ...) so switching views never touches booking or review data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use std::fmt;

/// Top-level view selected on the root route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppView {
    /// Public landing page.
    #[default]
    Platform,
    /// Artist dashboard.
    Dashboard,
}

impl AppView {
    #[must_use]
    pub fn open_dashboard(self) -> Self {
        Self::Dashboard
    }

    #[must_use]
    pub fn back_to_platform(self) -> Self {
        Self::Platform
    }
}

/// Header menu toggles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub profile_open: bool,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn toggle_profile(&mut self) {
        self.profile_open = !self.profile_open;
    }

    pub fn close_all(&mut self) {
        self.menu_open = false;
        self.profile_open = false;
    }
}

/// Panels available in the artist dashboard, in tab-strip order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DashboardTab {
    #[default]
    Calendar,
    Bookings,
    Earnings,
    Reviews,
}

impl DashboardTab {
    pub const ALL: [Self; 4] = [Self::Calendar, Self::Bookings, Self::Earnings, Self::Reviews];

    /// Stable identifier used in markup and tests.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Calendar => "calendar",
            Self::Bookings => "bookings",
            Self::Earnings => "earnings",
            Self::Reviews => "reviews",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Calendar => "Calendar",
            Self::Bookings => "Bookings",
            Self::Earnings => "Earnings",
            Self::Reviews => "Reviews",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Calendar => "\u{1f4c5}",
            Self::Bookings => "\u{1f4ac}",
            Self::Earnings => "$",
            Self::Reviews => "\u{2605}",
        }
    }

    /// Resolve a tab from its identifier.
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.id() == id)
    }
}

impl fmt::Display for DashboardTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

pub const PANEL_CLASS: &str = "dashboard__panel";
pub const HIDDEN_PANEL_CLASS: &str = "dashboard__panel dashboard__panel--hidden";

/// Tab selection for the dashboard shell.
///
/// Transitions happen only on explicit selection; there is no terminal state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub active_tab: DashboardTab,
}

impl DashboardState {
    pub fn select(&mut self, tab: DashboardTab) {
        self.active_tab = tab;
    }

    #[must_use]
    pub fn is_active(&self, tab: DashboardTab) -> bool {
        self.active_tab == tab
    }

    /// Class list for `tab`'s panel. Every panel stays mounted; all but the
    /// active one carry the hidden modifier.
    #[must_use]
    pub fn panel_class(&self, tab: DashboardTab) -> &'static str {
        if self.is_active(tab) {
            PANEL_CLASS
        } else {
            HIDDEN_PANEL_CLASS
        }
    }
}
