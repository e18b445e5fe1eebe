//! Booking-management panel state.
//!
//! DESIGN
//! ======
//! The request list is owned here; accept/decline rewrite the affected
//! record's status and every filtered view is derived from the list on read,
//! so counts and tabs always agree after an action.

#[cfg(test)]
#[path = "bookings_test.rs"]
mod bookings_test;

use leptos::logging::log;

use crate::error::DashboardError;
use crate::net::seed;
use crate::net::types::{BookingRequest, BookingStatus};

/// Sub-tab of the booking panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BookingFilter {
    #[default]
    Pending,
    Accepted,
    All,
}

impl BookingFilter {
    pub const ALL: [Self; 3] = [Self::Pending, Self::Accepted, Self::All];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::All => "All Requests",
        }
    }

    #[must_use]
    pub fn matches(self, status: BookingStatus) -> bool {
        match self {
            Self::Pending => status == BookingStatus::Pending,
            Self::Accepted => status == BookingStatus::Accepted,
            Self::All => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingsState {
    pub requests: Vec<BookingRequest>,
    pub filter: BookingFilter,
    /// Request shown in the details modal.
    pub selected: Option<u32>,
    pub response_draft: String,
    pub notes_draft: String,
}

impl Default for BookingsState {
    fn default() -> Self {
        Self::with_requests(seed::booking_requests())
    }
}

impl BookingsState {
    #[must_use]
    pub fn with_requests(requests: Vec<BookingRequest>) -> Self {
        Self {
            requests,
            filter: BookingFilter::default(),
            selected: None,
            response_draft: String::new(),
            notes_draft: String::new(),
        }
    }

    fn with_status(&self, status: BookingStatus) -> Vec<&BookingRequest> {
        self.requests.iter().filter(|r| r.status == status).collect()
    }

    #[must_use]
    pub fn pending(&self) -> Vec<&BookingRequest> {
        self.with_status(BookingStatus::Pending)
    }

    #[must_use]
    pub fn accepted(&self) -> Vec<&BookingRequest> {
        self.with_status(BookingStatus::Accepted)
    }

    #[must_use]
    pub fn declined(&self) -> Vec<&BookingRequest> {
        self.with_status(BookingStatus::Declined)
    }

    #[must_use]
    pub fn all(&self) -> Vec<&BookingRequest> {
        self.requests.iter().collect()
    }

    /// Requests visible under the active sub-tab.
    #[must_use]
    pub fn filtered(&self) -> Vec<&BookingRequest> {
        self.requests.iter().filter(|r| self.filter.matches(r.status)).collect()
    }

    #[must_use]
    pub fn count(&self, filter: BookingFilter) -> usize {
        self.requests.iter().filter(|r| filter.matches(r.status)).count()
    }

    pub fn set_filter(&mut self, filter: BookingFilter) {
        self.filter = filter;
    }

    /// Look up a request by id.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::BookingNotFound`] for an unknown id.
    pub fn request(&self, id: u32) -> Result<&BookingRequest, DashboardError> {
        self.requests
            .iter()
            .find(|r| r.id == id)
            .ok_or(DashboardError::BookingNotFound(id))
    }

    /// Accept a pending request.
    ///
    /// # Errors
    ///
    /// Fails for an unknown id or a request that is not pending.
    pub fn accept(&mut self, id: u32) -> Result<(), DashboardError> {
        self.respond(id, BookingStatus::Accepted)
    }

    /// Decline a pending request.
    ///
    /// # Errors
    ///
    /// Fails for an unknown id or a request that is not pending.
    pub fn decline(&mut self, id: u32) -> Result<(), DashboardError> {
        self.respond(id, BookingStatus::Declined)
    }

    fn respond(&mut self, id: u32, next: BookingStatus) -> Result<(), DashboardError> {
        let draft = self.response_draft.trim().to_owned();
        let request = self
            .requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(DashboardError::BookingNotFound(id))?;
        if request.status != BookingStatus::Pending {
            return Err(DashboardError::InvalidTransition { id, from: request.status });
        }

        request.status = next;
        // The response draft belongs to the request open in the modal.
        if self.selected == Some(id) && !draft.is_empty() {
            request.response = Some(draft);
            self.response_draft.clear();
        }
        log!("booking request {id}: pending -> {next}");
        Ok(())
    }

    /// Open the details modal for `id`, loading its saved notes into the draft.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::BookingNotFound`] for an unknown id.
    pub fn open_details(&mut self, id: u32) -> Result<(), DashboardError> {
        let notes = self.request(id)?.notes.clone();
        self.selected = Some(id);
        self.notes_draft = notes;
        self.response_draft.clear();
        Ok(())
    }

    pub fn close_details(&mut self) {
        self.selected = None;
        self.response_draft.clear();
        self.notes_draft.clear();
    }

    #[must_use]
    pub fn selected_request(&self) -> Option<&BookingRequest> {
        self.selected.and_then(|id| self.request(id).ok())
    }

    /// Store the notes draft on the selected request.
    ///
    /// # Errors
    ///
    /// Fails when nothing is selected, the selection no longer exists, or the
    /// draft is blank.
    pub fn save_notes(&mut self) -> Result<(), DashboardError> {
        let id = self.selected.ok_or(DashboardError::NothingSelected)?;
        let notes = self.notes_draft.trim();
        if notes.is_empty() {
            return Err(DashboardError::EmptyDraft);
        }
        let notes = notes.to_owned();
        let request = self
            .requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(DashboardError::BookingNotFound(id))?;
        request.notes.clone_from(&notes);
        self.notes_draft = notes;
        log!("booking request {id}: notes saved");
        Ok(())
    }
}
