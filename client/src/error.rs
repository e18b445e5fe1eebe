//! Recoverable errors raised by dashboard state transitions and lookups.
//!
//! ERROR HANDLING
//! ==============
//! Every variant is local to one panel. Components show the message inline
//! and log it; nothing here aborts rendering.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::net::types::BookingStatus;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    /// No booking request carries the given id.
    #[error("booking request {0} not found")]
    BookingNotFound(u32),

    /// No review carries the given id.
    #[error("review {0} not found")]
    ReviewNotFound(u32),

    /// The story catalogue has no entry for the given slug.
    #[error("story '{0}' not found")]
    StoryNotFound(String),

    /// Accept/decline was requested on a request that is no longer pending.
    #[error("booking request {id} is already {from}")]
    InvalidTransition { id: u32, from: BookingStatus },

    /// A reply was submitted for a review that already has one.
    #[error("review {0} already has a reply")]
    AlreadyReplied(u32),

    /// A draft was submitted with no text after trimming.
    #[error("text must not be empty")]
    EmptyDraft,

    /// A detail action ran while no record was open.
    #[error("no record is selected")]
    NothingSelected,
}
