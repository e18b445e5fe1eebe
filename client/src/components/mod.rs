//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site header and the artist dashboard panels while
//! reading/writing shared state from Leptos context providers.

pub mod artist_dashboard;
pub mod booking_management;
pub mod calendar_view;
pub mod earnings_payments;
pub mod navigation;
pub mod reviews_reputation;
pub mod stat_card;
