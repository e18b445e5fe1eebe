//! Session state provided to the header and dashboard via context.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::seed;
use crate::net::types::User;

/// Who is signed in and which areas they may open.
///
/// Provided once at the app root; components read it and never mutate the
/// flags themselves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub is_artist: bool,
}

impl SessionState {
    /// Session used until a real identity provider is wired in.
    #[must_use]
    pub fn mock_artist() -> Self {
        Self { user: Some(seed::current_user()), is_artist: true }
    }

    #[must_use]
    pub fn logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Whether the profile menu should offer the artist dashboard.
    #[must_use]
    pub fn can_open_dashboard(&self) -> bool {
        self.logged_in() && self.is_artist
    }

    /// Avatar fallback letters for the signed-in user.
    #[must_use]
    pub fn initials(&self) -> String {
        self.user
            .as_ref()
            .map(|u| crate::util::format::initials(&u.name))
            .unwrap_or_default()
    }
}
