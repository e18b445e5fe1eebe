//! Reviews & reputation panel state.
//!
//! DESIGN
//! ======
//! Each unreplied review keeps its own draft, so typing in one composer never
//! leaks into another. A sent reply is written onto the review record.
//!
//! The headline `stats` are platform-reported numbers covering every review,
//! not just the page loaded here; `computed_average` is exposed alongside so
//! the two can be compared.

#[cfg(test)]
#[path = "reviews_test.rs"]
mod reviews_test;

use std::collections::BTreeMap;

use leptos::logging::log;

use crate::error::DashboardError;
use crate::net::seed;
use crate::net::types::{RatingShare, ReputationBadge, ReputationStats, Review};

#[derive(Clone, Debug, PartialEq)]
pub struct ReviewsState {
    pub reviews: Vec<Review>,
    pub stats: ReputationStats,
    pub badges: Vec<ReputationBadge>,
    pub distribution: Vec<RatingShare>,
    pub drafts: BTreeMap<u32, String>,
    /// Review shown in the detail modal.
    pub selected: Option<u32>,
}

impl Default for ReviewsState {
    fn default() -> Self {
        Self {
            reviews: seed::reviews(),
            stats: seed::reputation_stats(),
            badges: seed::reputation_badges(),
            distribution: seed::rating_distribution(),
            drafts: BTreeMap::new(),
            selected: None,
        }
    }
}

impl ReviewsState {
    /// Look up a review by id.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::ReviewNotFound`] for an unknown id.
    pub fn review(&self, id: u32) -> Result<&Review, DashboardError> {
        self.reviews
            .iter()
            .find(|r| r.id == id)
            .ok_or(DashboardError::ReviewNotFound(id))
    }

    #[must_use]
    pub fn draft(&self, id: u32) -> &str {
        self.drafts.get(&id).map_or("", String::as_str)
    }

    pub fn set_draft(&mut self, id: u32, text: String) {
        if text.is_empty() {
            self.drafts.remove(&id);
        } else {
            self.drafts.insert(id, text);
        }
    }

    /// Send the draft for `id` as the artist's reply.
    ///
    /// # Errors
    ///
    /// Fails for a blank draft, an unknown id, or a review that already has a
    /// reply. The draft is kept on failure.
    pub fn reply(&mut self, id: u32) -> Result<(), DashboardError> {
        let text = self.draft(id).trim().to_owned();
        if text.is_empty() {
            return Err(DashboardError::EmptyDraft);
        }
        let review = self
            .reviews
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(DashboardError::ReviewNotFound(id))?;
        if review.replied {
            return Err(DashboardError::AlreadyReplied(id));
        }

        review.replied = true;
        review.reply = Some(text);
        self.drafts.remove(&id);
        log!("review {id}: reply sent");
        Ok(())
    }

    /// Open the detail modal for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::ReviewNotFound`] for an unknown id.
    pub fn open_review(&mut self, id: u32) -> Result<(), DashboardError> {
        self.review(id)?;
        self.selected = Some(id);
        Ok(())
    }

    pub fn close_review(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn selected_review(&self) -> Option<&Review> {
        self.selected.and_then(|id| self.review(id).ok())
    }

    /// Mean of the loaded reviews' ratings, if any are loaded.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn computed_average(&self) -> Option<f32> {
        if self.reviews.is_empty() {
            return None;
        }
        let sum: u32 = self.reviews.iter().map(|r| u32::from(r.rating)).sum();
        Some(sum as f32 / self.reviews.len() as f32)
    }

    /// Caption pairing the derived average with the page it came from, e.g.
    /// `"4.7 across 3 loaded reviews"`.
    #[must_use]
    pub fn computed_average_caption(&self) -> String {
        match self.computed_average() {
            Some(avg) => {
                let n = self.reviews.len();
                let noun = if n == 1 { "review" } else { "reviews" };
                format!("{avg:.1} across {n} loaded {noun}")
            }
            None => "No reviews loaded".to_owned(),
        }
    }

    #[must_use]
    pub fn unreplied_count(&self) -> usize {
        self.reviews.iter().filter(|r| !r.replied).count()
    }

    #[must_use]
    pub fn earned_badge_count(&self) -> usize {
        self.badges.iter().filter(|b| b.earned).count()
    }
}

/// Filled/empty flags for a five-star row; ratings outside 0..=5 are clamped.
#[must_use]
pub fn stars(rating: u8) -> [bool; 5] {
    let filled = rating.min(5);
    std::array::from_fn(|i| i < usize::from(filled))
}
