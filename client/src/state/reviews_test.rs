use super::*;

// =============================================================
// Drafts and replies
// =============================================================

#[test]
fn drafts_are_kept_per_review() {
    let mut state = ReviewsState::default();
    state.set_draft(1, "Thanks Sarah!".to_owned());
    state.set_draft(3, "Thanks Emma!".to_owned());
    assert_eq!(state.draft(1), "Thanks Sarah!");
    assert_eq!(state.draft(3), "Thanks Emma!");
    assert_eq!(state.draft(2), "");
}

#[test]
fn clearing_a_draft_removes_it() {
    let mut state = ReviewsState::default();
    state.set_draft(1, "x".to_owned());
    state.set_draft(1, String::new());
    assert!(state.drafts.is_empty());
}

#[test]
fn reply_writes_text_onto_review_and_clears_draft() {
    let mut state = ReviewsState::default();
    state.set_draft(1, "  Thank you so much!  ".to_owned());
    state.reply(1).unwrap();

    let review = state.review(1).unwrap();
    assert!(review.replied);
    assert_eq!(review.reply.as_deref(), Some("Thank you so much!"));
    assert_eq!(state.draft(1), "");
    assert_eq!(state.unreplied_count(), 1);
}

#[test]
fn reply_leaves_other_drafts_alone() {
    let mut state = ReviewsState::default();
    state.set_draft(1, "one".to_owned());
    state.set_draft(3, "three".to_owned());
    state.reply(1).unwrap();
    assert_eq!(state.draft(3), "three");
}

#[test]
fn blank_reply_is_rejected_and_review_untouched() {
    let mut state = ReviewsState::default();
    state.set_draft(3, "   ".to_owned());
    assert_eq!(state.reply(3).unwrap_err(), DashboardError::EmptyDraft);
    assert!(!state.review(3).unwrap().replied);
    assert_eq!(state.draft(3), "   ");
}

#[test]
fn reply_without_any_draft_is_rejected() {
    let mut state = ReviewsState::default();
    assert_eq!(state.reply(1).unwrap_err(), DashboardError::EmptyDraft);
}

#[test]
fn reply_to_already_replied_review_is_rejected() {
    let mut state = ReviewsState::default();
    state.set_draft(2, "again".to_owned());
    assert_eq!(state.reply(2).unwrap_err(), DashboardError::AlreadyReplied(2));
    assert_eq!(
        state.review(2).unwrap().reply.as_deref(),
        Some("Thank you so much for the kind words! It was a pleasure working with your team.")
    );
}

#[test]
fn reply_to_unknown_review_is_not_found() {
    let mut state = ReviewsState::default();
    state.set_draft(77, "hello".to_owned());
    assert_eq!(state.reply(77).unwrap_err(), DashboardError::ReviewNotFound(77));
}

// =============================================================
// Detail modal
// =============================================================

#[test]
fn open_and_close_review_modal() {
    let mut state = ReviewsState::default();
    state.open_review(2).unwrap();
    assert_eq!(state.selected_review().map(|r| r.client.as_str()), Some("Michael Chen"));
    state.close_review();
    assert!(state.selected_review().is_none());
}

#[test]
fn open_unknown_review_fails() {
    let mut state = ReviewsState::default();
    assert_eq!(state.open_review(9).unwrap_err(), DashboardError::ReviewNotFound(9));
    assert!(state.selected.is_none());
}

// =============================================================
// Aggregates
// =============================================================

#[test]
fn computed_average_derives_from_loaded_reviews() {
    let state = ReviewsState::default();
    let avg = state.computed_average().unwrap();
    assert!((avg - 14.0 / 3.0).abs() < 1e-5);
}

#[test]
fn reported_average_is_independent_of_loaded_reviews() {
    let state = ReviewsState::default();
    assert!((state.stats.average_rating - 4.8).abs() < f32::EPSILON);
    assert_eq!(state.stats.total_reviews, 87);
    assert_ne!(state.stats.total_reviews as usize, state.reviews.len());
}

#[test]
fn computed_average_of_no_reviews_is_none() {
    let state = ReviewsState { reviews: Vec::new(), ..ReviewsState::default() };
    assert_eq!(state.computed_average(), None);
    assert_eq!(state.computed_average_caption(), "No reviews loaded");
}

#[test]
fn computed_average_caption_names_loaded_count() {
    let state = ReviewsState::default();
    assert_eq!(state.computed_average_caption(), "4.7 across 3 loaded reviews");
}

#[test]
fn computed_average_caption_singular_review() {
    let mut state = ReviewsState::default();
    state.reviews.truncate(1);
    let rating = state.reviews[0].rating;
    assert_eq!(state.computed_average_caption(), format!("{rating}.0 across 1 loaded review"));
}

#[test]
fn seed_badges_and_distribution() {
    let state = ReviewsState::default();
    assert_eq!(state.earned_badge_count(), 3);
    let total: u32 = state.distribution.iter().map(|s| u32::from(s.percent)).sum();
    assert_eq!(total, 100);
}

// =============================================================
// stars
// =============================================================

#[test]
fn stars_fill_from_the_left() {
    assert_eq!(stars(4), [true, true, true, true, false]);
    assert_eq!(stars(0), [false; 5]);
}

#[test]
fn stars_clamp_out_of_range_ratings() {
    assert_eq!(stars(9), [true; 5]);
}
