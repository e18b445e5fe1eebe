use std::collections::HashSet;

use super::*;

fn ids(requests: &[&BookingRequest]) -> Vec<u32> {
    requests.iter().map(|r| r.id).collect()
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn default_filter_is_pending() {
    let state = BookingsState::default();
    assert_eq!(state.filter, BookingFilter::Pending);
    assert!(state.selected.is_none());
}

#[test]
fn status_views_partition_the_seed_list() {
    let state = BookingsState::default();
    let pending = ids(&state.pending());
    let accepted = ids(&state.accepted());
    let declined = ids(&state.declined());

    let mut seen = HashSet::new();
    for id in pending.iter().chain(&accepted).chain(&declined) {
        assert!(seen.insert(*id), "request {id} appears in two views");
    }
    assert_eq!(seen.len(), state.requests.len());
    assert_eq!(state.all().len(), seed::booking_requests().len());
}

#[test]
fn seed_views_match_expected_ids() {
    let state = BookingsState::default();
    assert_eq!(ids(&state.pending()), [1, 2]);
    assert_eq!(ids(&state.accepted()), [3]);
    assert_eq!(ids(&state.declined()), [4]);
}

#[test]
fn filtered_follows_active_filter() {
    let mut state = BookingsState::default();
    assert_eq!(ids(&state.filtered()), [1, 2]);
    state.set_filter(BookingFilter::Accepted);
    assert_eq!(ids(&state.filtered()), [3]);
    state.set_filter(BookingFilter::All);
    assert_eq!(state.filtered().len(), state.requests.len());
}

#[test]
fn counts_match_views() {
    let state = BookingsState::default();
    assert_eq!(state.count(BookingFilter::Pending), state.pending().len());
    assert_eq!(state.count(BookingFilter::Accepted), state.accepted().len());
    assert_eq!(state.count(BookingFilter::All), state.all().len());
}

// =============================================================
// Accept / decline
// =============================================================

#[test]
fn accepting_request_two_moves_it_to_accepted() {
    let mut state = BookingsState::default();
    state.accept(2).unwrap();
    assert_eq!(state.request(2).unwrap().status, BookingStatus::Accepted);
    assert!(!ids(&state.pending()).contains(&2));
    assert!(ids(&state.accepted()).contains(&2));
    assert_eq!(state.all().len(), 4);
}

#[test]
fn declining_moves_request_out_of_pending() {
    let mut state = BookingsState::default();
    state.decline(1).unwrap();
    assert_eq!(ids(&state.pending()), [2]);
    assert_eq!(ids(&state.declined()), [1, 4]);
}

#[test]
fn accepting_non_pending_request_is_rejected() {
    let mut state = BookingsState::default();
    let err = state.accept(3).unwrap_err();
    assert_eq!(err, DashboardError::InvalidTransition { id: 3, from: BookingStatus::Accepted });
    assert_eq!(state.request(3).unwrap().status, BookingStatus::Accepted);
}

#[test]
fn second_decision_on_same_request_is_rejected() {
    let mut state = BookingsState::default();
    state.accept(1).unwrap();
    assert_eq!(
        state.decline(1).unwrap_err(),
        DashboardError::InvalidTransition { id: 1, from: BookingStatus::Accepted }
    );
}

#[test]
fn unknown_request_is_not_found() {
    let mut state = BookingsState::default();
    assert_eq!(state.accept(99).unwrap_err(), DashboardError::BookingNotFound(99));
    assert_eq!(state.decline(99).unwrap_err(), DashboardError::BookingNotFound(99));
}

#[test]
fn response_draft_is_attached_when_deciding_from_modal() {
    let mut state = BookingsState::default();
    state.open_details(2).unwrap();
    state.response_draft = "  Happy to cover it!  ".to_owned();
    state.accept(2).unwrap();
    assert_eq!(state.request(2).unwrap().response.as_deref(), Some("Happy to cover it!"));
    assert!(state.response_draft.is_empty());
}

#[test]
fn blank_response_draft_is_not_attached() {
    let mut state = BookingsState::default();
    state.open_details(1).unwrap();
    state.response_draft = "   ".to_owned();
    state.decline(1).unwrap();
    assert!(state.request(1).unwrap().response.is_none());
}

#[test]
fn response_draft_is_ignored_for_cards_outside_the_modal() {
    let mut state = BookingsState::default();
    state.open_details(1).unwrap();
    state.response_draft = "For request one".to_owned();
    state.accept(2).unwrap();
    assert!(state.request(2).unwrap().response.is_none());
    assert_eq!(state.response_draft, "For request one");
}

// =============================================================
// Details modal
// =============================================================

#[test]
fn open_details_selects_and_loads_notes() {
    let mut state = BookingsState::default();
    state.open_details(3).unwrap();
    assert_eq!(state.selected_request().map(|r| r.id), Some(3));
    assert_eq!(state.notes_draft, "Client prefers natural lighting. Bring reflectors.");
}

#[test]
fn open_details_for_unknown_id_keeps_selection() {
    let mut state = BookingsState::default();
    assert_eq!(state.open_details(42).unwrap_err(), DashboardError::BookingNotFound(42));
    assert!(state.selected.is_none());
}

#[test]
fn close_details_clears_selection_and_drafts() {
    let mut state = BookingsState::default();
    state.open_details(1).unwrap();
    state.response_draft = "draft".to_owned();
    state.close_details();
    assert!(state.selected_request().is_none());
    assert!(state.response_draft.is_empty());
    assert!(state.notes_draft.is_empty());
}

#[test]
fn save_notes_writes_trimmed_text_to_record() {
    let mut state = BookingsState::default();
    state.open_details(1).unwrap();
    state.notes_draft = "  Two shooters needed ".to_owned();
    state.save_notes().unwrap();
    assert_eq!(state.request(1).unwrap().notes, "Two shooters needed");
}

#[test]
fn save_notes_rejects_blank_draft() {
    let mut state = BookingsState::default();
    state.open_details(1).unwrap();
    state.notes_draft = "\n\t".to_owned();
    assert_eq!(state.save_notes().unwrap_err(), DashboardError::EmptyDraft);
    assert!(state.request(1).unwrap().notes.is_empty());
}

#[test]
fn save_notes_without_selection_fails() {
    let mut state = BookingsState::default();
    state.notes_draft = "note".to_owned();
    assert_eq!(state.save_notes().unwrap_err(), DashboardError::NothingSelected);
}

#[test]
fn empty_request_list_has_empty_views() {
    let state = BookingsState::with_requests(Vec::new());
    assert!(state.pending().is_empty());
    assert_eq!(state.count(BookingFilter::All), 0);
}
