use super::*;

#[test]
fn accept_action_moves_request_out_of_pending() {
    let mut state = BookingsState::default();
    BookingAction::Accept(2).apply(&mut state).unwrap();
    assert!(state.pending().iter().all(|r| r.id != 2));
    assert!(state.accepted().iter().any(|r| r.id == 2));
}

#[test]
fn decline_action_on_accepted_request_is_rejected() {
    let mut state = BookingsState::default();
    let before = state.clone();
    let err = BookingAction::Decline(3).apply(&mut state).unwrap_err();
    assert_eq!(err, DashboardError::InvalidTransition { id: 3, from: BookingStatus::Accepted });
    assert_eq!(state, before);
}

#[test]
fn open_then_save_notes_actions_persist_notes() {
    let mut state = BookingsState::default();
    BookingAction::Open(1).apply(&mut state).unwrap();
    state.notes_draft = "Bring a second camera".to_owned();
    BookingAction::SaveNotes.apply(&mut state).unwrap();
    assert_eq!(state.request(1).unwrap().notes, "Bring a second camera");
}

#[test]
fn save_notes_action_without_selection_fails() {
    let mut state = BookingsState::default();
    assert_eq!(BookingAction::SaveNotes.apply(&mut state), Err(DashboardError::NothingSelected));
}

#[test]
fn open_action_for_unknown_id_fails() {
    let mut state = BookingsState::default();
    assert_eq!(BookingAction::Open(99).apply(&mut state), Err(DashboardError::BookingNotFound(99)));
    assert_eq!(state.selected, None);
}
