use super::*;

#[test]
fn not_found_messages_name_the_id() {
    assert_eq!(DashboardError::BookingNotFound(9).to_string(), "booking request 9 not found");
    assert_eq!(DashboardError::ReviewNotFound(4).to_string(), "review 4 not found");
    assert_eq!(DashboardError::StoryNotFound("nope".to_owned()).to_string(), "story 'nope' not found");
}

#[test]
fn invalid_transition_message_includes_current_status() {
    let err = DashboardError::InvalidTransition { id: 3, from: BookingStatus::Accepted };
    assert_eq!(err.to_string(), "booking request 3 is already accepted");
}

#[test]
fn empty_draft_message() {
    assert_eq!(DashboardError::EmptyDraft.to_string(), "text must not be empty");
}
