use super::*;
use time::macros::date;

fn state_at(today: Date) -> CalendarState {
    CalendarState::new(today)
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn new_state_starts_in_week_mode_on_todays_month() {
    let state = state_at(date!(2024 - 12 - 17));
    assert_eq!(state.view_mode, ViewMode::Week);
    assert_eq!(state.current_month, date!(2024 - 12 - 01));
    assert_eq!(state.month_title(), "December 2024");
}

#[test]
fn seed_slots_split_into_available_and_booked() {
    let state = state_at(date!(2024 - 12 - 17));
    assert_eq!(state.available_slot_count(), 4);
    assert_eq!(state.booked_slot_count(), 2);
    assert!(state.slots.iter().all(|slot| slot.available == slot.booking.is_none()));
}

#[test]
fn set_view_mode_switches_mode() {
    let mut state = state_at(date!(2024 - 12 - 17));
    state.set_view_mode(ViewMode::Month);
    assert_eq!(state.view_mode, ViewMode::Month);
}

// =============================================================
// Month navigation
// =============================================================

#[test]
fn previous_then_next_returns_to_start_for_every_month() {
    for month in 1..=12u8 {
        let start = Date::from_calendar_date(2025, Month::try_from(month).unwrap(), 14).unwrap();
        let mut state = state_at(start);
        let original = state.current_month;
        state.previous_month();
        state.next_month();
        assert_eq!(state.current_month, original);
        state.next_month();
        state.previous_month();
        assert_eq!(state.current_month, original);
    }
}

#[test]
fn navigation_rolls_over_year_boundaries() {
    let mut state = state_at(date!(2025 - 01 - 10));
    state.previous_month();
    assert_eq!(state.month_title(), "December 2024");
    state.next_month();
    state.next_month();
    assert_eq!(state.month_title(), "February 2025");
}

#[test]
fn navigation_moves_by_whole_months_from_month_end() {
    let mut state = state_at(date!(2025 - 01 - 31));
    state.next_month();
    assert_eq!(state.current_month, date!(2025 - 02 - 01));
}

// =============================================================
// Month grid
// =============================================================

#[test]
fn december_2024_starts_on_sunday_with_five_rows() {
    let state = state_at(date!(2024 - 12 - 17));
    let grid = state.month_grid();
    assert_eq!(grid.row_count(), 5);
    assert_eq!(grid.cells[0].day, Some(1));
    assert_eq!(grid.days().collect::<Vec<_>>(), (1..=31).collect::<Vec<_>>());
}

#[test]
fn leap_february_is_padded_before_thursday() {
    let mut state = state_at(date!(2024 - 03 - 05));
    state.previous_month();
    let grid = state.month_grid();
    assert!(grid.cells[..4].iter().all(|cell| cell.day.is_none()));
    assert_eq!(grid.cells[4].day, Some(1));
    assert_eq!(grid.days().count(), 29);
    assert_eq!(grid.row_count(), 5);
}

#[test]
fn february_2026_fits_exactly_four_rows() {
    let state = state_at(date!(2026 - 02 - 09));
    let grid = state.month_grid();
    assert_eq!(grid.row_count(), 4);
    assert!(grid.cells.iter().all(|cell| cell.day.is_some()));
}

#[test]
fn march_2025_needs_six_rows() {
    let state = state_at(date!(2025 - 03 - 01));
    let grid = state.month_grid();
    assert_eq!(grid.row_count(), 6);
    assert_eq!(grid.cells[6].day, Some(1));
    assert!(grid.rows().all(|row| row.len() == 7));
}

#[test]
fn grid_is_stable_across_calls() {
    let state = state_at(date!(2024 - 12 - 17));
    assert_eq!(state.month_grid(), state.month_grid());
}

#[test]
fn only_todays_cell_is_marked() {
    let state = state_at(date!(2024 - 12 - 17));
    let marked: Vec<_> = state.month_grid().cells.iter().filter(|c| c.is_today).map(|c| c.day).collect();
    assert_eq!(marked, [Some(17)]);
}

#[test]
fn other_months_have_no_today_marker() {
    let mut state = state_at(date!(2024 - 12 - 17));
    state.next_month();
    assert!(state.month_grid().cells.iter().all(|c| !c.is_today));
}

// =============================================================
// days_in_month
// =============================================================

#[test]
fn days_in_month_handles_leap_rules() {
    assert_eq!(days_in_month(2024, Month::February), 29);
    assert_eq!(days_in_month(2025, Month::February), 28);
    assert_eq!(days_in_month(1900, Month::February), 28);
    assert_eq!(days_in_month(2000, Month::February), 29);
    assert_eq!(days_in_month(2025, Month::April), 30);
    assert_eq!(days_in_month(2025, Month::August), 31);
}
