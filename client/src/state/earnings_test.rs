use super::*;

// =============================================================
// Growth
// =============================================================

#[test]
fn monthly_seed_growth_is_plus_twelve_point_one() {
    assert_eq!(format_growth(3240, 2890), "+12.1%");
}

#[test]
fn growth_rounds_to_one_decimal() {
    let pct = growth_percent(3240, 2890).unwrap();
    assert!((pct - 12.110_726).abs() < 1e-4);
    assert_eq!(format_growth(28_650, 22_100), "+29.6%");
}

#[test]
fn negative_growth_has_minus_sign() {
    assert_eq!(format_growth(2850, 3000), "-5.0%");
}

#[test]
fn flat_growth_is_explicitly_positive() {
    assert_eq!(format_growth(500, 500), "+0.0%");
}

#[test]
fn tiny_decline_rounds_to_unsigned_zero() {
    assert_eq!(format_growth(99_999, 100_000), "+0.0%");
    assert_eq!(format_growth(100_001, 100_000), "+0.0%");
    assert_eq!(format_growth(99_900, 100_000), "-0.1%");
}

#[test]
fn growth_without_previous_amount_is_undefined() {
    assert_eq!(growth_percent(500, 0), None);
    assert_eq!(format_growth(500, 0), "n/a");
}

// =============================================================
// Timeframe
// =============================================================

#[test]
fn default_timeframe_is_monthly_with_breakdown() {
    let state = EarningsState::default();
    assert_eq!(state.timeframe, Timeframe::Monthly);
    assert_eq!(state.current(), 3240);
    assert_eq!(state.previous(), 2890);
    assert_eq!(state.growth_label(), "+12.1%");
    assert!(state.shows_breakdown());
    assert!(state.is_growth_positive());
}

#[test]
fn switching_timeframe_picks_matching_totals() {
    let mut state = EarningsState::default();
    state.set_timeframe(Timeframe::Yearly);
    assert_eq!((state.current(), state.previous()), (28_650, 22_100));
    assert!(!state.shows_breakdown());

    state.set_timeframe(Timeframe::Weekly);
    assert_eq!((state.current(), state.previous()), (850, 720));
    assert!(!state.shows_breakdown());
}

#[test]
fn timeframe_ids_parse_back() {
    for timeframe in Timeframe::ALL {
        assert_eq!(Timeframe::parse(timeframe.id()), Some(timeframe));
    }
    assert_eq!(Timeframe::parse("daily"), None);
}

#[test]
fn timeframe_captions() {
    assert_eq!(Timeframe::Monthly.current_caption(), "This Month");
    assert_eq!(Timeframe::Yearly.comparison_caption(), "vs last year");
}

// =============================================================
// Ledger
// =============================================================

#[test]
fn ledger_totals_sum_every_entry() {
    let state = EarningsState::default();
    let totals = state.ledger_totals();
    assert_eq!(totals, LedgerTotals { advance: 2200, total: 4100, remaining: 1900 });
    assert_eq!(totals.total - totals.advance, totals.remaining);
}

#[test]
fn empty_ledger_totals_are_zero() {
    let state = EarningsState { ledger: Vec::new(), ..EarningsState::default() };
    assert_eq!(state.ledger_totals(), LedgerTotals::default());
}

#[test]
fn ledger_modal_toggles() {
    let mut state = EarningsState::default();
    assert!(!state.show_ledger);
    state.open_ledger();
    assert!(state.show_ledger);
    state.close_ledger();
    assert!(!state.show_ledger);
}

// =============================================================
// Goals
// =============================================================

#[test]
fn goal_percent_matches_seed_progress() {
    let state = EarningsState::default();
    let percents: Vec<_> = state.goals.iter().map(EarningsGoal::percent).collect();
    assert_eq!(percents, [81, 80]);
}

#[test]
fn goal_percent_is_clamped() {
    let goal = EarningsGoal { label: "Bookings".to_owned(), current: 15, target: 10, unit: GoalUnit::Count };
    assert_eq!(goal.percent(), 100);
}

#[test]
fn goal_progress_labels_use_units() {
    let state = EarningsState::default();
    assert_eq!(state.goals[0].progress_label(), "$3,240 / $4,000");
    assert_eq!(state.goals[1].progress_label(), "8 / 10");
}
