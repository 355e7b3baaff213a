use optikgoal_terminal::bulletin::BulletinState;
use optikgoal_terminal::data::{Sport, BULLETIN};

#[test]
fn empty_coupon_totals_zero() {
    let state = BulletinState::default();
    assert_eq!(state.total_odds(), "0.00");
}

#[test]
fn coupon_multiplies_home_odds() {
    // Match 1 home 2.50, match 2 home 2.10.
    let mut state = BulletinState::default();
    state.toggle_selected(1);
    state.toggle_selected(2);
    assert_eq!(state.total_odds(), "5.25");
}

#[test]
fn single_selection_totals_its_home_odds() {
    let mut state = BulletinState::default();
    state.toggle_selected(1);
    assert_eq!(state.total_odds(), "2.50");
}

#[test]
fn toggling_twice_removes_the_pick() {
    let mut state = BulletinState::default();
    state.toggle_selected(1);
    state.toggle_selected(2);
    state.toggle_selected(1);
    assert_eq!(state.selected_ids, vec![2]);
    assert_eq!(state.total_odds(), "2.10");
}

#[test]
fn clear_empties_the_coupon() {
    let mut state = BulletinState::default();
    state.toggle_selected(1);
    state.toggle_selected(3);
    state.clear();
    assert!(state.selected_ids.is_empty());
    assert_eq!(state.total_odds(), "0.00");
}

#[test]
fn sport_filter_narrows_the_board_and_resets_cursor() {
    let mut state = BulletinState::default();
    assert_eq!(state.filtered().len(), BULLETIN.len());

    state.select_next();
    state.select_next();
    state.cycle_sport();
    assert_eq!(state.sport, Some(Sport::Football));
    assert_eq!(state.cursor, 0);
    assert!(state.filtered().iter().all(|m| m.sport == Sport::Football));

    state.cycle_sport();
    assert_eq!(state.sport, Some(Sport::Basketball));
    state.cycle_sport();
    assert_eq!(state.sport, Some(Sport::Tennis));
    state.cycle_sport();
    assert_eq!(state.sport, None);
}

#[test]
fn picks_survive_filter_changes() {
    let mut state = BulletinState::default();
    state.toggle_selected(1);
    state.cycle_sport();
    state.cycle_sport();
    assert_eq!(state.total_odds(), "2.50");
}

#[test]
fn cursor_stays_in_bounds() {
    let mut state = BulletinState::default();
    for _ in 0..100 {
        state.select_next();
    }
    assert_eq!(state.cursor, state.filtered().len() - 1);
    state.select_prev();
    state.select_prev();
    for _ in 0..100 {
        state.select_prev();
    }
    assert_eq!(state.cursor, 0);
}
