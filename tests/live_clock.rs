use optikgoal_terminal::data::MatchStatus;
use optikgoal_terminal::state::{apply_delta, AppState, Delta};

#[test]
fn minute_tick_advances_live_matches_only() {
    let mut state = AppState::new();
    let before: Vec<(u8, MatchStatus)> = state
        .live_matches
        .iter()
        .map(|m| (m.minute, m.status))
        .collect();

    apply_delta(&mut state, Delta::MinuteTick);

    for (m, (minute, status)) in state.live_matches.iter().zip(before) {
        match status {
            MatchStatus::Live => assert_eq!(m.minute, minute + 1),
            MatchStatus::HalfTime => assert_eq!(m.minute, minute, "half time clock is frozen"),
        }
    }
}

#[test]
fn minute_tick_caps_at_ninety() {
    let mut state = AppState::new();
    for m in &mut state.live_matches {
        m.status = MatchStatus::Live;
        m.minute = 90;
    }

    apply_delta(&mut state, Delta::MinuteTick);
    assert!(state.live_matches.iter().all(|m| m.minute == 90));
}

#[test]
fn repeated_ticks_accumulate() {
    let mut state = AppState::new();
    let live_before: Vec<u8> = state
        .live_matches
        .iter()
        .filter(|m| m.status == MatchStatus::Live)
        .map(|m| m.minute)
        .collect();

    for _ in 0..5 {
        apply_delta(&mut state, Delta::MinuteTick);
    }

    let live_after: Vec<u8> = state
        .live_matches
        .iter()
        .filter(|m| m.status == MatchStatus::Live)
        .map(|m| m.minute)
        .collect();
    for (after, before) in live_after.iter().zip(live_before) {
        assert_eq!(*after, (before + 5).min(90));
    }
}

#[test]
fn log_delta_lands_in_the_console_ring() {
    let mut state = AppState::new();
    apply_delta(&mut state, Delta::Log("[INFO] hello".to_string()));
    assert_eq!(state.logs.back().map(String::as_str), Some("[INFO] hello"));
}

#[test]
fn console_ring_is_bounded() {
    let mut state = AppState::new();
    for i in 0..500 {
        state.push_log(format!("[INFO] line {i}"));
    }
    assert_eq!(state.logs.len(), 200);
    assert_eq!(
        state.logs.back().map(String::as_str),
        Some("[INFO] line 499")
    );
}
