use optikgoal_terminal::auth_form::AuthMode;
use optikgoal_terminal::data::{PlanId, PAYMENT_METHODS, VIP_PLANS};
use optikgoal_terminal::state::AppState;
use optikgoal_terminal::vip::VipState;

#[test]
fn plans_are_priced_as_advertised() {
    assert_eq!(VIP_PLANS.len(), 3);
    assert_eq!(VIP_PLANS[0].id, PlanId::Monthly);
    assert_eq!(VIP_PLANS[0].price, "29.99");
    assert_eq!(VIP_PLANS[1].id, PlanId::Quarterly);
    assert!(VIP_PLANS[1].popular);
    assert_eq!(VIP_PLANS[2].id, PlanId::Annual);
}

#[test]
fn choosing_a_plan_opens_the_payment_chooser() {
    let mut vip = VipState::default();
    vip.select_next();
    vip.choose_plan_under_cursor();

    assert_eq!(vip.selected_plan, Some(PlanId::Quarterly));
    assert!(vip.show_payment);
    assert_eq!(vip.payment_cursor, 0);

    // Cursor now walks payment methods, not plans.
    vip.select_next();
    assert_eq!(vip.payment_cursor, 1);
    vip.back_to_plans();
    assert!(!vip.show_payment);
}

#[test]
fn payment_cursor_stays_in_bounds() {
    let mut vip = VipState::default();
    vip.choose_plan_under_cursor();
    for _ in 0..50 {
        vip.select_next();
    }
    assert_eq!(vip.payment_cursor, PAYMENT_METHODS.len() - 1);
}

#[test]
fn anonymous_plan_selection_opens_signup() {
    let mut state = AppState::new();
    state.select_vip_plan();

    assert!(matches!(
        state.auth.as_ref().map(|f| f.mode),
        Some(AuthMode::Signup)
    ));
    assert_eq!(state.vip.selected_plan, None);
    assert!(!state.vip.show_payment);
}

#[test]
fn authenticated_plan_selection_goes_through() {
    let mut state = AppState::new();
    state.login("user@mail.com", "123456");
    state.select_vip_plan();

    assert_eq!(state.vip.selected_plan, Some(PlanId::Monthly));
    assert!(state.vip.show_payment);
    assert!(state.auth.is_none());
}
