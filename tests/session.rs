use optikgoal_terminal::auth_form::AuthMode;
use optikgoal_terminal::state::{classify_credentials, AppState, LoginTier, Page};

#[test]
fn credential_tiers() {
    assert_eq!(classify_credentials("admin", "admin123"), LoginTier::Admin);
    assert_eq!(
        classify_credentials("vip@demo.com", "vip123"),
        LoginTier::VipDemo
    );
    assert_eq!(
        classify_credentials("someone@example.com", "hunter22"),
        LoginTier::Regular
    );
    // Wrong password for a privileged identifier still logs in, as regular.
    assert_eq!(classify_credentials("admin", "wrong"), LoginTier::Regular);
    assert_eq!(
        classify_credentials("vip@demo.com", "nope"),
        LoginTier::Regular
    );
}

#[test]
fn admin_login_lands_on_control_center() {
    let mut state = AppState::new();
    state.open_auth_modal(AuthMode::Login);
    state.login("admin", "admin123");

    assert!(state.is_authenticated);
    assert!(state.is_admin);
    assert!(!state.is_vip);
    assert!(state.auth.is_none());
    assert_eq!(state.page, Page::Admin);
    assert_eq!(state.visible_page(), Page::Admin);
}

#[test]
fn vip_login_sets_vip_only() {
    let mut state = AppState::new();
    state.login("vip@demo.com", "vip123");

    assert!(state.is_authenticated);
    assert!(state.is_vip);
    assert!(!state.is_admin);
    assert_eq!(state.page, Page::Home);
}

#[test]
fn any_other_credentials_log_in_as_regular() {
    let mut state = AppState::new();
    state.login("whoever@mail.com", "123456");

    assert!(state.is_authenticated);
    assert!(!state.is_vip);
    assert!(!state.is_admin);
}

#[test]
fn admin_page_falls_back_to_home_for_non_admins() {
    let mut state = AppState::new();
    state.change_page(Page::Admin);
    assert_eq!(state.page, Page::Admin);
    assert_eq!(state.visible_page(), Page::Home);

    state.login("regular@mail.com", "123456");
    assert_eq!(state.visible_page(), Page::Home);

    state.logout();
    state.login("admin", "admin123");
    assert_eq!(state.visible_page(), Page::Admin);
}

#[test]
fn logout_resets_session_and_navigates_home() {
    let mut state = AppState::new();
    state.login("admin", "admin123");
    assert_eq!(state.page, Page::Admin);

    state.logout();
    assert!(!state.is_authenticated);
    assert!(!state.is_admin);
    assert!(!state.is_vip);
    assert_eq!(state.page, Page::Home);
}

#[test]
fn signup_authenticates_without_granting_roles() {
    let mut state = AppState::new();
    state.open_auth_modal(AuthMode::Signup);
    state.signup("new@mail.com", "secret1", "New User");

    assert!(state.is_authenticated);
    assert!(!state.is_vip);
    assert!(!state.is_admin);
    assert!(state.auth.is_none());
}

#[test]
fn ads_show_only_for_authenticated_regulars() {
    let mut state = AppState::new();
    for auth in [false, true] {
        for vip in [false, true] {
            for admin in [false, true] {
                state.is_authenticated = auth;
                state.is_vip = vip;
                state.is_admin = admin;
                assert_eq!(
                    state.show_ads(),
                    auth && !vip && !admin,
                    "auth={auth} vip={vip} admin={admin}"
                );
            }
        }
    }
}

#[test]
fn ads_follow_the_session_through_login_and_logout() {
    let mut state = AppState::new();
    assert!(!state.show_ads());

    state.login("regular@mail.com", "123456");
    assert!(state.show_ads());

    state.logout();
    state.login("vip@demo.com", "vip123");
    assert!(!state.show_ads());

    state.logout();
    state.login("admin", "admin123");
    assert!(!state.show_ads());
}

#[test]
fn changing_page_resets_the_target_cursor() {
    let mut state = AppState::new();
    state.change_page(Page::Bulletin);
    state.bulletin.select_next();
    state.bulletin.select_next();
    assert_eq!(state.bulletin.cursor, 2);

    state.change_page(Page::Live);
    state.change_page(Page::Bulletin);
    assert_eq!(state.bulletin.cursor, 0);
}
