use optikgoal_terminal::auth_form::{AuthField, AuthForm, AuthMode, AuthSubmit};

fn type_into(form: &mut AuthForm, text: &str) {
    for c in text.chars() {
        form.input_char(c);
    }
}

#[test]
fn empty_login_submit_reports_both_required_fields() {
    let mut form = AuthForm::new(AuthMode::Login);
    let result = form.submit();

    assert!(result.is_none());
    assert_eq!(form.error_count(), 2);
    assert_eq!(
        form.identifier.error.as_deref(),
        Some("This field is required")
    );
    assert_eq!(form.password.error.as_deref(), Some("Password is required"));
}

#[test]
fn admin_credentials_submit_cleanly() {
    let mut form = AuthForm::new(AuthMode::Login);
    type_into(&mut form, "admin");
    form.focus_next();
    type_into(&mut form, "admin123");

    let result = form.submit();
    assert_eq!(
        result,
        Some(AuthSubmit::Login {
            identifier: "admin".to_string(),
            password: "admin123".to_string(),
        })
    );
    // Form resets after a successful submit.
    assert!(form.identifier.value.is_empty());
    assert_eq!(form.error_count(), 0);
}

#[test]
fn bad_email_blocks_submit() {
    let mut form = AuthForm::new(AuthMode::Login);
    type_into(&mut form, "not-an-email");
    form.focus_next();
    type_into(&mut form, "123456");

    assert!(form.submit().is_none());
    assert_eq!(form.identifier.error.as_deref(), Some("Email is invalid"));
    assert_eq!(form.password.error, None);
}

#[test]
fn short_password_blocks_submit() {
    let mut form = AuthForm::new(AuthMode::Login);
    type_into(&mut form, "user@mail.com");
    form.focus_next();
    type_into(&mut form, "12345");

    assert!(form.submit().is_none());
    assert_eq!(
        form.password.error.as_deref(),
        Some("Password must be at least 6 characters")
    );
}

#[test]
fn signup_requires_name_and_starts_focused_on_it() {
    let mut form = AuthForm::new(AuthMode::Signup);
    assert_eq!(form.focus, AuthField::Name);

    let result = form.submit();
    assert!(result.is_none());
    assert_eq!(form.error_count(), 3);
    assert_eq!(form.name.error.as_deref(), Some("Name is required"));
}

#[test]
fn signup_submit_builds_payload() {
    let mut form = AuthForm::new(AuthMode::Signup);
    type_into(&mut form, "Ada");
    form.focus_next();
    type_into(&mut form, "ada@mail.com");
    form.focus_next();
    type_into(&mut form, "secret1");

    assert_eq!(
        form.submit(),
        Some(AuthSubmit::Signup {
            email: "ada@mail.com".to_string(),
            password: "secret1".to_string(),
            name: "Ada".to_string(),
        })
    );
}

#[test]
fn toggling_mode_discards_entered_values_and_errors() {
    let mut form = AuthForm::new(AuthMode::Login);
    type_into(&mut form, "garbage");
    form.focus_next();
    assert!(form.identifier.error.is_some());

    form.toggle_mode();
    assert_eq!(form.mode, AuthMode::Signup);
    assert!(form.identifier.value.is_empty());
    assert_eq!(form.error_count(), 0);
    assert_eq!(form.focus, AuthField::Name);
}

#[test]
fn focus_wraps_within_mode_fields() {
    let mut form = AuthForm::new(AuthMode::Login);
    assert_eq!(form.focus, AuthField::Identifier);
    form.focus_next();
    assert_eq!(form.focus, AuthField::Password);
    form.focus_next();
    assert_eq!(form.focus, AuthField::Identifier);
    form.focus_prev();
    assert_eq!(form.focus, AuthField::Password);
}
