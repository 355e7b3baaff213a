//! Auth modal form state: per-field values, errors and touched flags.
//! Validators are pure so they can be exercised without a terminal.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Name,
    Identifier,
    Password,
}

/// What a successfully validated submit hands back to the root controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthSubmit {
    Login { identifier: String, password: String },
    Signup { email: String, password: String, name: String },
}

pub fn validate_identifier(value: &str) -> Option<String> {
    // "admin" is a plain username, exempt from the email shape check.
    if value == "admin" {
        return None;
    }
    if value.is_empty() {
        return Some("This field is required".to_string());
    }
    if !looks_like_email(value) {
        return Some("Email is invalid".to_string());
    }
    None
}

pub fn validate_password(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Password is required".to_string());
    }
    if value.chars().count() < 6 {
        return Some("Password must be at least 6 characters".to_string());
    }
    None
}

pub fn validate_name(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Name is required".to_string());
    }
    None
}

// text@text.text, nothing fancier.
fn looks_like_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[derive(Debug, Clone, Default)]
pub struct FieldSlot {
    pub value: String,
    pub error: Option<String>,
    pub touched: bool,
}

#[derive(Debug, Clone)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub name: FieldSlot,
    pub identifier: FieldSlot,
    pub password: FieldSlot,
    pub focus: AuthField,
}

impl AuthForm {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            name: FieldSlot::default(),
            identifier: FieldSlot::default(),
            password: FieldSlot::default(),
            focus: match mode {
                AuthMode::Login => AuthField::Identifier,
                AuthMode::Signup => AuthField::Name,
            },
        }
    }

    /// Fields applicable to the current mode, in focus order.
    pub fn fields(&self) -> &'static [AuthField] {
        match self.mode {
            AuthMode::Login => &[AuthField::Identifier, AuthField::Password],
            AuthMode::Signup => &[AuthField::Name, AuthField::Identifier, AuthField::Password],
        }
    }

    pub fn slot(&self, field: AuthField) -> &FieldSlot {
        match field {
            AuthField::Name => &self.name,
            AuthField::Identifier => &self.identifier,
            AuthField::Password => &self.password,
        }
    }

    fn slot_mut(&mut self, field: AuthField) -> &mut FieldSlot {
        match field {
            AuthField::Name => &mut self.name,
            AuthField::Identifier => &mut self.identifier,
            AuthField::Password => &mut self.password,
        }
    }

    fn validate(field: AuthField, value: &str) -> Option<String> {
        match field {
            AuthField::Name => validate_name(value),
            AuthField::Identifier => validate_identifier(value),
            AuthField::Password => validate_password(value),
        }
    }

    /// Errors show live once a field has been touched.
    fn revalidate_if_touched(&mut self, field: AuthField) {
        let slot = self.slot_mut(field);
        if slot.touched {
            let error = Self::validate(field, &slot.value);
            slot.error = error;
        }
    }

    pub fn input_char(&mut self, c: char) {
        let field = self.focus;
        self.slot_mut(field).value.push(c);
        self.revalidate_if_touched(field);
    }

    pub fn backspace(&mut self) {
        let field = self.focus;
        self.slot_mut(field).value.pop();
        self.revalidate_if_touched(field);
    }

    /// Blur semantics: leaving a field touches and validates it.
    pub fn blur_focused(&mut self) {
        let field = self.focus;
        let slot = self.slot_mut(field);
        slot.touched = true;
        let error = Self::validate(field, &slot.value);
        slot.error = error;
    }

    pub fn focus_next(&mut self) {
        self.blur_focused();
        let fields = self.fields();
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(idx + 1) % fields.len()];
    }

    pub fn focus_prev(&mut self) {
        self.blur_focused();
        let fields = self.fields();
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(idx + fields.len() - 1) % fields.len()];
    }

    /// Login <-> signup clears all local form state unconditionally.
    pub fn toggle_mode(&mut self) {
        let mode = match self.mode {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        };
        *self = AuthForm::new(mode);
    }

    pub fn error_count(&self) -> usize {
        self.fields()
            .iter()
            .filter(|f| self.slot(**f).error.is_some())
            .count()
    }

    /// Touches and validates every applicable field; with zero errors the
    /// submit payload is returned and the form resets, otherwise the errors
    /// stay on screen and nothing is emitted.
    pub fn submit(&mut self) -> Option<AuthSubmit> {
        for field in self.fields() {
            let slot = self.slot_mut(*field);
            slot.touched = true;
            let error = Self::validate(*field, &slot.value);
            slot.error = error;
        }
        if self.error_count() > 0 {
            return None;
        }
        let submit = match self.mode {
            AuthMode::Login => AuthSubmit::Login {
                identifier: self.identifier.value.clone(),
                password: self.password.value.clone(),
            },
            AuthMode::Signup => AuthSubmit::Signup {
                email: self.identifier.value.clone(),
                password: self.password.value.clone(),
                name: self.name.value.clone(),
            },
        };
        *self = AuthForm::new(self.mode);
        Some(submit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_accepts_admin_literal_and_plain_emails() {
        assert_eq!(validate_identifier("admin"), None);
        assert_eq!(validate_identifier("vip@demo.com"), None);
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("not-an-email").is_some());
        assert!(validate_identifier("a@b").is_some());
    }

    #[test]
    fn password_requires_six_chars() {
        assert!(validate_password("").is_some());
        assert!(validate_password("12345").is_some());
        assert_eq!(validate_password("123456"), None);
    }

    #[test]
    fn errors_appear_only_after_blur() {
        let mut form = AuthForm::new(AuthMode::Login);
        form.input_char('x');
        form.backspace();
        assert_eq!(form.identifier.error, None, "untouched field stays quiet");

        form.blur_focused();
        assert!(form.identifier.error.is_some());

        // Once touched, edits re-validate live.
        for c in "vip@demo.com".chars() {
            form.input_char(c);
        }
        assert_eq!(form.identifier.error, None);
    }
}
