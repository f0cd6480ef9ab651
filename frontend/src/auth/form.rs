use std::rc::Rc;
use std::str::FromStr;

use serde::Serialize;
use yew::Reducible;

/// Body of the login request. Lives only as long as the form.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
}

impl FromStr for Field {
    type Err = String;

    /// Parses the `name` attribute of a form input.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "email" => Ok(Field::Email),
            "password" => Ok(Field::Password),
            other => Err(format!("unknown login field `{}`", other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub is_submitting: bool,
    pub is_password_visible: bool,
    pub is_page_loading: bool,
}

impl Default for ViewState {
    // Page-loading until the session check has run.
    fn default() -> Self {
        Self {
            is_submitting: false,
            is_password_visible: false,
            is_page_loading: true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub credentials: Credentials,
    pub view: ViewState,
}

impl LoginForm {
    pub fn update_field(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.credentials.email = value,
            Field::Password => self.credentials.password = value,
        }
    }

    pub fn toggle_password_visibility(&mut self) {
        self.view.is_password_visible = !self.view.is_password_visible;
    }

    pub fn show_form(&mut self) {
        self.view.is_page_loading = false;
    }

    /// Marks the form as submitting and hands back what to send.
    /// Returns `None` while a previous submission is still in flight.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.view.is_submitting {
            return None;
        }
        self.view.is_submitting = true;
        Some(self.credentials.clone())
    }

    /// Re-enables the form. Inputs keep what the user typed.
    pub fn submit_failed(&mut self) {
        self.view.is_submitting = false;
    }

    pub fn password_input_type(&self) -> &'static str {
        if self.view.is_password_visible {
            "text"
        } else {
            "password"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.view.is_submitting {
            "Signing in..."
        } else {
            "Sign in"
        }
    }
}

pub enum LoginAction {
    ShowForm,
    Update(Field, String),
    TogglePasswordVisibility,
    SubmitStarted,
    SubmitFailed,
}

impl Reducible for LoginForm {
    type Action = LoginAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LoginAction::ShowForm => next.show_form(),
            LoginAction::Update(field, value) => next.update_field(field, value),
            LoginAction::TogglePasswordVisibility => next.toggle_password_visibility(),
            LoginAction::SubmitStarted => {
                next.begin_submit();
            }
            LoginAction::SubmitFailed => next.submit_failed(),
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(email: &str, password: &str) -> LoginForm {
        let mut form = LoginForm::default();
        form.update_field(Field::Email, email.to_string());
        form.update_field(Field::Password, password.to_string());
        form
    }

    #[test]
    fn new_form_is_empty_and_loading() {
        let form = LoginForm::default();
        assert_eq!(form.credentials, Credentials::default());
        assert!(form.view.is_page_loading);
        assert!(!form.view.is_submitting);
        assert!(!form.view.is_password_visible);
    }

    #[test]
    fn field_names_parse_from_input_names() {
        assert_eq!("email".parse::<Field>(), Ok(Field::Email));
        assert_eq!("password".parse::<Field>(), Ok(Field::Password));
        assert!("username".parse::<Field>().is_err());
    }

    #[test]
    fn update_replaces_only_the_named_field() {
        let mut form = filled("a@b.com", "secret");
        form.update_field(Field::Password, "other".to_string());
        assert_eq!(form.credentials.email, "a@b.com");
        assert_eq!(form.credentials.password, "other");
    }

    #[test]
    fn toggling_visibility_keeps_credentials() {
        let mut form = filled("a@b.com", "secret");
        form.toggle_password_visibility();
        assert_eq!(form.password_input_type(), "text");
        form.toggle_password_visibility();
        assert_eq!(form.password_input_type(), "password");
        assert_eq!(form.credentials.email, "a@b.com");
        assert_eq!(form.credentials.password, "secret");
    }

    #[test]
    fn second_submit_is_refused_while_in_flight() {
        let mut form = filled("a@b.com", "secret");
        let sent = form.begin_submit();
        assert_eq!(sent.map(|c| c.email), Some("a@b.com".to_string()));
        assert_eq!(form.submit_label(), "Signing in...");
        assert_eq!(form.begin_submit(), None);
    }

    #[test]
    fn failed_submit_reenables_without_clearing() {
        let mut form = filled("a@b.com", "wrong");
        form.begin_submit();
        form.submit_failed();
        assert!(!form.view.is_submitting);
        assert_eq!(form.submit_label(), "Sign in");
        assert_eq!(form.credentials.email, "a@b.com");
        assert_eq!(form.credentials.password, "wrong");
    }

    #[test]
    fn reducer_applies_actions_in_order() {
        let form = Rc::new(LoginForm::default())
            .reduce(LoginAction::ShowForm)
            .reduce(LoginAction::Update(Field::Email, "a@b.com".to_string()))
            .reduce(LoginAction::Update(Field::Password, "wrong".to_string()))
            .reduce(LoginAction::TogglePasswordVisibility)
            .reduce(LoginAction::SubmitStarted);
        assert!(!form.view.is_page_loading);
        assert!(form.view.is_submitting);
        assert!(form.view.is_password_visible);

        let form = form.reduce(LoginAction::SubmitFailed);
        assert!(!form.view.is_submitting);
        assert_eq!(form.credentials.email, "a@b.com");
        assert_eq!(form.credentials.password, "wrong");
    }

    #[test]
    fn credentials_serialize_as_email_and_password() {
        let body = serde_json::to_value(filled("a@b.com", "secret").credentials).unwrap();
        assert_eq!(body, serde_json::json!({"email": "a@b.com", "password": "secret"}));
    }
}
