//! Common test utilities for integration tests.
//!
//! Provides a recording [`DialogCallbacks`] implementation and builders for
//! dialogs with a ready-to-submit form.

#![allow(dead_code)]

use admin_console::dialog::{CreateUserDialog, CreateUserProps, DialogCallbacks, ErrorRouting, Field};
use admin_console::models::{PasswordPolicy, ServerError, UserProfile};

/// Records every callback the dialog fires.
#[derive(Debug, Default)]
pub struct Recorder {
    pub submitted: Vec<Option<UserProfile>>,
    pub dismissed: usize,
}

impl DialogCallbacks for Recorder {
    fn on_modal_submit(&mut self, user: Option<&UserProfile>) {
        self.submitted.push(user.cloned());
    }

    fn on_modal_dismissed(&mut self) {
        self.dismissed += 1;
    }
}

/// Visible dialog with the default password policy and an empty form.
pub fn empty_dialog() -> CreateUserDialog<Recorder> {
    CreateUserDialog::new(
        CreateUserProps {
            show: true,
            ..Default::default()
        },
        Recorder::default(),
    )
}

/// Visible dialog whose form passes client-side validation.
pub fn filled_dialog(routing: ErrorRouting) -> CreateUserDialog<Recorder> {
    let mut dialog = empty_dialog().with_routing(routing);
    fill(&mut dialog, "a@b.com", "Admin", "hunter22");
    dialog
}

/// Dialog built with a specific policy and `user` prop.
pub fn dialog_with(policy: PasswordPolicy, user: Option<UserProfile>) -> CreateUserDialog<Recorder> {
    CreateUserDialog::new(
        CreateUserProps {
            user,
            current_user_id: "admin-id".to_string(),
            show: true,
            password_config: policy,
        },
        Recorder::default(),
    )
}

pub fn fill(dialog: &mut CreateUserDialog<Recorder>, email: &str, username: &str, password: &str) {
    dialog.form_mut().set(Field::Email, email);
    dialog.form_mut().set(Field::Username, username);
    dialog.form_mut().set(Field::Password, password);
}

/// Policy requiring every character class and at least 8 characters.
pub fn strict_policy() -> PasswordPolicy {
    PasswordPolicy {
        minimum_length: 8,
        require_lowercase: true,
        require_number: true,
        require_symbol: true,
        require_uppercase: true,
    }
}

pub fn server_error(message: &str) -> ServerError {
    ServerError::new(message)
}

pub fn profile(id: &str, username: &str) -> UserProfile {
    UserProfile {
        id: id.to_string(),
        username: username.to_string(),
        ..Default::default()
    }
}
