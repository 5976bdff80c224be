//! Form values and per-field error slots for the Create User dialog.

use std::fmt;

/// The three inputs of the dialog, in validation and focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Username,
    Password,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Email, Field::Username, Field::Password];

    /// Field after this one, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Field::Email => Field::Username,
            Field::Username => Field::Password,
            Field::Password => Field::Email,
        }
    }

    /// Field before this one, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            Field::Email => Field::Password,
            Field::Username => Field::Email,
            Field::Password => Field::Username,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Email => "Email",
            Field::Username => "Username",
            Field::Password => "Password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Email => f.write_str("email"),
            Field::Username => f.write_str("username"),
            Field::Password => f.write_str("password"),
        }
    }
}

/// Raw input values, updated on every edit. Nothing here is trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub username: String,
    pub password: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Username => &self.username,
            Field::Password => &self.password,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Email => &mut self.email,
            Field::Username => &mut self.username,
            Field::Password => &mut self.password,
        }
    }

    /// Replace a field's value.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
    }

    pub fn push_char(&mut self, field: Field, c: char) {
        self.value_mut(field).push(c);
    }

    pub fn pop_char(&mut self, field: Field) {
        self.value_mut(field).pop();
    }

    /// Empty all three values.
    pub fn clear(&mut self) {
        self.email.clear();
        self.username.clear();
        self.password.clear();
    }
}

/// The three independent error slots shown under each input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    email: Option<String>,
    username: Option<String>,
    password: Option<String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        *self.slot_mut(field) = Some(message.into());
    }

    pub fn clear(&mut self, field: Field) {
        *self.slot_mut(field) = None;
    }

    /// Clear all three slots.
    pub fn reset(&mut self) {
        self.email = None;
        self.username = None;
        self.password = None;
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.username.is_none() && self.password.is_none()
    }

    /// Fields currently showing an error, in display order.
    pub fn fields_with_errors(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.slot(*field).is_some())
            .collect()
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::Email => &self.email,
            Field::Username => &self.username,
            Field::Password => &self.password,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Email => &mut self.email,
            Field::Username => &mut self.username,
            Field::Password => &mut self.password,
        }
    }
}
