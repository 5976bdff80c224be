//! Mapping create-call failures onto dialog fields.
//!
//! Two modes exist. [`ErrorRouting::Legacy`] looks only for the substrings
//! `"email"` and `"username"` (any case) in the error message, and a failure matching
//! neither is treated as success. [`ErrorRouting::Structured`] classifies the
//! failure into a [`CreateUserFailure`] and never reports a failure as success.

use std::fmt;
use std::str::FromStr;

use super::form::Field;
use crate::error::ConfigError;
use crate::models::ServerError;

/// How remote failures are mapped onto the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorRouting {
    /// Substring routing, including the unmatched-error fallthrough.
    #[default]
    Legacy,
    /// Classification by server error id, then message.
    Structured,
}

impl FromStr for ErrorRouting {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(ErrorRouting::Legacy),
            "structured" => Ok(ErrorRouting::Structured),
            _ => Err(ConfigError::InvalidValue {
                key: "ADMIN_CONSOLE_ROUTING".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ErrorRouting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorRouting::Legacy => f.write_str("legacy"),
            ErrorRouting::Structured => f.write_str("structured"),
        }
    }
}

/// Why the server refused to create the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateUserFailure {
    EmailInvalid,
    EmailTaken,
    UsernameInvalid,
    UsernameTaken,
    PasswordRejected,
    Other,
}

// Prefixes of server error ids, checked in order.
const ID_RULES: &[(&str, CreateUserFailure)] = &[
    ("app.user.save.email_exists", CreateUserFailure::EmailTaken),
    ("app.user.save.username_exists", CreateUserFailure::UsernameTaken),
    ("model.user.is_valid.email", CreateUserFailure::EmailInvalid),
    ("api.user.create_user.accepted_domain", CreateUserFailure::EmailInvalid),
    ("model.user.is_valid.username", CreateUserFailure::UsernameInvalid),
    ("model.user.is_valid.pwd", CreateUserFailure::PasswordRejected),
    ("api.user.check_user_password", CreateUserFailure::PasswordRejected),
];

impl CreateUserFailure {
    /// Classify a server error. The error id wins when it is recognized;
    /// otherwise the lower-cased message is inspected.
    pub fn classify(err: &ServerError) -> Self {
        if let Some(id) = err.server_error_id.as_deref() {
            if let Some((_, failure)) = ID_RULES.iter().find(|(prefix, _)| id.starts_with(prefix)) {
                return *failure;
            }
        }

        let message = err.message.to_lowercase();
        let taken = message.contains("exists") || message.contains("taken");
        if message.contains("email") {
            if taken {
                CreateUserFailure::EmailTaken
            } else {
                CreateUserFailure::EmailInvalid
            }
        } else if message.contains("username") {
            if taken {
                CreateUserFailure::UsernameTaken
            } else {
                CreateUserFailure::UsernameInvalid
            }
        } else if message.contains("password") {
            CreateUserFailure::PasswordRejected
        } else {
            CreateUserFailure::Other
        }
    }

    /// Field the failure belongs to, `None` for [`CreateUserFailure::Other`].
    pub fn field(self) -> Option<Field> {
        match self {
            CreateUserFailure::EmailInvalid | CreateUserFailure::EmailTaken => Some(Field::Email),
            CreateUserFailure::UsernameInvalid | CreateUserFailure::UsernameTaken => {
                Some(Field::Username)
            }
            CreateUserFailure::PasswordRejected => Some(Field::Password),
            CreateUserFailure::Other => None,
        }
    }
}

/// Field the legacy substring rule assigns a message to.
///
/// Matching ignores ASCII case, and `"email"` is checked before `"username"`.
pub fn legacy_field(message: &str) -> Option<Field> {
    let message = message.to_ascii_lowercase();
    if message.contains("email") {
        Some(Field::Email)
    } else if message.contains("username") {
        Some(Field::Username)
    } else {
        None
    }
}
