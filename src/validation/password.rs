//! Password policy validator.
//!
//! The returned message always describes the whole policy (length range plus
//! every required character class), not only the rule that failed, so the
//! administrator sees the full requirement in one place.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{PasswordPolicy, MAX_PASSWORD_LENGTH};

static LOWERCASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]").expect("valid regex"));
static UPPERCASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").expect("valid regex"));
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").expect("valid regex"));
static SYMBOL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[ !"\\#$%&'()*+,\-./:;<=>?@\[\]\^_`|~]"#).expect("valid regex")
});

/// Result of checking a password against a [`PasswordPolicy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordCheck {
    pub valid: bool,
    /// Present exactly when `valid` is false.
    pub error: Option<String>,
}

impl PasswordCheck {
    fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    fn rejected(message: String) -> Self {
        Self {
            valid: false,
            error: Some(message),
        }
    }
}

/// Check `password` against `policy`.
///
/// Length is counted in characters and must fall within
/// `[policy.minimum_length, MAX_PASSWORD_LENGTH]`.
pub fn is_valid_password(password: &str, policy: &PasswordPolicy) -> PasswordCheck {
    let length = password.chars().count();
    let mut valid = length >= policy.minimum_length && length <= MAX_PASSWORD_LENGTH;

    if policy.require_lowercase && !LOWERCASE.is_match(password) {
        valid = false;
    }
    if policy.require_uppercase && !UPPERCASE.is_match(password) {
        valid = false;
    }
    if policy.require_number && !NUMBER.is_match(password) {
        valid = false;
    }
    if policy.require_symbol && !SYMBOL.is_match(password) {
        valid = false;
    }

    if valid {
        PasswordCheck::ok()
    } else {
        PasswordCheck::rejected(policy_message(policy))
    }
}

/// Human-readable description of the policy.
pub fn policy_message(policy: &PasswordPolicy) -> String {
    let mut requirements = Vec::new();
    if policy.require_lowercase {
        requirements.push("at least one lowercase letter");
    }
    if policy.require_uppercase {
        requirements.push("at least one uppercase letter");
    }
    if policy.require_number {
        requirements.push("at least one number");
    }
    if policy.require_symbol {
        requirements.push("at least one symbol (e.g. \"~!@#$%^&*()\")");
    }

    let range = format!(
        "Your password must contain between {} and {} characters",
        policy.minimum_length, MAX_PASSWORD_LENGTH
    );

    match requirements.as_slice() {
        [] => format!("{}.", range),
        [only] => format!("{} made up of {}.", range, only),
        [first, second] => format!("{} made up of {} and {}.", range, first, second),
        [init @ .., last] => format!("{} made up of {}, and {}.", range, init.join(", "), last),
    }
}
