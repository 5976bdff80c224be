//! Client-side validators.

pub mod password;

pub use password::{is_valid_password, policy_message, PasswordCheck};
