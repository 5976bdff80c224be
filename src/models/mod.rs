mod password_policy;
mod server_error;
mod user;

pub use password_policy::{PasswordPolicy, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
pub use server_error::{ServerError, INVALID_RESPONSE_MESSAGE};
pub use user::{NewUser, UserProfile};
