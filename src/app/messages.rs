//! AppMessage enum for async communication within the application.

use crate::models::UserProfile;
use crate::traits::CreateUserResult;

/// Messages delivered to the main loop from background tasks and dialog callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// The spawned create call finished. `ticket` is the submission it answers.
    CreateUserFinished {
        ticket: u64,
        result: CreateUserResult,
    },
    /// The dialog reported a successful submit (carries the `user` prop)
    DialogSubmitted(Option<UserProfile>),
    /// The dialog was cancelled
    DialogDismissed,
}
