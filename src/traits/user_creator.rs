//! The user-creation operation the dialog submits to.

use async_trait::async_trait;

use crate::models::{NewUser, ServerError, UserProfile};

/// Outcome of a create call: the stored profile, or the server's error.
pub type CreateUserResult = Result<UserProfile, ServerError>;

/// Creates a user account on the server.
///
/// `token`, `invite_id` and `redirect` belong to the invite sign-up flow.
/// The admin dialog always passes empty strings for all three.
#[async_trait]
pub trait UserCreator: Send + Sync {
    async fn create_user(
        &self,
        user: &NewUser,
        token: &str,
        invite_id: &str,
        redirect: &str,
    ) -> CreateUserResult;
}
