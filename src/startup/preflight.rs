//! Preflight: load what the dialog needs from the server before the TUI starts.

use tracing::{info, warn};

use crate::api::UsersApi;
use crate::models::PasswordPolicy;
use crate::traits::HttpClient;

/// Inputs the dialog needs that come from the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogContext {
    pub password_config: PasswordPolicy,
    /// Empty when the signed-in user could not be fetched.
    pub current_user_id: String,
    /// Display name of the signed-in user, for the header.
    pub current_user_name: Option<String>,
}

/// Fetch the password policy and the signed-in user.
///
/// Neither failure is fatal: the policy falls back to the default and the
/// user id stays empty, so the dialog still opens against a server that
/// hides its config.
pub async fn load_dialog_context<C: HttpClient>(api: &UsersApi<C>) -> DialogContext {
    let password_config = match api.fetch_password_policy().await {
        Ok(policy) => {
            info!(minimum_length = policy.minimum_length, "loaded password policy");
            policy
        }
        Err(err) => {
            warn!(error = %err, code = err.error_code(), "using default password policy");
            PasswordPolicy::default()
        }
    };

    let (current_user_id, current_user_name) = match api.get_me().await {
        Ok(me) => (me.id.clone(), Some(me.display_name())),
        Err(err) => {
            warn!(error = %err, "could not load signed-in user");
            (String::new(), None)
        }
    };

    DialogContext {
        password_config,
        current_user_id,
        current_user_name,
    }
}
