//! Scripted [`UserCreator`] for dialog tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::models::{NewUser, UserProfile};
use crate::traits::{CreateUserResult, UserCreator};

/// Arguments of one recorded `create_user` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserCall {
    pub user: NewUser,
    pub token: String,
    pub invite_id: String,
    pub redirect: String,
}

/// Replays queued results in order and records every call.
///
/// Once the queue is empty each call succeeds with a profile built from the
/// submitted email and username.
#[derive(Debug, Clone, Default)]
pub struct MockUserCreator {
    results: Arc<Mutex<VecDeque<CreateUserResult>>>,
    calls: Arc<Mutex<Vec<CreateUserCall>>>,
}

impl MockUserCreator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creator whose first call returns `result`.
    pub fn returning(result: CreateUserResult) -> Self {
        let creator = Self::new();
        creator.push_result(result);
        creator
    }

    pub fn push_result(&self, result: CreateUserResult) {
        self.results.lock().unwrap().push_back(result);
    }

    pub fn calls(&self) -> Vec<CreateUserCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl UserCreator for MockUserCreator {
    async fn create_user(
        &self,
        user: &NewUser,
        token: &str,
        invite_id: &str,
        redirect: &str,
    ) -> CreateUserResult {
        self.calls.lock().unwrap().push(CreateUserCall {
            user: user.clone(),
            token: token.to_string(),
            invite_id: invite_id.to_string(),
            redirect: redirect.to_string(),
        });

        let queued = self.results.lock().unwrap().pop_front();
        queued.unwrap_or_else(|| {
            Ok(UserProfile {
                id: format!("id-{}", user.username),
                username: user.username.clone(),
                email: user.email.clone(),
                ..Default::default()
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServerError;

    #[tokio::test]
    async fn test_replays_then_defaults_to_success() {
        let creator = MockUserCreator::returning(Err(ServerError::new("Invalid email format")));
        let user = NewUser::normalized("a@b.com", "admin", "password1");

        let first = creator.create_user(&user, "", "", "").await;
        assert_eq!(first.unwrap_err().message, "Invalid email format");

        let second = creator.create_user(&user, "", "", "").await.unwrap();
        assert_eq!(second.username, "admin");
        assert_eq!(creator.call_count(), 2);
        assert_eq!(creator.calls()[0].user, user);
    }
}
