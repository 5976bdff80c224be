use serde::{Deserialize, Serialize};
use std::fmt;

/// A stored user account as returned by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub roles: String,
    /// Creation time in epoch milliseconds
    #[serde(default)]
    pub create_at: i64,
}

impl UserProfile {
    /// Name to show in the status line: nickname, then full name, then username.
    pub fn display_name(&self) -> String {
        if !self.nickname.is_empty() {
            return self.nickname.clone();
        }
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if !full.is_empty() {
            return full.to_string();
        }
        self.username.clone()
    }
}

/// Candidate user record sent to the create call.
///
/// Only [`NewUser::normalized`] builds one, so every instance is trimmed and
/// carries a lower-cased username.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password: String,
}

impl NewUser {
    pub fn normalized(email: &str, username: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_string(),
            username: username.trim().to_lowercase(),
            password: password.trim().to_string(),
        }
    }
}

// Keeps the password out of logs.
impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_trims_and_lowercases() {
        let user = NewUser::normalized(" a@b.com ", " Admin ", " hunter2! ");
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.username, "admin");
        assert_eq!(user.password, "hunter2!");
    }

    #[test]
    fn test_email_case_is_preserved() {
        let user = NewUser::normalized("Jane.Doe@Example.com", "jane", "pw");
        assert_eq!(user.email, "Jane.Doe@Example.com");
    }

    #[test]
    fn test_debug_redacts_password() {
        let user = NewUser::normalized("a@b.com", "admin", "s3cret-value");
        let debug = format!("{:?}", user);
        assert!(debug.contains("admin"));
        assert!(!debug.contains("s3cret-value"));
    }

    #[test]
    fn test_serializes_three_fields() {
        let user = NewUser::normalized("a@b.com", "admin", "pw");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "a@b.com", "username": "admin", "password": "pw"})
        );
    }

    #[test]
    fn test_profile_deserializes_with_missing_fields() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"id":"u1","username":"admin","unknown":true}"#).unwrap();
        assert_eq!(profile.id, "u1");
        assert_eq!(profile.email, "");
        assert_eq!(profile.display_name(), "admin");
    }

    #[test]
    fn test_display_name_prefers_nickname_then_full_name() {
        let mut profile = UserProfile {
            username: "jdoe".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.display_name(), "Jane Doe");
        profile.nickname = "JD".to_string();
        assert_eq!(profile.display_name(), "JD");
    }
}
