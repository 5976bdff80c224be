use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::ConfigError;

/// Shortest password accepted when the server sends no policy.
pub const MIN_PASSWORD_LENGTH: usize = 5;
/// Longest password the server stores.
pub const MAX_PASSWORD_LENGTH: usize = 64;

/// Password rules configured on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordPolicy {
    pub minimum_length: usize,
    pub require_lowercase: bool,
    pub require_number: bool,
    pub require_symbol: bool,
    pub require_uppercase: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            minimum_length: MIN_PASSWORD_LENGTH,
            require_lowercase: false,
            require_number: false,
            require_symbol: false,
            require_uppercase: false,
        }
    }
}

impl PasswordPolicy {
    /// Build the policy from the legacy client-config map
    /// (`GET /api/v4/config/client?format=old`), where every value is a string.
    ///
    /// A missing `PasswordMinimumLength` falls back to [`MIN_PASSWORD_LENGTH`];
    /// boolean keys are true only for the literal string `"true"`.
    pub fn from_client_config(config: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let minimum_length = match config.get("PasswordMinimumLength") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "PasswordMinimumLength".to_string(),
                    value: raw.clone(),
                })?,
            None => MIN_PASSWORD_LENGTH,
        };

        let flag = |key: &str| config.get(key).map(|v| v == "true").unwrap_or(false);

        Ok(Self {
            minimum_length,
            require_lowercase: flag("PasswordRequireLowercase"),
            require_number: flag("PasswordRequireNumber"),
            require_symbol: flag("PasswordRequireSymbol"),
            require_uppercase: flag("PasswordRequireUppercase"),
        })
    }

    /// Whether any character class is required.
    pub fn requires_character_classes(&self) -> bool {
        self.require_lowercase || self.require_uppercase || self.require_number || self.require_symbol
    }
}
