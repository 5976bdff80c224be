//! Console configuration.
//!
//! Built from the environment with [`ConsoleConfig::from_env`], then
//! overridden by command-line flags with [`ConsoleConfig::with_overrides`].
//!
//! ```ignore
//! use admin_console::startup::ConsoleConfig;
//!
//! let config = ConsoleConfig::from_env()?.with_overrides(&overrides);
//! let config = config.validate()?;
//! ```

use crate::cli::CliOverrides;
use crate::dialog::ErrorRouting;
use crate::error::ConfigError;

pub const ENV_URL: &str = "ADMIN_CONSOLE_URL";
pub const ENV_TOKEN: &str = "ADMIN_CONSOLE_TOKEN";
pub const ENV_ROUTING: &str = "ADMIN_CONSOLE_ROUTING";
pub const ENV_LOG: &str = "ADMIN_CONSOLE_LOG";

/// Log filter used when `ADMIN_CONSOLE_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Server root, e.g. `https://chat.example.com`. Required before startup.
    pub server_url: Option<String>,
    /// Bearer token for the admin session
    pub token: Option<String>,
    /// How create-user failures map onto the dialog
    pub routing: ErrorRouting,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            server_url: None,
            token: None,
            routing: ErrorRouting::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ConsoleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_routing(mut self, routing: ErrorRouting) -> Self {
        self.routing = routing;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Read `ADMIN_CONSOLE_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let routing = match get(ENV_ROUTING) {
            Some(raw) => raw.parse()?,
            None => ErrorRouting::default(),
        };

        Ok(Self {
            server_url: get(ENV_URL),
            token: get(ENV_TOKEN),
            routing,
            log_filter: get(ENV_LOG).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }

    /// Apply command-line flags on top of the environment.
    pub fn with_overrides(mut self, overrides: &CliOverrides) -> Self {
        if let Some(ref url) = overrides.url {
            self.server_url = Some(url.clone());
        }
        if let Some(ref token) = overrides.token {
            self.token = Some(token.clone());
        }
        if overrides.structured_errors {
            self.routing = ErrorRouting::Structured;
        }
        self
    }

    /// Check required settings and return the server URL without a trailing slash.
    pub fn validate(&self) -> Result<String, ConfigError> {
        let url = self.server_url.as_deref().ok_or(ConfigError::Missing(ENV_URL))?;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                key: ENV_URL.to_string(),
                value: url.to_string(),
            });
        }
        Ok(url.trim_end_matches('/').to_string())
    }
}
