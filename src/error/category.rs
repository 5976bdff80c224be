//! Error category classification.
//!
//! Every error the console can produce maps onto one of these categories,
//! which drive the status line wording and whether the user is told to retry.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection, DNS or timeout problems talking to the server.
    Network,

    /// The session token was rejected or lacks the needed permission.
    Auth,

    /// The server answered with a 5xx or an unreadable body.
    Server,

    /// A bug on our side (bad request construction, invalid state).
    Client,

    /// Input the administrator has to correct.
    User,

    /// Local OS problems (log file, terminal).
    System,

    /// Missing or malformed settings.
    Configuration,
}

impl ErrorCategory {
    /// Whether an operation failing with this category may succeed if repeated.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Short label suitable for log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Suggested next step shown under failures in the status line.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check that the server URL is reachable and try again",
            ErrorCategory::Auth => "Check that the access token belongs to a system admin",
            ErrorCategory::Server => "The server may be having trouble, try again later",
            ErrorCategory::Client => "Please report this issue if it persists",
            ErrorCategory::User => "Please check your input and try again",
            ErrorCategory::System => "Check file permissions and available disk space",
            ErrorCategory::Configuration => {
                "Set ADMIN_CONSOLE_URL or pass --url to point at the server"
            }
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
